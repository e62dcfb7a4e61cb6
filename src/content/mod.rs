//! Content kinds, shapes, and resolution
//!
//! - `display` - render-ready record shapes
//! - `storage` - remote table row shapes
//! - `normalize` - pure storage-to-display mapping
//! - `resolver` - default-first remote-override resolution

pub mod display;
pub mod normalize;
pub mod resolver;
pub mod storage;

pub use resolver::{DataSource, PortfolioContent, Resolved, Resolver};

/// One category of portfolio content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Profile,
    Stat,
    Experience,
    Skill,
    TechCategory,
    Project,
    SocialLink,
    ContactCopy,
}

impl ContentKind {
    /// URL slug used by the HTTP surface
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Stat => "stats",
            Self::Experience => "experiences",
            Self::Skill => "skills",
            Self::TechCategory => "tech-categories",
            Self::Project => "projects",
            Self::SocialLink => "social-links",
            Self::ContactCopy => "contact",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "profile" => Some(Self::Profile),
            "stats" => Some(Self::Stat),
            "experiences" => Some(Self::Experience),
            "skills" => Some(Self::Skill),
            "tech-categories" => Some(Self::TechCategory),
            "projects" => Some(Self::Project),
            "social-links" => Some(Self::SocialLink),
            "contact" => Some(Self::ContactCopy),
            _ => None,
        }
    }

    /// Remote table backing this kind, if any (contact copy is static-only)
    pub fn table(&self) -> Option<&'static str> {
        match self {
            Self::Profile => Some(storage::PERSONAL_INFO),
            Self::Stat => Some(storage::STATS),
            Self::Experience => Some(storage::EXPERIENCES),
            Self::Skill => Some(storage::SKILLS),
            Self::TechCategory => Some(storage::TECH_CATEGORIES),
            Self::Project => Some(storage::PROJECTS),
            Self::SocialLink => Some(storage::SOCIAL_LINKS),
            Self::ContactCopy => None,
        }
    }
}
