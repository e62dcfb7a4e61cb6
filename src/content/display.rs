//! Display shapes - the record forms consumed by the presentation layer
//!
//! Display records carry semantic, render-ready values: resolved icon
//! handles, composed gradient strings, platform hover colors. They are
//! produced either from the static catalog or by normalizing storage rows
//! (see `content::normalize`).

use serde::{Deserialize, Serialize};

/// Opaque icon reference resolved from a stored identifier string.
///
/// The presentation layer maps these to whatever icon assets it ships;
/// Vitrine only guarantees the identifier is one of a fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Code2,
    Palette,
    Smartphone,
    Zap,
    Database,
    Cog,
    Shield,
    TestTube,
    Boxes,
    Globe,
    Mail,
    Github,
    Linkedin,
    Twitter,
}

impl Icon {
    /// Fallback icon for unrecognized identifiers
    pub const FALLBACK: Icon = Icon::Code2;

    /// Resolve a stored icon/platform identifier, case-insensitively.
    ///
    /// Unknown identifiers resolve to [`Icon::FALLBACK`], never an error.
    /// `"email"` is an alias for [`Icon::Mail`].
    pub fn resolve(name: &str) -> Icon {
        match name.to_ascii_lowercase().as_str() {
            "code2" => Icon::Code2,
            "palette" => Icon::Palette,
            "smartphone" => Icon::Smartphone,
            "zap" => Icon::Zap,
            "database" => Icon::Database,
            "cog" => Icon::Cog,
            "shield" => Icon::Shield,
            "testtube" => Icon::TestTube,
            "boxes" => Icon::Boxes,
            "globe" => Icon::Globe,
            "mail" | "email" => Icon::Mail,
            "github" => Icon::Github,
            "linkedin" => Icon::Linkedin,
            "twitter" => Icon::Twitter,
            _ => Icon::FALLBACK,
        }
    }
}

/// Hover color token for a social platform identifier, case-insensitively.
///
/// Unknown platforms get the indigo default.
pub fn platform_color(platform: &str) -> &'static str {
    match platform.to_ascii_lowercase().as_str() {
        "github" => "hover:text-gray-400",
        "linkedin" => "hover:text-blue-400",
        "twitter" => "hover:text-sky-400",
        "mail" | "email" => "hover:text-indigo-400",
        _ => "hover:text-indigo-400",
    }
}

/// Compose a two-token gradient string from its from/to color tokens
pub fn compose_gradient(from: &str, to: &str) -> String {
    format!("from-{} to-{}", from, to)
}

/// Profile - the single personal-info record shown in the hero/about sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    pub location: String,
    pub bio: String,
    pub extended_bio: String,
}

/// Stat - a headline number card ("50+ Projects Completed")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub gradient: String,
    pub border: String,
    pub text_color: String,
}

/// Experience - one timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub year: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

/// Skill - a proficiency bar with an icon and gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: Icon,
    pub color: String,
}

/// TechCategory - a titled group of technology tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechCategory {
    pub title: String,
    pub icon: Icon,
    pub gradient: String,
    pub techs: Vec<String>,
    pub order: i32,
}

/// Project - one portfolio project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub gradient: String,
    pub live_url: String,
    pub github_url: String,
}

/// SocialLink - one footer/contact social entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub icon: Icon,
    pub label: String,
    pub href: String,
    pub color: String,
    pub username: String,
}

/// Placeholders for the contact form fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPlaceholders {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// ContactCopy - heading and copy for the contact section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactCopy {
    pub heading: String,
    pub description: String,
    pub form_placeholders: FormPlaceholders,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_resolution_is_case_insensitive() {
        assert_eq!(Icon::resolve("GitHub"), Icon::resolve("github"));
        assert_eq!(Icon::resolve("TestTube"), Icon::TestTube);
        assert_eq!(Icon::resolve("PALETTE"), Icon::Palette);
    }

    #[test]
    fn icon_resolution_is_total() {
        assert_eq!(Icon::resolve("unknown-xyz"), Icon::FALLBACK);
        assert_eq!(Icon::resolve(""), Icon::FALLBACK);
    }

    #[test]
    fn email_aliases_to_mail() {
        assert_eq!(Icon::resolve("email"), Icon::Mail);
        assert_eq!(Icon::resolve("Email"), Icon::Mail);
    }

    #[test]
    fn platform_colors() {
        assert_eq!(platform_color("GitHub"), "hover:text-gray-400");
        assert_eq!(platform_color("linkedin"), "hover:text-blue-400");
        assert_eq!(platform_color("mastodon"), "hover:text-indigo-400");
    }

    #[test]
    fn gradient_composition() {
        assert_eq!(
            compose_gradient("indigo-500", "blue-500"),
            "from-indigo-500 to-blue-500"
        );
    }
}
