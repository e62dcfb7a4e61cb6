//! Storage-to-display normalization
//!
//! Pure and total: every valid storage row maps to exactly one display
//! record. Missing optional fields fall back to positional static-default
//! values (a stat row carries no color tokens, so it inherits the tokens of
//! the default at the same index) or to fixed fallbacks, never to an error.

use crate::content::display::{
    compose_gradient, platform_color, Experience, Icon, Profile, Project, Skill, SocialLink,
    Stat, TechCategory,
};
use crate::content::storage::{
    ExperienceRow, ProfileRow, ProjectRow, SkillRow, SocialLinkRow, StatRow, TechCategoryRow,
};

// Tokens used when a stat row lands beyond the static default set
const STAT_GRADIENT_FALLBACK: &str = "from-indigo-900/20 to-purple-900/10";
const STAT_BORDER_FALLBACK: &str = "border-indigo-500/20";
const STAT_TEXT_FALLBACK: &str = "text-indigo-400";

pub fn profile(row: ProfileRow) -> Profile {
    Profile {
        name: row.name,
        full_name: row.full_name,
        title: row.title,
        tagline: row.tagline,
        email: row.email,
        location: row.location.unwrap_or_default(),
        bio: row.bio,
        extended_bio: row.extended_bio,
    }
}

/// Stats carry no color tokens remotely; inherit them from the static
/// default at the same position.
pub fn stat(defaults: &[Stat], index: usize, row: StatRow) -> Stat {
    let positional = defaults.get(index);
    Stat {
        value: row.value,
        label: row.label,
        gradient: positional
            .map(|s| s.gradient.clone())
            .unwrap_or_else(|| STAT_GRADIENT_FALLBACK.into()),
        border: positional
            .map(|s| s.border.clone())
            .unwrap_or_else(|| STAT_BORDER_FALLBACK.into()),
        text_color: positional
            .map(|s| s.text_color.clone())
            .unwrap_or_else(|| STAT_TEXT_FALLBACK.into()),
    }
}

pub fn experience(row: ExperienceRow) -> Experience {
    Experience {
        year: row.year,
        title: row.title,
        company: row.company,
        description: row.description,
    }
}

pub fn skill(row: SkillRow) -> Skill {
    Skill {
        name: row.name,
        level: row.level,
        icon: Icon::resolve(&row.icon_name),
        color: compose_gradient(&row.color_from, &row.color_to),
    }
}

pub fn tech_category(row: TechCategoryRow) -> TechCategory {
    TechCategory {
        title: row.title,
        icon: Icon::resolve(&row.icon_name),
        gradient: compose_gradient(&row.gradient_from, &row.gradient_to),
        techs: row.technologies,
        order: row.order,
    }
}

pub fn project(row: ProjectRow) -> Project {
    Project {
        title: row.title,
        category: row.category,
        description: row.description,
        tags: row.tags,
        gradient: compose_gradient(&row.gradient_from, &row.gradient_to),
        live_url: row.live_url.filter(|u| !u.is_empty()).unwrap_or_else(|| "#".into()),
        github_url: row.github_url.filter(|u| !u.is_empty()).unwrap_or_else(|| "#".into()),
    }
}

pub fn social_link(row: SocialLinkRow) -> SocialLink {
    SocialLink {
        icon: Icon::resolve(&row.platform),
        label: row.label,
        href: row.href,
        color: platform_color(&row.platform).into(),
        username: row.username,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn stat_inherits_positional_color_tokens() {
        let defaults = catalog::stats();
        let row = StatRow {
            value: "99+".into(),
            label: "Projects".into(),
            order: 1,
        };

        let resolved = stat(&defaults, 0, row);
        assert_eq!(resolved.value, "99+");
        assert_eq!(resolved.gradient, defaults[0].gradient);
        assert_eq!(resolved.border, defaults[0].border);
        assert_eq!(resolved.text_color, defaults[0].text_color);
    }

    #[test]
    fn stat_beyond_defaults_uses_fixed_tokens() {
        let defaults = catalog::stats();
        let row = StatRow {
            value: "1".into(),
            label: "Extra".into(),
            order: 9,
        };

        let resolved = stat(&defaults, defaults.len(), row);
        assert_eq!(resolved.gradient, STAT_GRADIENT_FALLBACK);
        assert_eq!(resolved.border, STAT_BORDER_FALLBACK);
        assert_eq!(resolved.text_color, STAT_TEXT_FALLBACK);
    }

    #[test]
    fn skill_composes_gradient_and_resolves_icon() {
        let row = SkillRow {
            name: "Rust".into(),
            level: 97,
            icon_name: "zap".into(),
            color_from: "orange-500".into(),
            color_to: "red-500".into(),
            order: 1,
        };

        let resolved = skill(row);
        assert_eq!(resolved.icon, Icon::Zap);
        assert_eq!(resolved.color, "from-orange-500 to-red-500");
    }

    #[test]
    fn project_urls_default_to_hash() {
        let row = ProjectRow {
            title: "T".into(),
            category: "C".into(),
            description: "D".into(),
            tags: vec![],
            gradient_from: "a".into(),
            gradient_to: "b".into(),
            live_url: None,
            github_url: Some(String::new()),
            order: 1,
        };

        let resolved = project(row);
        assert_eq!(resolved.live_url, "#");
        assert_eq!(resolved.github_url, "#");
    }

    #[test]
    fn social_link_resolves_platform() {
        let row = SocialLinkRow {
            platform: "GitHub".into(),
            label: "GitHub".into(),
            href: "https://github.com/avery".into(),
            username: "@avery".into(),
            order: 1,
        };

        let resolved = social_link(row);
        assert_eq!(resolved.icon, Icon::Github);
        assert_eq!(resolved.color, "hover:text-gray-400");
    }
}
