//! Content resolution - default-first, remote-override
//!
//! For each content kind the resolver attempts one remote read, ordered by
//! the storage `order` field, and normalizes the rows into display shape.
//! Unconfigured store, transport error, or zero rows all resolve to the
//! static default - availability over freshness, and staleness is never a
//! caller-facing failure. Exactly one attempt per query, no retry, no
//! polling.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog;
use crate::content::display::{
    ContactCopy, Experience, Profile, Project, Skill, SocialLink, Stat, TechCategory,
};
use crate::content::normalize;
use crate::content::storage::{
    self, ExperienceRow, ProfileRow, ProjectRow, SkillRow, SocialLinkRow, StatRow,
    TechCategoryRow,
};
use crate::store::{ContentStore, Ordering};

/// Which side supplied the resolved data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Defaults,
    Remote,
}

/// Outcome of one resolution: the effective display set, where it came
/// from, and the read error (diagnostic only - never propagated)
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    pub data: T,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Resolved<T> {
    fn defaults(data: T) -> Self {
        Self {
            data,
            source: DataSource::Defaults,
            error: None,
        }
    }

    fn degraded(data: T, error: String) -> Self {
        Self {
            data,
            source: DataSource::Defaults,
            error: Some(error),
        }
    }

    fn remote(data: T) -> Self {
        Self {
            data,
            source: DataSource::Remote,
            error: None,
        }
    }

    /// Whether this resolution fell back because of a read failure
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }
}

/// Computes the effective display set for every content kind
pub struct Resolver {
    store: Arc<dyn ContentStore>,
}

impl Resolver {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// One parametric resolution for every list-shaped kind: check
    /// configuration, read ordered rows, normalize positionally against the
    /// defaults, fall back on anything that goes wrong.
    async fn resolve_list<Row, Out, F>(
        &self,
        table: &'static str,
        defaults: Vec<Out>,
        normalize: F,
    ) -> Resolved<Vec<Out>>
    where
        Row: DeserializeOwned,
        F: Fn(&[Out], usize, Row) -> Out,
    {
        if !self.store.is_configured() {
            return Resolved::defaults(defaults);
        }

        let rows = match self.store.fetch(table, Some(Ordering::by_order())).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(table, error = %e, "store read failed, serving static defaults");
                return Resolved::degraded(defaults, e.to_string());
            }
        };

        if rows.is_empty() {
            debug!(table, "store returned no rows, serving static defaults");
            return Resolved::defaults(defaults);
        }

        let parsed: Result<Vec<Row>, _> = rows.into_iter().map(serde_json::from_value).collect();
        match parsed {
            Ok(parsed) => {
                let data = parsed
                    .into_iter()
                    .enumerate()
                    .map(|(index, row)| normalize(&defaults, index, row))
                    .collect();
                Resolved::remote(data)
            }
            Err(e) => {
                warn!(table, error = %e, "store rows failed to parse, serving static defaults");
                Resolved::degraded(defaults, e.to_string())
            }
        }
    }

    /// Singleton-kind resolution (the profile record)
    async fn resolve_single<Row, Out, F>(
        &self,
        table: &'static str,
        default: Out,
        normalize: F,
    ) -> Resolved<Out>
    where
        Row: DeserializeOwned,
        F: Fn(Row) -> Out,
    {
        if !self.store.is_configured() {
            return Resolved::defaults(default);
        }

        match self.store.fetch_one(table).await {
            Ok(Some(row)) => match serde_json::from_value::<Row>(row) {
                Ok(parsed) => Resolved::remote(normalize(parsed)),
                Err(e) => {
                    warn!(table, error = %e, "store row failed to parse, serving static default");
                    Resolved::degraded(default, e.to_string())
                }
            },
            Ok(None) => Resolved::defaults(default),
            Err(e) => {
                warn!(table, error = %e, "store read failed, serving static default");
                Resolved::degraded(default, e.to_string())
            }
        }
    }

    pub async fn profile(&self) -> Resolved<Profile> {
        self.resolve_single::<ProfileRow, _, _>(
            storage::PERSONAL_INFO,
            catalog::profile(),
            normalize::profile,
        )
        .await
    }

    pub async fn stats(&self) -> Resolved<Vec<Stat>> {
        self.resolve_list::<StatRow, _, _>(storage::STATS, catalog::stats(), normalize::stat)
            .await
    }

    pub async fn experiences(&self) -> Resolved<Vec<Experience>> {
        self.resolve_list::<ExperienceRow, _, _>(
            storage::EXPERIENCES,
            catalog::experiences(),
            |_, _, row| normalize::experience(row),
        )
        .await
    }

    pub async fn skills(&self) -> Resolved<Vec<Skill>> {
        self.resolve_list::<SkillRow, _, _>(storage::SKILLS, catalog::skills(), |_, _, row| {
            normalize::skill(row)
        })
        .await
    }

    pub async fn tech_categories(&self) -> Resolved<Vec<TechCategory>> {
        self.resolve_list::<TechCategoryRow, _, _>(
            storage::TECH_CATEGORIES,
            catalog::tech_categories(),
            |_, _, row| normalize::tech_category(row),
        )
        .await
    }

    pub async fn projects(&self) -> Resolved<Vec<Project>> {
        self.resolve_list::<ProjectRow, _, _>(
            storage::PROJECTS,
            catalog::projects(),
            |_, _, row| normalize::project(row),
        )
        .await
    }

    pub async fn social_links(&self) -> Resolved<Vec<SocialLink>> {
        self.resolve_list::<SocialLinkRow, _, _>(
            storage::SOCIAL_LINKS,
            catalog::social_links(),
            |_, _, row| normalize::social_link(row),
        )
        .await
    }

    /// Contact copy has no remote table; it is always the static default
    pub fn contact_copy(&self) -> Resolved<ContactCopy> {
        Resolved::defaults(catalog::contact_copy())
    }

    /// Aggregate query composing every kind. Completes once every per-kind
    /// read has settled; the kinds race independently.
    pub async fn all(&self) -> PortfolioContent {
        let (profile, stats, experiences, skills, tech_categories, projects, social_links) = tokio::join!(
            self.profile(),
            self.stats(),
            self.experiences(),
            self.skills(),
            self.tech_categories(),
            self.projects(),
            self.social_links(),
        );

        PortfolioContent {
            profile,
            stats,
            experiences,
            skills,
            tech_categories,
            projects,
            social_links,
            contact: self.contact_copy(),
        }
    }
}

/// The full resolved portfolio document
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub profile: Resolved<Profile>,
    pub stats: Resolved<Vec<Stat>>,
    pub experiences: Resolved<Vec<Experience>>,
    pub skills: Resolved<Vec<Skill>>,
    pub tech_categories: Resolved<Vec<TechCategory>>,
    pub projects: Resolved<Vec<Project>>,
    pub social_links: Resolved<Vec<SocialLink>>,
    pub contact: Resolved<ContactCopy>,
}

impl PortfolioContent {
    /// True if any kind fell back to defaults because of a read failure
    pub fn degraded(&self) -> bool {
        self.profile.is_degraded()
            || self.stats.is_degraded()
            || self.experiences.is_degraded()
            || self.skills.is_degraded()
            || self.tech_categories.is_degraded()
            || self.projects.is_degraded()
            || self.social_links.is_degraded()
    }
}
