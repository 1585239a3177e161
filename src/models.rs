use crate::types::GitHubRepo;
use serde::{Deserialize, Serialize};

/// Number of numbered marker pairs a profile document carries.
pub const MARKER_SLOTS: usize = 6;

/// Snapshot of one repository as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: Option<String>,
    pub url: Option<String>,
    pub star_count: u32,
    pub owner_login: Option<String>,
    pub primary_language: Option<String>,
}

impl From<GitHubRepo> for RepositorySummary {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            star_count: repo.stargazers_count,
            owner_login: repo.owner.and_then(|owner| owner.login),
            primary_language: repo.language,
        }
    }
}

/// Repositories ordered by star count, highest first.
pub type RankedList = Vec<RepositorySummary>;

/// A numbered `<!-- REPO_{i}_START -->` / `<!-- REPO_{i}_END -->` region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSlot {
    pub index: usize,
}

impl MarkerSlot {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn start_token(&self) -> String {
        format!("<!-- REPO_{}_START -->", self.index)
    }

    pub fn end_token(&self) -> String {
        format!("<!-- REPO_{}_END -->", self.index)
    }

    /// Slots 1..=count
    pub fn all(count: usize) -> impl Iterator<Item = MarkerSlot> {
        (1..=count).map(MarkerSlot::new)
    }
}

/// What happened to a single slot during a patch pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Updated,
    Unchanged,
    MissingData(&'static str),
    MissingMarkers,
}

/// Result of patching a document
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub document: String,
    pub changed: bool,
    pub slots: Vec<(MarkerSlot, SlotOutcome)>,
}

impl PatchOutcome {
    pub fn unchanged(document: &str) -> Self {
        Self {
            document: document.to_string(),
            changed: false,
            slots: Vec::new(),
        }
    }

    pub fn outcome_for(&self, index: usize) -> Option<&SlotOutcome> {
        self.slots
            .iter()
            .find(|(slot, _)| slot.index == index)
            .map(|(_, outcome)| outcome)
    }
}
