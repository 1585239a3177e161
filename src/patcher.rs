use crate::card::build_card;
use crate::config::CardConfig;
use crate::error::{ProfileError, Result};
use crate::models::{MarkerSlot, PatchOutcome, RepositorySummary, SlotOutcome, MARKER_SLOTS};
use regex::Regex;
use std::ops::Range;
use tracing::{debug, info, warn};

/// Regex for a marker token that tolerates any whitespace inside the comment,
/// so `<!--REPO_1_START-->` matches `<!-- REPO_1_START -->`.
fn token_pattern(token: &str) -> Result<Regex> {
    let parts: Vec<String> = token.split_whitespace().map(regex::escape).collect();
    Ok(Regex::new(&parts.join(r"\s*"))?)
}

/// Start/end marker matchers for one numbered slot
struct SlotMarkers {
    slot: MarkerSlot,
    start: Regex,
    end: Regex,
}

impl SlotMarkers {
    fn new(slot: MarkerSlot) -> Result<Self> {
        Ok(Self {
            slot,
            start: token_pattern(&slot.start_token())?,
            end: token_pattern(&slot.end_token())?,
        })
    }

    /// Byte range strictly between a start marker and its end marker.
    ///
    /// Each end marker pairs with the closest start marker before it, so a
    /// start token quoted earlier in the document never opens the region.
    fn locate(&self, document: &str) -> Option<Range<usize>> {
        self.end.find_iter(document).find_map(|end| {
            self.start
                .find_iter(&document[..end.start()])
                .last()
                .map(|start| start.end()..end.start())
        })
    }
}

/// Rewrites the numbered marker regions of a profile document with stats cards.
pub struct ProfilePatcher {
    card: CardConfig,
    slots: Vec<SlotMarkers>,
}

impl ProfilePatcher {
    pub fn new(card: CardConfig) -> Result<Self> {
        let slots = MarkerSlot::all(MARKER_SLOTS)
            .map(SlotMarkers::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { card, slots })
    }

    /// True when at least one slot has both its start and end marker.
    pub fn has_markers(&self, document: &str) -> bool {
        self.slots.iter().any(|markers| markers.locate(document).is_some())
    }

    /// Replace the content of slot `i` with the card for the `i`-th ranked
    /// repository. Marker tokens and the whitespace around the content are
    /// kept, so applying the same input twice changes nothing the second time.
    pub fn patch(&self, ranked: &[RepositorySummary], document: &str) -> Result<PatchOutcome> {
        if ranked.is_empty() {
            info!("No repositories to update");
            return Ok(PatchOutcome::unchanged(document));
        }

        if !self.has_markers(document) {
            return Err(ProfileError::MissingMarkers(format!(
                "expected <!-- REPO_n_START --> / <!-- REPO_n_END --> pairs for n in 1..={}",
                MARKER_SLOTS
            )));
        }

        let fallback_owner = ranked.iter().find_map(|repo| non_empty(&repo.owner_login));

        let mut content = document.to_string();
        let mut changed = false;
        let mut slots = Vec::with_capacity(self.slots.len());

        for (markers, repo) in self.slots.iter().zip(ranked) {
            let outcome = match self.patch_slot(markers, repo, fallback_owner, &content) {
                Ok(Some(updated)) => {
                    content = updated;
                    changed = true;
                    SlotOutcome::Updated
                }
                Ok(None) => SlotOutcome::Unchanged,
                Err(outcome) => outcome,
            };
            slots.push((markers.slot, outcome));
        }

        Ok(PatchOutcome {
            document: content,
            changed,
            slots,
        })
    }

    /// `Ok(Some(_))` when the slot text changed, `Ok(None)` when it already
    /// held the same card, `Err(_)` when the slot was skipped.
    fn patch_slot(
        &self,
        markers: &SlotMarkers,
        repo: &RepositorySummary,
        fallback_owner: Option<&str>,
        content: &str,
    ) -> std::result::Result<Option<String>, SlotOutcome> {
        let index = markers.slot.index;
        let Some(name) = non_empty(&repo.name) else {
            warn!(slot = index, "Repository has no name, skipping slot");
            return Err(SlotOutcome::MissingData("name"));
        };
        let Some(url) = non_empty(&repo.url) else {
            warn!(slot = index, repo = name, "Repository has no URL, skipping slot");
            return Err(SlotOutcome::MissingData("url"));
        };
        let Some(owner) = non_empty(&repo.owner_login).or(fallback_owner) else {
            warn!(slot = index, repo = name, "Repository has no owner login, skipping slot");
            return Err(SlotOutcome::MissingData("owner"));
        };

        let Some(region) = markers.locate(content) else {
            debug!(slot = index, "Marker pair not present, skipping slot");
            return Err(SlotOutcome::MissingMarkers);
        };

        let card = build_card(&self.card, owner, name, url);
        let inner = &content[region.clone()];
        let body = inner.trim();
        let replacement = if body.is_empty() {
            format!("\n{}\n", card)
        } else {
            let leading = &inner[..inner.len() - inner.trim_start().len()];
            let trailing = &inner[inner.trim_end().len()..];
            format!("{}{}{}", leading, card, trailing)
        };

        if replacement == inner {
            debug!(slot = index, repo = name, "Slot already up to date");
            return Ok(None);
        }

        debug!(slot = index, repo = name, "Slot updated");
        let mut updated = String::with_capacity(content.len() + replacement.len());
        updated.push_str(&content[..region.start]);
        updated.push_str(&replacement);
        updated.push_str(&content[region.end..]);
        Ok(Some(updated))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
