//! Form session: the single owner of an in-progress candidate record.
//!
//! Every mutation is synchronous and recomputes the failure set before it
//! returns, so the failures a caller sees always match the last applied edit.
//! `commit` is the only place failures block progress.

use thiserror::Error;
use tracing::{debug, info};

use crate::collections::{self, CollectionError, CollectionTarget};
use crate::models::snapshot::Snapshot;
use crate::models::{CandidateRecord, ItemId};
use crate::projection::{self, Document};
use crate::session::fields::FieldRef;
use crate::session::sections::{FormSection, SectionVisibility};
use crate::validation::{validate_record, ValidationFailure};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Item {id} not found")]
    UnknownItem { id: ItemId },

    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Result of a successful commit.
#[derive(Debug, Clone)]
pub struct Committed {
    pub snapshot: Snapshot,
    pub document: Document,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    record: CandidateRecord,
    failures: Vec<ValidationFailure>,
    sections: SectionVisibility,
    reset_on_commit: bool,
    latest: Option<Committed>,
}

impl FormSession {
    pub fn new(record: CandidateRecord) -> Self {
        let failures = validate_record(&record);
        Self {
            record,
            failures,
            sections: SectionVisibility::default(),
            reset_on_commit: false,
            latest: None,
        }
    }

    /// Clears the buffer back to an empty record after each successful commit.
    pub fn with_reset_on_commit(mut self, reset: bool) -> Self {
        self.reset_on_commit = reset;
        self
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Failures at the rendered path `prefix` (e.g. `jobs[1]`) or anywhere beneath it.
    pub fn failures_at<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ValidationFailure> + 'a {
        self.failures
            .iter()
            .filter(move |failure| failure.path.is_within(prefix))
    }

    /// Failures on the item `id` or on anything it owns.
    pub fn failures_for_item(&self, id: ItemId) -> Vec<&ValidationFailure> {
        self.failures
            .iter()
            .filter(|failure| failure.path.touches(id))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn sections(&self) -> &SectionVisibility {
        &self.sections
    }

    pub fn toggle_section(&mut self, section: FormSection) -> bool {
        self.sections.toggle(section)
    }

    /// The most recent successful commit, used as the live preview.
    pub fn latest(&self) -> Option<&Committed> {
        self.latest.as_ref()
    }

    /// Assigns `value` to `field`. Unknown item ids leave the record untouched.
    pub fn update_field(
        &mut self,
        field: FieldRef,
        value: impl Into<String>,
    ) -> Result<&[ValidationFailure], SessionError> {
        let slot = field
            .slot(&mut self.record)
            .map_err(|id| SessionError::UnknownItem { id })?;
        *slot = value.into();
        Ok(self.revalidate())
    }

    pub fn append(&mut self, target: CollectionTarget) -> Result<ItemId, SessionError> {
        let id = collections::append(&mut self.record, target)?;
        self.revalidate();
        Ok(id)
    }

    pub fn remove(&mut self, target: CollectionTarget, id: ItemId) -> bool {
        let removed = collections::remove(&mut self.record, target, id);
        if removed {
            self.revalidate();
        }
        removed
    }

    pub fn move_item(&mut self, target: CollectionTarget, id: ItemId, to_index: usize) -> bool {
        let moved = collections::move_item(&mut self.record, target, id, to_index);
        if moved {
            self.revalidate();
        }
        moved
    }

    /// Validates the whole record. On success takes a snapshot, projects it, and
    /// keeps it as the latest preview; on failure nothing changes.
    pub fn commit(&mut self) -> Result<Committed, Vec<ValidationFailure>> {
        self.revalidate();
        if !self.is_valid() {
            debug!(failures = self.failures.len(), "Commit rejected");
            return Err(self.failures.clone());
        }

        let snapshot = Snapshot::capture(&self.record);
        let document = projection::project(&snapshot);
        let committed = Committed { snapshot, document };
        self.latest = Some(committed.clone());

        info!(
            sections = committed.document.sections.len(),
            "Committed candidate record"
        );

        if self.reset_on_commit {
            self.record = CandidateRecord::empty();
            self.revalidate();
        }

        Ok(committed)
    }

    fn revalidate(&mut self) -> &[ValidationFailure] {
        self.failures = validate_record(&self.record);
        &self.failures
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(CandidateRecord::empty())
    }
}
