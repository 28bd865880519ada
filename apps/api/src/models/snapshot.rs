use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::record::CandidateRecord;

/// Immutable copy of a candidate record taken at commit time.
///
/// Cheap to clone; later edits to the session buffer never reach it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    record: Arc<CandidateRecord>,
    committed_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn capture(record: &CandidateRecord) -> Self {
        Self {
            record: Arc::new(record.clone()),
            committed_at: Utc::now(),
        }
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached_from_source() {
        let mut record = CandidateRecord::empty();
        record.name = "Before".to_string();
        let snapshot = Snapshot::capture(&record);
        record.name = "After".to_string();
        assert_eq!(snapshot.record().name, "Before");
        let copy = snapshot.clone();
        assert_eq!(copy.committed_at(), snapshot.committed_at());
    }
}
