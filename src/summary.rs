use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Conflict, ConflictKind, Severity};

/// Aggregate counts for the summary panel and the estimate generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub by_kind: BTreeMap<ConflictKind, usize>,
}

pub fn summarize(conflicts: &[Conflict]) -> Stats {
    let mut stats = Stats::default();
    for conflict in conflicts {
        stats.total += 1;
        match conflict.severity {
            Severity::Error => stats.error_count += 1,
            Severity::Warning => stats.warning_count += 1,
        }
        *stats.by_kind.entry(conflict.kind).or_insert(0) += 1;
    }
    stats
}
