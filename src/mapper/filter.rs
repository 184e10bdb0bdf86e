use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::table::RawEdge;
use crate::vocabulary::{EdgeClass, EdgeTypeVocabulary};

/// Row tallies from one filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub total: usize,
    pub kept: usize,
    pub blacklisted: usize,
    /// Labels in neither curated set, with their row counts.
    pub unrecognized: BTreeMap<String, usize>,
}

impl FilterReport {
    pub fn dropped(&self) -> usize {
        self.total - self.kept
    }

    pub fn unrecognized_rows(&self) -> usize {
        self.unrecognized.values().sum()
    }
}

/// Keep rows whose edge type is allowlisted, in input order.
///
/// Blacklisted and unrecognized rows are dropped alike; the report tells them
/// apart so unknown labels can be flagged.
pub fn filter_edges(
    vocab: &EdgeTypeVocabulary,
    edges: Vec<RawEdge>,
) -> (Vec<RawEdge>, FilterReport) {
    let mut report = FilterReport {
        total: edges.len(),
        ..Default::default()
    };

    let mut kept = Vec::with_capacity(edges.len());
    for edge in edges {
        match vocab.classify(&edge.edge_type) {
            EdgeClass::Causal => kept.push(edge),
            EdgeClass::Blacklisted => report.blacklisted += 1,
            EdgeClass::Unrecognized => {
                *report.unrecognized.entry(edge.edge_type).or_insert(0) += 1;
            }
        }
    }
    report.kept = kept.len();

    for (label, count) in &report.unrecognized {
        warn!(edge_type = %label, rows = count, "Dropping edge type outside both allowlist and blacklist");
    }
    debug!(
        total = report.total,
        kept = report.kept,
        blacklisted = report.blacklisted,
        unrecognized = report.unrecognized_rows(),
        "Filtered edges"
    );

    (kept, report)
}
