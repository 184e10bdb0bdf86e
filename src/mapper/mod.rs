//! Edge mapper: keep causal OpenBioLink edges and re-express them as signed relations.

pub mod filter;
pub mod relabel;
pub mod table;

use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::vocabulary::Vocabulary;
pub use filter::{filter_edges, FilterReport};
pub use relabel::relabel;
pub use table::{load_edges, write_relabeled, RawEdge, RelabeledEdge};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapSummary {
    pub filter: FilterReport,
    pub written: usize,
    pub unmapped: usize,
}

/// Load `input`, filter it to the causal allowlist, sign each edge and write `output`.
///
/// The whole input is parsed before anything is written; a parse failure leaves
/// `output` untouched.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn filter_and_map(input: &Path, output: &Path, vocab: &Vocabulary) -> Result<MapSummary> {
    let edges = load_edges(input, &vocab.edge_types)?;
    let (causal, report) = filter_edges(&vocab.edge_types, edges);
    let rows = relabel(&vocab.polarity, causal);
    write_relabeled(output, &rows)?;

    let summary = MapSummary {
        written: rows.len(),
        unmapped: rows.iter().filter(|r| r.relation.is_none()).count(),
        filter: report,
    };
    info!(
        read = summary.filter.total,
        written = summary.written,
        blacklisted = summary.filter.blacklisted,
        unrecognized = summary.filter.unrecognized_rows(),
        unmapped = summary.unmapped,
        "Wrote causal relation table"
    );
    Ok(summary)
}
