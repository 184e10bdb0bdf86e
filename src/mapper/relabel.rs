use std::collections::BTreeMap;

use tracing::warn;

use super::table::{RawEdge, RelabeledEdge};
use crate::vocabulary::PolarityMap;

/// Left-join edges against the polarity table and project to `(source, target, relation)`.
///
/// Every input row yields exactly one output row. An edge type with no polarity
/// entry gets `relation: None`; that is reported but never fails the run.
pub fn relabel(polarity: &PolarityMap, edges: Vec<RawEdge>) -> Vec<RelabeledEdge> {
    let mut unmapped: BTreeMap<String, usize> = BTreeMap::new();

    let rows: Vec<RelabeledEdge> = edges
        .into_iter()
        .map(|edge| {
            let relation = polarity.get(&edge.edge_type);
            if relation.is_none() {
                *unmapped.entry(edge.edge_type).or_insert(0) += 1;
            }
            RelabeledEdge {
                source: edge.node1_id,
                target: edge.node2_id,
                relation,
            }
        })
        .collect();

    for (label, count) in &unmapped {
        warn!(edge_type = %label, rows = count, "Allowlisted edge type has no polarity; relation left empty");
    }

    rows
}
