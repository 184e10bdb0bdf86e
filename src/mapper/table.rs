use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Deserialize;
use tracing::debug;

use crate::constants::OUTPUT_HEADER;
use crate::error::{ConverterError, Result};
use crate::vocabulary::{EdgeTypeVocabulary, Polarity};

/// Number of positional fields in an OpenBioLink edge row.
pub const RAW_EDGE_COLUMNS: usize = 5;

/// One row of `edges.csv`. The file has no header; fields are taken by position.
/// A blank quality score is missing, not malformed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawEdge {
    pub node1_id: String,
    pub edge_type: String,
    pub node2_id: String,
    pub quality_score: Option<f64>,
    pub source: String,
}

impl RawEdge {
    /// Build a row without type-checking the score. Used for rows the
    /// allowlist drops, whose score is never read.
    fn unchecked(record: &StringRecord) -> Self {
        Self {
            node1_id: record[0].to_string(),
            edge_type: record[1].to_string(),
            node2_id: record[2].to_string(),
            quality_score: record[3].trim().parse().ok(),
            source: record[4].to_string(),
        }
    }
}

/// Output row: `source`/`target` are the edge's endpoints, `relation` its sign if known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelabeledEdge {
    pub source: String,
    pub target: String,
    pub relation: Option<Polarity>,
}

/// Read every row of a tab-separated edge file.
///
/// Every row must have five fields. The quality score is only type-checked on
/// rows whose edge type `vocab` keeps, so a stray header line or a junk score on
/// a discarded row does not abort the load. Fails on the first malformed row,
/// so callers never see a partial table.
pub fn load_edges(path: &Path, vocab: &EdgeTypeVocabulary) -> Result<Vec<RawEdge>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let parse_err = |source: csv::Error| ConverterError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut edges = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(parse_err)? {
        if record.len() != RAW_EDGE_COLUMNS {
            return Err(ConverterError::ColumnCount {
                path: path.to_path_buf(),
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: RAW_EDGE_COLUMNS,
                found: record.len(),
            });
        }
        let edge = if vocab.is_causal(&record[1]) {
            record.deserialize(None).map_err(parse_err)?
        } else {
            RawEdge::unchecked(&record)
        };
        edges.push(edge);
    }

    debug!(path = %path.display(), rows = edges.len(), "Loaded edge table");
    Ok(edges)
}

/// Write the relation table with its `source\ttarget\trelation` header.
/// An unmapped relation is written as an empty field.
pub fn write_relabeled(path: &Path, rows: &[RelabeledEdge]) -> Result<()> {
    let write_err = |source: csv::Error| ConverterError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)
        .map_err(write_err)?;

    writer.write_record(OUTPUT_HEADER).map_err(write_err)?;
    for row in rows {
        let relation = row.relation.map(|p| p.to_string()).unwrap_or_default();
        writer
            .write_record([row.source.as_str(), row.target.as_str(), relation.as_str()])
            .map_err(write_err)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use std::fs;
    use tempfile::tempdir;

    fn causal() -> EdgeTypeVocabulary {
        Vocabulary::openbiolink().edge_types
    }

    #[test]
    fn test_load_assigns_fields_by_position() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(
            &path,
            "NCBIGENE:1\tGENE_DIS\tDOID:2\t0.9\tDisGeNet\nCID:3\tDRUG_INHIBITION_GENE\tNCBIGENE:4\t0.5\tSTITCH\n",
        )
        .unwrap();

        let edges = load_edges(&path, &causal()).unwrap();

        assert_eq!(edges.len(), 2);
        assert_eq!(
            edges[0],
            RawEdge {
                node1_id: "NCBIGENE:1".to_string(),
                edge_type: "GENE_DIS".to_string(),
                node2_id: "DOID:2".to_string(),
                quality_score: Some(0.9),
                source: "DisGeNet".to_string(),
            }
        );
        assert_eq!(edges[1].edge_type, "DRUG_INHIBITION_GENE");
    }

    #[test]
    fn test_load_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "").unwrap();

        assert!(load_edges(&path, &causal()).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_column_count_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "A\tGENE_DIS\tB\t0.9\tsrc\nA\tGENE_DIS\tB\t0.9\n").unwrap();

        match load_edges(&path, &causal()) {
            Err(ConverterError::ColumnCount {
                line,
                expected,
                found,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 5);
                assert_eq!(found, 4);
            }
            other => panic!("expected ColumnCount, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_quality_score_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "A\tGENE_DIS\tB\thigh\tsrc\n").unwrap();

        assert!(matches!(
            load_edges(&path, &causal()),
            Err(ConverterError::Parse { .. })
        ));
    }

    #[test]
    fn test_blank_quality_score_is_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(&path, "A\tGENE_GENE\tB\t\tsrc\nC\tGENE_DIS\tD\t\tsrc\n").unwrap();

        let edges = load_edges(&path, &causal()).unwrap();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].quality_score, None);
        assert_eq!(edges[1].edge_type, "GENE_DIS");
        assert_eq!(edges[1].quality_score, None);
    }

    #[test]
    fn test_score_on_discarded_row_is_not_checked() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("edges.csv");
        fs::write(
            &path,
            "node1_id\tedge_type\tnode2_id\tquality_score\tsource\nA\tIS_A\tB\thigh\tsrc\n",
        )
        .unwrap();

        let edges = load_edges(&path, &causal()).unwrap();

        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].edge_type, "edge_type");
        assert_eq!(edges[0].quality_score, None);
        assert_eq!(edges[1].quality_score, None);
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let dir = tempdir().unwrap();
        let result = load_edges(&dir.path().join("nope.csv"), &causal());
        assert!(matches!(result, Err(ConverterError::Io(_))));
    }

    #[test]
    fn test_write_serializes_relations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");
        let rows = vec![
            RelabeledEdge {
                source: "A".to_string(),
                target: "B".to_string(),
                relation: Some(Polarity::Increase),
            },
            RelabeledEdge {
                source: "C".to_string(),
                target: "D".to_string(),
                relation: Some(Polarity::Decrease),
            },
            RelabeledEdge {
                source: "E".to_string(),
                target: "F".to_string(),
                relation: None,
            },
        ];

        write_relabeled(&path, &rows).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "source\ttarget\trelation\nA\tB\t1\nC\tD\t-1\nE\tF\t\n"
        );
    }

    #[test]
    fn test_write_empty_table_keeps_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.tsv");

        write_relabeled(&path, &[]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "source\ttarget\trelation\n"
        );
    }
}
