//! Edge-type vocabularies used to select and sign OpenBioLink edges.
//!
//! The tables are plain values handed to the filter and relabel steps, so a
//! caller can swap in its own vocabulary without touching the pipeline.

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::constants::{BLACKLISTED_EDGE_TYPES, CAUSAL_EDGE_TYPES, EDGE_TYPE_POLARITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Increase,
    Decrease,
}

impl Polarity {
    pub fn value(self) -> i8 {
        match self {
            Polarity::Increase => 1,
            Polarity::Decrease => -1,
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = i8;

    fn try_from(value: i8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Polarity::Increase),
            -1 => Ok(Polarity::Decrease),
            other => Err(other),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VocabularyError {
    #[error("edge type '{0}' is both allowlisted and blacklisted")]
    Overlap(String),

    #[error("polarity given for edge type '{0}', which is not allowlisted")]
    UnlistedPolarity(String),

    #[error("polarity for edge type '{label}' must be 1 or -1, got {value}")]
    InvalidPolarity { label: String, value: i8 },
}

/// Where a label falls relative to the curated sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    Causal,
    Blacklisted,
    Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeTypeVocabulary {
    allowlist: HashSet<String>,
    blacklist: HashSet<String>,
}

impl EdgeTypeVocabulary {
    pub fn is_causal(&self, edge_type: &str) -> bool {
        self.allowlist.contains(edge_type)
    }

    pub fn classify(&self, edge_type: &str) -> EdgeClass {
        if self.allowlist.contains(edge_type) {
            EdgeClass::Causal
        } else if self.blacklist.contains(edge_type) {
            EdgeClass::Blacklisted
        } else {
            EdgeClass::Unrecognized
        }
    }

    pub fn allowlist_len(&self) -> usize {
        self.allowlist.len()
    }

    pub fn blacklist_len(&self) -> usize {
        self.blacklist.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolarityMap {
    entries: HashMap<String, Polarity>,
}

impl PolarityMap {
    pub fn get(&self, edge_type: &str) -> Option<Polarity> {
        self.entries.get(edge_type).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Allowlist, blacklist and polarity table, checked against each other on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub edge_types: EdgeTypeVocabulary,
    pub polarity: PolarityMap,
}

impl Vocabulary {
    /// Build a vocabulary, rejecting overlapping sets and polarities for
    /// labels outside the allowlist.
    pub fn new<A, B, P, S>(
        allowlist: A,
        blacklist: B,
        polarity: P,
    ) -> std::result::Result<Self, VocabularyError>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        P: IntoIterator<Item = (S, Polarity)>,
        S: Into<String>,
    {
        let allowlist: HashSet<String> = allowlist.into_iter().map(Into::into).collect();
        let blacklist: HashSet<String> = blacklist.into_iter().map(Into::into).collect();
        let entries: HashMap<String, Polarity> = polarity
            .into_iter()
            .map(|(label, p)| (label.into(), p))
            .collect();

        let mut overlap: Vec<&String> = allowlist.intersection(&blacklist).collect();
        overlap.sort();
        if let Some(label) = overlap.first() {
            return Err(VocabularyError::Overlap((*label).clone()));
        }

        let mut unlisted: Vec<&String> = entries
            .keys()
            .filter(|label| !allowlist.contains(*label))
            .collect();
        unlisted.sort();
        if let Some(label) = unlisted.first() {
            return Err(VocabularyError::UnlistedPolarity((*label).clone()));
        }

        Ok(Self {
            edge_types: EdgeTypeVocabulary {
                allowlist,
                blacklist,
            },
            polarity: PolarityMap { entries },
        })
    }

    /// Same as [`Vocabulary::new`] but with polarities given as raw `1` / `-1` values.
    pub fn from_signed<A, B, P, S>(
        allowlist: A,
        blacklist: B,
        polarity: P,
    ) -> std::result::Result<Self, VocabularyError>
    where
        A: IntoIterator<Item = S>,
        B: IntoIterator<Item = S>,
        P: IntoIterator<Item = (S, i8)>,
        S: Into<String>,
    {
        let signed = polarity
            .into_iter()
            .map(|(label, value)| {
                let label: String = label.into();
                match Polarity::try_from(value) {
                    Ok(p) => Ok((label, p)),
                    Err(value) => Err(VocabularyError::InvalidPolarity { label, value }),
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Self::new(
            allowlist.into_iter().map(Into::<String>::into),
            blacklist.into_iter().map(Into::<String>::into),
            signed,
        )
    }

    /// The curated OpenBioLink tables.
    pub fn openbiolink() -> Self {
        let entries = EDGE_TYPE_POLARITY
            .iter()
            .map(|(label, p)| (label.to_string(), *p))
            .collect();

        Self {
            edge_types: EdgeTypeVocabulary {
                allowlist: CAUSAL_EDGE_TYPES.iter().map(|s| s.to_string()).collect(),
                blacklist: BLACKLISTED_EDGE_TYPES.iter().map(|s| s.to_string()).collect(),
            },
            polarity: PolarityMap { entries },
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::openbiolink()
    }
}
