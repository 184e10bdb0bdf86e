use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::constants::{
    DEFAULT_EXTRACT_DIR, DEFAULT_OUTPUT_PATH, EDGES_RELATIVE_PATH, OPENBIOLINK_URL,
};
use crate::error::{ConverterError, Result};
use crate::vocabulary::Vocabulary;

/// Runtime settings. Every field falls back to the hard-coded OpenBioLink values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub paths: PathsConfig,
    pub vocabulary: Option<VocabularyConfig>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the archive is unpacked into.
    pub extract_dir: PathBuf,
    /// Edge file location, relative to `extract_dir` unless absolute.
    pub edges: PathBuf,
    pub output: PathBuf,
}

/// Alternate edge-type tables, e.g.
///
/// ```toml
/// [vocabulary]
/// allowlist = ["GENE_ACTIVATION_GENE"]
/// blacklist = ["GENE_GENE"]
/// polarity = { GENE_ACTIVATION_GENE = 1 }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct VocabularyConfig {
    pub allowlist: Vec<String>,
    #[serde(default)]
    pub blacklist: Vec<String>,
    #[serde(default)]
    pub polarity: BTreeMap<String, i8>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: OPENBIOLINK_URL.to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            extract_dir: PathBuf::from(DEFAULT_EXTRACT_DIR),
            edges: PathBuf::from(EDGES_RELATIVE_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl Config {
    /// Read `path` if it exists, otherwise use the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(config = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        info!(config = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            ConverterError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Full path of the edge file once the archive has been unpacked.
    pub fn edges_path(&self) -> PathBuf {
        self.paths.extract_dir.join(&self.paths.edges)
    }

    /// The configured vocabulary, validated, or the curated OpenBioLink one.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary {
            Some(v) => v.to_vocabulary(),
            None => Ok(Vocabulary::openbiolink()),
        }
    }
}

impl VocabularyConfig {
    pub fn to_vocabulary(&self) -> Result<Vocabulary> {
        let vocab = Vocabulary::from_signed(
            self.allowlist.iter().map(String::as_str),
            self.blacklist.iter().map(String::as_str),
            self.polarity.iter().map(|(k, v)| (k.as_str(), *v)),
        )?;
        Ok(vocab)
    }
}
