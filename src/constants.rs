//! Fixed locations and vocabularies for the OpenBioLink high-quality export.
//! These are the values used whenever neither the CLI nor the config file overrides them.

use crate::vocabulary::Polarity;

// Source archive
pub const OPENBIOLINK_URL: &str = "https://samwald.info/res/OpenBioLink_2020_final/HQ_DIR.zip";

// Layout inside the archive, relative to the extraction directory
pub const EDGES_RELATIVE_PATH: &str = "HQ_DIR/graph_files/edges.csv";

pub const DEFAULT_EXTRACT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_PATH: &str = "openbiolink_causal_relations.tsv";
pub const DEFAULT_CONFIG_PATH: &str = "openbiolink.toml";

// Output table header
pub const OUTPUT_HEADER: [&str; 3] = ["source", "target", "relation"];

/// Edge types kept for causal-path analysis.
pub const CAUSAL_EDGE_TYPES: [&str; 8] = [
    "GENE_ACTIVATION_GENE",
    "DRUG_ACTIVATION_GENE",
    "GENE_PHENOTYPE",
    "DRUG_BINDACT_GENE",
    "DRUG_BINDINH_GENE",
    "GENE_INHIBITION_GENE",
    "GENE_DIS",
    "DRUG_INHIBITION_GENE",
];

/// Edge types known to carry no usable direction. Never consulted by the filter.
pub const BLACKLISTED_EDGE_TYPES: [&str; 13] = [
    "DRUG_REACTION_GENE",
    "GENE_CATALYSIS_GENE",
    "GENE_PTMOD_GENE",
    "GENE_DRUG",
    "GENE_EXPRESSION_GENE",
    "GENE_REACTION_GENE",
    "GENE_BINDING_GENE",
    "DRUG_BINDING_GENE",
    "DRUG_CATALYSIS_GENE",
    "GENE_GENE",
    "PART_OF",
    "IS_A",
    "DIS_PHENOTYPE",
];

/// Signed effect of each causal edge type: +1 increases, -1 decreases.
pub const EDGE_TYPE_POLARITY: [(&str, Polarity); 8] = [
    ("GENE_PHENOTYPE", Polarity::Increase),
    ("GENE_ACTIVATION_GENE", Polarity::Increase),
    ("DRUG_INHIBITION_GENE", Polarity::Decrease),
    ("DRUG_ACTIVATION_GENE", Polarity::Increase),
    ("GENE_INHIBITION_GENE", Polarity::Decrease),
    ("GENE_DIS", Polarity::Increase),
    ("DRUG_BINDINH_GENE", Polarity::Decrease),
    ("DRUG_BINDACT_GENE", Polarity::Increase),
];
