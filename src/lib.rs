pub mod config;
pub mod constants;
pub mod error;
pub mod ingestion;
pub mod logging;
pub mod mapper;
pub mod vocabulary;

pub use error::{ConverterError, Result};
pub use ingestion::fetch_and_extract;
pub use mapper::filter_and_map;
pub use vocabulary::{Polarity, Vocabulary};
