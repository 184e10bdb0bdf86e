use std::fs;
use std::io::Cursor;
use std::path::Path;

use tracing::debug;
use zip::ZipArchive;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files: usize,
    pub directories: usize,
    pub uncompressed_bytes: u64,
}

/// Unpack a zip held in memory under `dest`, keeping the archive's internal paths.
///
/// Existing files at the same relative paths are overwritten. Extraction is not
/// atomic: if an entry fails midway, entries already written stay on disk.
pub fn extract_archive(bytes: &[u8], dest: &Path) -> Result<ExtractSummary> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut summary = ExtractSummary {
        files: 0,
        directories: 0,
        uncompressed_bytes: 0,
    };
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_dir() {
            summary.directories += 1;
        } else {
            summary.files += 1;
            summary.uncompressed_bytes += entry.size();
        }
        debug!(entry = entry.name(), size = entry.size(), "Archive entry");
    }

    fs::create_dir_all(dest)?;
    archive.extract(dest)?;
    Ok(summary)
}
