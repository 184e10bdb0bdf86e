//! Archive fetcher: download the OpenBioLink export and unpack it on disk.

pub mod archive;
pub mod http_client;
pub mod ports;

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::{ConverterError, Result};
pub use archive::{extract_archive, ExtractSummary};
pub use http_client::ReqwestHttp;
pub use ports::{HttpClientPort, HttpGetResult};

/// GET `url` and return the body, turning a non-2xx status into
/// [`ConverterError::HttpStatus`] instead of handing an error page to the unzipper.
#[instrument(skip(client))]
pub fn download(client: &dyn HttpClientPort, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url)?;
    if !resp.is_success() {
        warn!(status = resp.status, "Archive download rejected");
        return Err(ConverterError::HttpStatus {
            url: url.to_string(),
            status: resp.status,
        });
    }
    info!(
        bytes = resp.bytes.len(),
        content_type = %resp.content_type,
        content_length = resp.content_length,
        "Downloaded archive"
    );
    Ok(resp.bytes)
}

/// Download the zip at `url` and extract every entry under `dest`.
pub fn fetch_and_extract(
    client: &dyn HttpClientPort,
    url: &str,
    dest: &Path,
) -> Result<ExtractSummary> {
    let bytes = download(client, url)?;
    let summary = extract_archive(&bytes, dest)?;
    info!(
        dest = %dest.display(),
        files = summary.files,
        directories = summary.directories,
        uncompressed_bytes = summary.uncompressed_bytes,
        "Extracted archive"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::archive::tests::build_zip;
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::tempdir;

    struct CannedHttp {
        status: u16,
        body: Vec<u8>,
        requested: RefCell<Vec<String>>,
    }

    impl CannedHttp {
        fn new(status: u16, body: Vec<u8>) -> Self {
            Self {
                status,
                body,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl HttpClientPort for CannedHttp {
        fn get(&self, url: &str) -> Result<HttpGetResult> {
            self.requested.borrow_mut().push(url.to_string());
            Ok(HttpGetResult {
                status: self.status,
                bytes: self.body.clone(),
                content_type: "application/zip".to_string(),
                content_length: self.body.len() as u64,
            })
        }
    }

    #[test]
    fn test_fetch_and_extract_materializes_edge_file() {
        let edges = b"A\tGENE_ACTIVATION_GENE\tB\t0.9\tsrc1\n".to_vec();
        let archive = build_zip(&[("HQ_DIR/graph_files/edges.csv", edges.as_slice())]);
        let http = CannedHttp::new(200, archive);
        let dir = tempdir().unwrap();

        let summary =
            fetch_and_extract(&http, "https://example.org/HQ_DIR.zip", dir.path()).unwrap();

        assert_eq!(summary.files, 1);
        assert_eq!(
            *http.requested.borrow(),
            vec!["https://example.org/HQ_DIR.zip".to_string()]
        );
        let on_disk = fs::read(dir.path().join("HQ_DIR/graph_files/edges.csv")).unwrap();
        assert_eq!(on_disk, edges);
    }

    #[test]
    fn test_error_status_is_reported_before_unzipping() {
        let http = CannedHttp::new(404, b"<html>Not Found</html>".to_vec());
        let dir = tempdir().unwrap();

        let result = fetch_and_extract(&http, "https://example.org/missing.zip", dir.path());

        match result {
            Err(ConverterError::HttpStatus { url, status }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://example.org/missing.zip");
            }
            other => panic!("expected HttpStatus, got {other:?}"),
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_corrupt_body_with_ok_status_is_an_archive_error() {
        let http = CannedHttp::new(200, b"PK\x03\x04 truncated".to_vec());
        let dir = tempdir().unwrap();

        let result = fetch_and_extract(&http, "https://example.org/HQ_DIR.zip", dir.path());
        assert!(matches!(result, Err(ConverterError::Archive(_))));
    }
}
