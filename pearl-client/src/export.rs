//! Spreadsheet export
//!
//! Exports stream from a dedicated host as binary responses. The
//! client hands back the bytes plus the server-suggested filename;
//! materializing a user-visible download stays with the host.

use http::header::{AUTHORIZATION, CONTENT_DISPOSITION, CONTENT_TYPE};

use crate::client::PortalClient;
use crate::error::{ClientError, ClientResult};

/// MIME type of exported spreadsheets
pub const SPREADSHEET_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A downloaded export
#[derive(Debug, Clone)]
pub struct ExportFile {
    /// Filename suggested by the server's Content-Disposition header
    pub filename: String,
    /// Content type reported by the server
    pub content_type: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

/// Extract the suggested filename from a Content-Disposition value
///
/// The text after the last `=`, with any `;` stripped.
fn filename_from_disposition(value: &str) -> String {
    value.rsplit('=').next().unwrap_or(value).replace(';', "")
}

impl PortalClient {
    /// Download a spreadsheet export from the export host
    ///
    /// Unlike the standard calls this does not normalize failures:
    /// any fault propagates as a [`ClientError`]. It also skips the
    /// session-expiry interceptor.
    pub async fn export_sheet(&self, path: &str) -> ClientResult<ExportFile> {
        let url = format!(
            "{}{}",
            self.config.export_base_url,
            path.trim_start_matches('/')
        );
        let mut req = self
            .export_http
            .get(&url)
            .header(CONTENT_TYPE, SPREADSHEET_MIME);
        if let Some(auth) = self.auth_header() {
            req = req.header(AUTHORIZATION, auth);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Export(format!(
                "request failed with status code {}",
                status.as_u16()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(SPREADSHEET_MIME)
            .to_string();
        let filename = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(filename_from_disposition)
            .ok_or_else(|| {
                ClientError::InvalidResponse("missing Content-Disposition header".to_string())
            })?;

        let bytes = response.bytes().await?.to_vec();
        tracing::debug!(filename = %filename, size = bytes.len(), "Export downloaded");

        Ok(ExportFile {
            filename,
            content_type,
            bytes,
        })
    }
}
