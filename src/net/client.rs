/// HTTP client for the analysis service
///
/// One round-trip: POST the screenshot as a multipart form (single part
/// named `image`), decode the JSON body into an `AnalysisReport`, then
/// resolve the annotated image it may point at. The failure taxonomy
/// (transport / HTTP status / decode) is mapped here; the caller only
/// distinguishes causes for diagnostics.
use reqwest::multipart::{Form, Part};
use tracing::warn;

use crate::config::Config;
use crate::error::AnalysisError;
use crate::state::ingest::UploadedImage;
use crate::state::report::{AnalysisReport, AnnotatedSource};
use crate::state::session::AnalysisOutcome;

/// Client bound to one service base address for the process lifetime.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Build the client from the startup configuration.
    /// Panics only if the TLS backend cannot initialize, in which case
    /// the app cannot function at all.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to initialize HTTP client");

        AnalysisClient {
            http,
            base_url: config.base_url.clone(),
        }
    }

    /// Submit one screenshot for analysis.
    pub async fn analyze(&self, image: UploadedImage) -> Result<AnalysisOutcome, AnalysisError> {
        let part = Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(image.content_type)
            .map_err(|e| AnalysisError::Transport(format!("could not build request: {e}")))?;
        let form = Form::new().part("image", part);

        let response = self
            .http
            .post(self.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Http(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::Transport(e.to_string()))?;

        let report =
            AnalysisReport::from_json(&body).map_err(|e| AnalysisError::Decode(e.to_string()))?;

        let annotated_bytes = match report.detected_image.as_deref() {
            Some(source) => self.resolve_annotated(source).await,
            None => None,
        };

        Ok(AnalysisOutcome {
            report,
            annotated_bytes,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/analyze-ui/", self.base_url)
    }

    /// Fetch or decode the annotated image a report points at.
    ///
    /// Failures here degrade instead of failing the whole analysis: the
    /// report is still useful without the annotation, the comparison
    /// controls simply stay hidden.
    async fn resolve_annotated(&self, source: &str) -> Option<Vec<u8>> {
        match AnnotatedSource::classify(source) {
            Some(AnnotatedSource::Inline(bytes)) => Some(bytes),
            Some(AnnotatedSource::Url(url)) => {
                let url = self.absolute(&url);
                match self.http.get(&url).send().await {
                    Ok(response) if response.status().is_success() => {
                        response.bytes().await.ok().map(|bytes| bytes.to_vec())
                    }
                    Ok(response) => {
                        warn!(status = %response.status(), %url, "annotated image fetch failed");
                        None
                    }
                    Err(error) => {
                        warn!(%error, %url, "annotated image fetch failed");
                        None
                    }
                }
            }
            None => {
                warn!("annotated image data URI is malformed; skipping");
                None
            }
        }
    }

    /// Resolve a possibly-relative annotated image address against the
    /// service base.
    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }
}
