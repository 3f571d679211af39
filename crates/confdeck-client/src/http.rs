//! HTTP implementation of the backend capability

use std::time::Duration;

use reqwest::Client;
use url::Url;

use confdeck_core::prelude::*;
use confdeck_core::ResourceName;

use crate::backend::Backend;
use crate::protocol::{error_message, parse_lenient, AckResponse, FileResponse, SaveRequest};

/// Backend client speaking the `/api/file` + `/api/restart` contract.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base: Url,
}

impl HttpBackend {
    /// Create a client for the given base URL.
    ///
    /// The URL must be absolute with an http(s) scheme; a trailing slash
    /// is tolerated. `timeout` bounds each request end to end.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = normalize_base_url(base_url)?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(&format!(
            "{}{}",
            self.base.path().trim_end_matches('/'),
            path
        ));
        url
    }

    fn file_url(&self, name: &ResourceName) -> Url {
        self.endpoint(&format!("/api/file/{}", name.encoded_segment()))
    }
}

/// Parse and normalize a base URL: absolute, http(s), no trailing slash.
fn normalize_base_url(input: &str) -> Result<Url> {
    let trimmed = input.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|_| Error::invalid_url(input))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(input));
    }
    Ok(url)
}

impl Backend for HttpBackend {
    async fn load(&self, name: &ResourceName) -> Result<String> {
        let url = self.file_url(name);
        debug!(%url, "loading resource");

        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(resource = %name, "load request failed: {e}");
            Error::transport("Load failed")
        })?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            warn!(resource = %name, "load body read failed: {e}");
            Error::transport("Load failed")
        })?;

        if !status.is_success() {
            return Err(Error::backend(error_message(&body, "Load failed")));
        }

        let parsed: FileResponse = parse_lenient(&body);
        Ok(parsed.content)
    }

    async fn save(&self, name: &ResourceName, content: &str) -> Result<()> {
        let url = self.file_url(name);
        debug!(%url, bytes = content.len(), "saving resource");

        let resp = self
            .http
            .post(url)
            .json(&SaveRequest { content })
            .send()
            .await
            .map_err(|e| {
                warn!(resource = %name, "save request failed: {e}");
                Error::transport("Save failed")
            })?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(Error::backend(error_message(&body, "Save failed")));
        }
        Ok(())
    }

    async fn restart(&self) -> Result<()> {
        let url = self.endpoint("/api/restart");
        info!(%url, "requesting backend restart");

        let resp = self.http.post(url).send().await.map_err(|e| {
            warn!("restart request failed: {e}");
            Error::transport("Restart failed")
        })?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        // Restart needs an explicit ok:true on top of the 2xx status.
        let ack: AckResponse = parse_lenient(&body);
        if !status.is_success() || !ack.ok {
            return Err(Error::backend(error_message(&body, "Restart failed")));
        }
        Ok(())
    }

    async fn health(&self) -> bool {
        let url = self.endpoint("/health");
        match self.http.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                let ack: AckResponse = parse_lenient(&resp.text().await.unwrap_or_default());
                status.is_success() && ack.ok
            }
            Err(e) => {
                debug!("health probe failed: {e}");
                false
            }
        }
    }
}
