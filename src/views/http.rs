//! HTTP-backed view loader.
//!
//! Fetches `<base_url>/<ViewId>.<extension>`. Any non-2xx response is a load
//! failure; the body of a 2xx response becomes the view source.

use futures_util::future::BoxFuture;
use reqwest::Client;
use url::Url;

use crate::views::loader::ViewLoader;
use crate::views::types::{LoadError, ViewId, ViewUnit};

#[derive(Debug, Clone)]
pub struct HttpViewLoader {
    client: Client,
    base_url: Url,
    extension: String,
}

impl HttpViewLoader {
    /// Create a loader rooted at `base_url`.
    ///
    /// A trailing slash is appended when missing so that joins stay under the base path.
    pub fn new(base_url: &str, extension: impl Into<String>) -> Result<Self, url::ParseError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            extension: extension.into(),
        })
    }

    pub fn module_url(&self, id: &ViewId) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("{}.{}", id, self.extension))
    }
}

impl ViewLoader for HttpViewLoader {
    fn load<'a>(&'a self, id: &'a ViewId) -> BoxFuture<'a, Result<ViewUnit, LoadError>> {
        Box::pin(async move {
            let url = self
                .module_url(id)
                .map_err(|e| LoadError::Rejected(format!("invalid module url: {}", e)))?;
            tracing::debug!(view = %id, url = %url, "Fetching view module");

            let response = self.client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let source = response.text().await?;
            Ok(ViewUnit::new(id.clone(), source))
        })
    }
}
