// Directory backend HTTP client
//
// Wraps `reqwest::Client` with Oasis-specific URL construction and
// envelope unwrapping. Admin mutations carry the auth token in the
// `token` request header, which is how the auth middleware expects it.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{CategoryRecord, Envelope, ResourceRecord};

/// Raw HTTP client for the Oasis directory backend.
///
/// Handles the `{ code, message, success, result }` envelope; all
/// methods return unwrapped `result` payloads. A missing `result` on a
/// list endpoint degrades to an empty list rather than an error.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl DirectoryClient {
    /// Create a new client from a `TransportConfig`. The `base_url`
    /// should be the backend root (e.g. `https://oasis-api.example.org`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            token: None,
        }
    }

    /// Attach an auth token; required for the admin mutations.
    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Resources ────────────────────────────────────────────────────

    /// List every resource in the directory.
    ///
    /// `GET /resources`
    pub async fn list_resources(&self) -> Result<Vec<ResourceRecord>, Error> {
        let url = self.url("resources")?;
        debug!("listing all resources");
        Ok(self.get(url).await?.unwrap_or_default())
    }

    /// List resources belonging to one top-level category.
    ///
    /// `GET /resources?category={name}`
    pub async fn list_resources_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<ResourceRecord>, Error> {
        let mut url = self.url("resources")?;
        url.query_pairs_mut().append_pair("category", category);
        debug!(category, "listing resources by category");
        Ok(self.get(url).await?.unwrap_or_default())
    }

    /// Fetch one resource by id.
    ///
    /// `GET /resources/{id}`
    pub async fn get_resource(&self, id: &str) -> Result<ResourceRecord, Error> {
        let url = self.url(&format!("resources/{id}"))?;
        debug!(id, "fetching resource");
        self.get(url).await?.ok_or_else(|| Error::NotFound {
            what: format!("resource {id}"),
        })
    }

    /// Create a resource (admin).
    ///
    /// `POST /resources` with `token` header
    pub async fn create_resource(
        &self,
        record: &ResourceRecord,
    ) -> Result<ResourceRecord, Error> {
        let url = self.url("resources")?;
        debug!(name = %record.name, "creating resource");
        self.post(url, record).await?.ok_or_else(|| Error::NotFound {
            what: "created resource in response".into(),
        })
    }

    /// Replace a resource (admin).
    ///
    /// `PUT /resources/{id}` with `token` header
    pub async fn update_resource(
        &self,
        id: &str,
        record: &ResourceRecord,
    ) -> Result<Option<ResourceRecord>, Error> {
        let url = self.url(&format!("resources/{id}"))?;
        debug!(id, "updating resource");
        self.put(url, record).await
    }

    /// Delete a resource (admin).
    ///
    /// `DELETE /resources/{id}` with `token` header
    pub async fn delete_resource(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("resources/{id}"))?;
        debug!(id, "deleting resource");
        let _: Option<serde_json::Value> = self.delete(url).await?;
        Ok(())
    }

    // ── Categories ───────────────────────────────────────────────────

    /// Fetch the category taxonomy.
    ///
    /// `GET /categories`
    pub async fn list_categories(&self) -> Result<Vec<CategoryRecord>, Error> {
        let url = self.url("categories")?;
        debug!("listing categories");
        Ok(self.get(url).await?.unwrap_or_default())
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn apply_token(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.header("token", token.expose_secret()),
            None => req,
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);
        let resp = self.apply_token(self.http.get(url)).send().await?;
        parse_envelope(resp).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Option<T>, Error> {
        debug!("POST {}", url);
        let resp = self.apply_token(self.http.post(url)).json(body).send().await?;
        parse_envelope(resp).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Option<T>, Error> {
        debug!("PUT {}", url);
        let resp = self.apply_token(self.http.put(url)).json(body).send().await?;
        parse_envelope(resp).await
    }

    async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("DELETE {}", url);
        let resp = self.apply_token(self.http.delete(url)).send().await?;
        parse_envelope(resp).await
    }
}

/// Parse the `{ code, message, success, result }` envelope, returning
/// `result` on success or a typed error when the backend reports
/// failure.
pub(crate) async fn parse_envelope<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<Option<T>, Error> {
    let status = resp.status();

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::Authentication {
            message: "token missing, expired, or rejected".into(),
        });
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(Error::NotFound {
            what: "requested entity".into(),
        });
    }

    let body = resp.text().await?;

    let envelope: Envelope<T> =
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.clone(),
        })?;

    let code = envelope.code.unwrap_or_else(|| i64::from(status.as_u16()));
    let succeeded = envelope.success.unwrap_or(status.is_success()) && (200..300).contains(&code);
    if succeeded {
        Ok(envelope.result)
    } else {
        Err(Error::Api {
            message: envelope
                .message
                .unwrap_or_else(|| format!("request failed with code {code}")),
            code,
        })
    }
}
