// Auth service HTTP client
//
// The auth service is a separate deployment from the directory
// backend: it issues tokens, verifies them, and stores the per-user
// saved-resource id set. Its envelope differs slightly from the
// backend's (`status` instead of `code`, token at the top level).

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// The auth service's response envelope.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct AuthEnvelope<T> {
    #[serde(default)]
    status: Option<i64>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    result: Option<T>,
}

/// Raw HTTP client for the Oasis auth service.
pub struct AuthClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AuthClient {
    /// Create a new client from a `TransportConfig`.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The auth service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Token flows ──────────────────────────────────────────────────

    /// Exchange credentials for a token.
    ///
    /// `POST /login`
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SecretString, Error> {
        let url = self.url("login")?;
        debug!(email, "logging in");
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
        });
        let resp = self.http.post(url).json(&body).send().await?;
        let envelope: AuthEnvelope<serde_json::Value> = parse_auth_body(resp).await?;
        match envelope.token {
            Some(token) => Ok(SecretString::from(token)),
            None => Err(Error::Authentication {
                message: envelope
                    .message
                    .unwrap_or_else(|| "login rejected".into()),
            }),
        }
    }

    /// Register a new account and receive its first token.
    ///
    /// The service requires a role and a security-question slot; it
    /// accepts the fixed values used here.
    ///
    /// `POST /register`
    pub async fn register(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SecretString, Error> {
        let url = self.url("register")?;
        debug!(email, "registering account");
        let body = json!({
            "email": email,
            "password": password.expose_secret(),
            "role": "admin",
            "questionIdx": 0,
            "answer": "_",
        });
        let resp = self.http.post(url).json(&body).send().await?;
        let envelope: AuthEnvelope<serde_json::Value> = parse_auth_body(resp).await?;
        match envelope.token {
            Some(token) => Ok(SecretString::from(token)),
            None => Err(Error::Authentication {
                message: envelope
                    .message
                    .unwrap_or_else(|| "registration rejected".into()),
            }),
        }
    }

    /// Check whether a token is still valid.
    ///
    /// A rejected token is an ordinary `Ok(false)`, not an error; the
    /// service reports the verdict inside a 200 response.
    ///
    /// `POST /verify` with `token` header
    pub async fn verify(&self, token: &SecretString) -> Result<bool, Error> {
        let url = self.url("verify")?;
        debug!("verifying token");
        let resp = self
            .http
            .post(url)
            .header("token", token.expose_secret())
            .send()
            .await?;
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Ok(false);
        }
        let body = resp.text().await?;
        let envelope: AuthEnvelope<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;
        Ok(envelope.status == Some(200))
    }

    // ── Saved resources ──────────────────────────────────────────────

    /// Fetch the signed-in user's saved resource ids.
    ///
    /// `GET /savedResources` with `token` header
    pub async fn saved_resource_ids(&self, token: &SecretString) -> Result<Vec<String>, Error> {
        let url = self.url("savedResources")?;
        debug!("fetching saved resource ids");
        let resp = self
            .http
            .get(url)
            .header("token", token.expose_secret())
            .send()
            .await?;
        let envelope: AuthEnvelope<Vec<String>> = parse_auth_body(resp).await?;
        Ok(envelope.result.unwrap_or_default())
    }

    /// Add a resource id to the saved set.
    ///
    /// `POST /savedResources/{id}` with `token` header
    pub async fn save_resource(&self, token: &SecretString, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("savedResources/{id}"))?;
        debug!(id, "saving resource");
        let resp = self
            .http
            .post(url)
            .header("token", token.expose_secret())
            .send()
            .await?;
        let _: AuthEnvelope<serde_json::Value> = parse_auth_body(resp).await?;
        Ok(())
    }

    /// Remove a resource id from the saved set.
    ///
    /// `DELETE /savedResources/{id}` with `token` header
    pub async fn unsave_resource(&self, token: &SecretString, id: &str) -> Result<(), Error> {
        let url = self.url(&format!("savedResources/{id}"))?;
        debug!(id, "unsaving resource");
        let resp = self
            .http
            .delete(url)
            .header("token", token.expose_secret())
            .send()
            .await?;
        let _: AuthEnvelope<serde_json::Value> = parse_auth_body(resp).await?;
        Ok(())
    }
}

/// Read and decode an auth-service response, mapping HTTP-level and
/// envelope-level failures to typed errors.
async fn parse_auth_body<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<AuthEnvelope<T>, Error> {
    let status = resp.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(Error::Authentication {
            message: "token missing, expired, or rejected".into(),
        });
    }

    let body = resp.text().await?;

    let envelope: AuthEnvelope<T> =
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: body.clone(),
        })?;

    // The service reports logical failures inside a 200 response.
    if let Some(code) = envelope.status {
        if !(200..300).contains(&code) && envelope.token.is_none() {
            return Err(Error::Api {
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("auth request failed with status {code}")),
                code,
            });
        }
    }

    if !status.is_success() {
        return Err(Error::Api {
            message: envelope
                .message
                .unwrap_or_else(|| format!("auth request failed with HTTP {status}")),
            code: i64::from(status.as_u16()),
        });
    }

    Ok(envelope)
}
