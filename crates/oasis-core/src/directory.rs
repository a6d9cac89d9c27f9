// ── Directory facade ──
//
// One coherent surface over the two HTTP clients. Every fetch is a
// single request-response cycle: no retry, no cache, no background
// refresh. Callers refetch after a mutation, exactly as the engine's
// recompute-on-every-change contract expects.

use secrecy::SecretString;
use tracing::{debug, instrument};
use url::Url;

use oasis_api::types::ResourceRecord;
use oasis_api::{AuthClient, DirectoryClient, TransportConfig};

use crate::error::CoreError;
use crate::filter::{FilterCriteria, filter_and_sort};
use crate::model::{Category, Resource, SavedSet};

/// Connection settings for the two Oasis services.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Directory backend root.
    pub api_url: Url,
    /// Auth service root (a separate deployment).
    pub auth_url: Url,
    pub transport: TransportConfig,
    /// Auth token, when the user is signed in.
    pub token: Option<SecretString>,
}

/// Facade over the directory backend and auth service.
pub struct Directory {
    api: DirectoryClient,
    auth: AuthClient,
    token: Option<SecretString>,
}

impl Directory {
    /// Build clients from the given config. No request is made here;
    /// connection failures surface on the first operation.
    pub fn connect(config: DirectoryConfig) -> Result<Self, CoreError> {
        let mut api = DirectoryClient::new(config.api_url, &config.transport)?;
        if let Some(token) = config.token.clone() {
            api = api.with_token(token);
        }
        let auth = AuthClient::new(config.auth_url, &config.transport)?;
        Ok(Self {
            api,
            auth,
            token: config.token,
        })
    }

    /// Whether a token is attached (not necessarily still valid).
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    fn token(&self) -> Result<&SecretString, CoreError> {
        self.token.as_ref().ok_or(CoreError::NotSignedIn)
    }

    // ── Resources ────────────────────────────────────────────────────

    /// Fetch every resource, or one category's worth when `category`
    /// is given.
    #[instrument(skip(self))]
    pub async fn resources(&self, category: Option<&str>) -> Result<Vec<Resource>, CoreError> {
        let records = match category {
            Some(name) => self.api.list_resources_by_category(name).await?,
            None => self.api.list_resources().await?,
        };
        debug!(count = records.len(), "fetched resources");
        Ok(records.into_iter().map(Resource::from).collect())
    }

    /// Fetch, filter, and order in one step: the browse path.
    #[instrument(skip(self, criteria))]
    pub async fn browse(
        &self,
        category: Option<&str>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Resource>, CoreError> {
        let all = self.resources(category).await?;
        Ok(filter_and_sort(&all, criteria))
    }

    /// Fetch one resource by id.
    #[instrument(skip(self))]
    pub async fn resource(&self, id: &str) -> Result<Resource, CoreError> {
        match self.api.get_resource(id).await {
            Ok(record) => Ok(Resource::from(record)),
            Err(e) if e.is_not_found() => Err(CoreError::ResourceNotFound {
                identifier: id.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch the category taxonomy.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, CoreError> {
        let records = self.api.list_categories().await?;
        Ok(records.into_iter().map(Category::from).collect())
    }

    // ── Admin mutations ──────────────────────────────────────────────

    /// Create a resource (requires a token).
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn create_resource(&self, record: ResourceRecord) -> Result<Resource, CoreError> {
        self.token()?;
        let created = self.api.create_resource(&record).await?;
        Ok(Resource::from(created))
    }

    /// Replace a resource (requires a token).
    #[instrument(skip(self, record))]
    pub async fn update_resource(
        &self,
        id: &str,
        record: ResourceRecord,
    ) -> Result<(), CoreError> {
        self.token()?;
        self.api.update_resource(id, &record).await?;
        Ok(())
    }

    /// Delete a resource (requires a token).
    #[instrument(skip(self))]
    pub async fn delete_resource(&self, id: &str) -> Result<(), CoreError> {
        self.token()?;
        Ok(self.api.delete_resource(id).await?)
    }

    // ── Saved set ────────────────────────────────────────────────────

    /// Fetch the signed-in user's saved-resource id set.
    #[instrument(skip(self))]
    pub async fn saved_set(&self) -> Result<SavedSet, CoreError> {
        let ids = self.auth.saved_resource_ids(self.token()?).await?;
        Ok(SavedSet::from(ids))
    }

    /// Fetch the saved resources themselves, in directory order.
    #[instrument(skip(self))]
    pub async fn saved_resources(&self) -> Result<Vec<Resource>, CoreError> {
        let saved = self.saved_set().await?;
        let all = self.resources(None).await?;
        Ok(all.into_iter().filter(|r| saved.contains(&r.id)).collect())
    }

    /// Add a resource to the saved set.
    #[instrument(skip(self))]
    pub async fn save(&self, id: &str) -> Result<(), CoreError> {
        Ok(self.auth.save_resource(self.token()?, id).await?)
    }

    /// Remove a resource from the saved set.
    #[instrument(skip(self))]
    pub async fn unsave(&self, id: &str) -> Result<(), CoreError> {
        Ok(self.auth.unsave_resource(self.token()?, id).await?)
    }

    // ── Auth flows ───────────────────────────────────────────────────

    /// Exchange credentials for a token. The caller is responsible for
    /// storing it; `connect` attaches it on the next invocation.
    pub async fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SecretString, CoreError> {
        Ok(self.auth.login(email, password).await?)
    }

    /// Register a new account and receive its first token.
    pub async fn register(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<SecretString, CoreError> {
        Ok(self.auth.register(email, password).await?)
    }

    /// Check whether the attached token is still valid.
    pub async fn verify(&self) -> Result<bool, CoreError> {
        Ok(self.auth.verify(self.token()?).await?)
    }
}
