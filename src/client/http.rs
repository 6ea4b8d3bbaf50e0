//! HTTP client implementation for the e-Boekhouden API.

use reqwest::{Method, RequestBuilder};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    AdministrationsService, CostCentersService, EmailTemplatesService, InvoiceTemplatesService,
    InvoicesService, LedgersService, MutationsService, ProductsService, RelationsService,
    UnitsService,
};
use crate::auth::{Credentials, Session, SessionInfo};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the e-Boekhouden API.
///
/// This client provides access to all API services through method calls
/// that return service structs. A session is created on the first request
/// and reused until [`end_session`](Self::end_session).
///
/// Cloning is cheap; clones share the HTTP connection pool and the session.
///
/// # Example
///
/// ```no_run
/// use eboekhouden::{filter, Credentials, EBoekhoudenClient, ListQuery};
///
/// # async fn example() -> eboekhouden::Result<()> {
/// let client = EBoekhoudenClient::new(Credentials::new("access-token", "MyApp")?)?;
///
/// // Use the relations service
/// let query = ListQuery::new().limit(25).param("name", filter::like("%B.V.%"));
/// let relations = client.relations().list(Some(query)).await?;
/// println!("{} relations", relations.items.len());
///
/// client.end_session().await?;
/// # Ok(())
/// # }
/// ```
pub struct EBoekhoudenClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

impl EBoekhoudenClient {
    /// Create a new client with the default configuration.
    ///
    /// No request is sent until the first API call.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client from `EBOEKHOUDEN_ACCESS_TOKEN` and
    /// `EBOEKHOUDEN_SOURCE`.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let session = Session::new(http.clone(), config.endpoint("session")?, credentials);

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Create a session now, replacing any session already held.
    pub async fn create_session(&self) -> Result<SessionInfo> {
        self.inner.session.create().await
    }

    /// End the current session (logout).
    ///
    /// The next API call creates a new session.
    pub async fn end_session(&self) -> Result<()> {
        self.inner.session.end().await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Get the administrations service.
    pub fn administrations(&self) -> AdministrationsService {
        AdministrationsService::new(self.inner.clone())
    }

    /// Get the cost centers service.
    pub fn cost_centers(&self) -> CostCentersService {
        CostCentersService::new(self.inner.clone())
    }

    /// Get the email templates service.
    pub fn email_templates(&self) -> EmailTemplatesService {
        EmailTemplatesService::new(self.inner.clone())
    }

    /// Get the invoices service.
    pub fn invoices(&self) -> InvoicesService {
        InvoicesService::new(self.inner.clone())
    }

    /// Get the invoice templates service.
    pub fn invoice_templates(&self) -> InvoiceTemplatesService {
        InvoiceTemplatesService::new(self.inner.clone())
    }

    /// Get the ledgers service.
    pub fn ledgers(&self) -> LedgersService {
        LedgersService::new(self.inner.clone())
    }

    /// Get the mutations service.
    pub fn mutations(&self) -> MutationsService {
        MutationsService::new(self.inner.clone())
    }

    /// Get the products service.
    pub fn products(&self) -> ProductsService {
        ProductsService::new(self.inner.clone())
    }

    /// Get the relations service.
    pub fn relations(&self) -> RelationsService {
        RelationsService::new(self.inner.clone())
    }

    /// Get the units service.
    pub fn units(&self) -> UnitsService {
        UnitsService::new(self.inner.clone())
    }
}

impl ClientInner {
    /// Send an authenticated request, creating a session first if needed.
    async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<Option<Value>>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let token = self.session.ensure().await?;
        let url = self.config.endpoint(path)?;

        tracing::debug!(%method, path, "Sending e-Boekhouden request");

        let request = self
            .http
            .request(method, url)
            .bearer_auth(token.expose_secret());
        let response = build(request).send().await?;

        read_response(response).await
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        decode(self.send(Method::GET, path, |r| r).await?)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        decode(self.send(Method::GET, path, |r| r.query(query)).await?)
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        decode(self.send(Method::POST, path, |r| r.json(body)).await?)
    }

    /// Make a PATCH request with a JSON body. Any response body is discarded.
    pub(crate) async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.send(Method::PATCH, path, |r| r.json(body)).await?;
        Ok(())
    }
}

/// Read a response body and check its status.
///
/// A 2xx response yields the decoded JSON body, or `None` when the body is
/// empty (e.g. 204 No Content). Any other status becomes [`Error::Api`].
pub(crate) async fn read_response(response: reqwest::Response) -> Result<Option<Value>> {
    let status = response.status();
    let bytes = response.bytes().await?;
    let is_empty = bytes.iter().all(u8::is_ascii_whitespace);

    if status.is_success() {
        if is_empty {
            return Ok(None);
        }
        return Ok(Some(serde_json::from_slice(&bytes)?));
    }

    let body = if is_empty {
        None
    } else {
        serde_json::from_slice::<Value>(&bytes).ok()
    };
    tracing::debug!(status = status.as_u16(), "e-Boekhouden request failed");

    Err(Error::from_api_response(status.as_u16(), body))
}

fn decode<T: DeserializeOwned>(body: Option<Value>) -> Result<T> {
    let body = body.ok_or(Error::EmptyResponse)?;
    Ok(serde_json::from_value(body)?)
}

impl Clone for EBoekhoudenClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for EBoekhoudenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EBoekhoudenClient")
            .field("config", &self.inner.config)
            .field("session", &self.inner.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_empty_body() {
        let result: Result<Value> = decode(None);
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_decode_body() {
        let value: serde_json::Map<String, Value> = decode(Some(json!({ "id": 1 }))).unwrap();
        assert_eq!(value.get("id"), Some(&json!(1)));
    }

    #[test]
    fn test_client_debug_hides_credentials() {
        let client =
            EBoekhoudenClient::new(Credentials::new("super-secret-token", "TestApp").unwrap())
                .unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("super-secret-token"));
    }
}
