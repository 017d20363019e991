//! PostgREST-backed task store.
//!
//! `PostgrestClient` is a small query builder over the `/rest/v1/{table}`
//! endpoints exposed by PostgREST (and Supabase). It covers the four
//! operations the task store needs: select, order, single, insert.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tasktracker_core::{NewTask, Task};
use tracing::{debug, warn};
use url::Url;

use super::{StoreError, TaskStore};
use crate::config::StoreConfig;

const REST_PATH: &str = "rest/v1/";
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

/// Sort direction for [`TableQuery::order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

impl Order {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Error body returned by PostgREST on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// HTTP client for a PostgREST service.
#[derive(Debug, Clone)]
pub struct PostgrestClient {
    rest_url: Url,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl PostgrestClient {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot serve as a base or the
    /// HTTP client cannot be built.
    pub fn new(
        base_url: &Url,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut base = base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let rest_url = base
            .join(REST_PATH)
            .map_err(|e| StoreError::Config(format!("invalid store url '{base_url}': {e}")))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            rest_url,
            api_key,
            http,
        })
    }

    /// Start a query against `table`.
    #[must_use]
    pub fn from(&self, table: &str) -> TableQuery<'_> {
        TableQuery {
            client: self,
            table: table.to_string(),
            columns: None,
            order: Vec::new(),
            single: false,
        }
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.api_key {
            Some(key) => builder.header("apikey", key).bearer_auth(key),
            None => builder,
        }
    }
}

/// A query against one table, built up then executed once.
#[derive(Debug, Clone)]
pub struct TableQuery<'a> {
    client: &'a PostgrestClient,
    table: String,
    columns: Option<String>,
    order: Vec<(String, Order)>,
    single: bool,
}

impl TableQuery<'_> {
    /// Columns to return (`*` for all).
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.columns = Some(columns.to_string());
        self
    }

    /// Sort by `column`. Repeated calls add secondary keys.
    #[must_use]
    pub fn order(mut self, column: &str, direction: Order) -> Self {
        self.order.push((column.to_string(), direction));
        self
    }

    /// Expect exactly one row back, returned as an object instead of an array.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Run the query as a read.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that does not decode into `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, StoreError> {
        let url = self.url()?;
        debug!(table = %self.table, %url, "PostgREST select");

        let request = self.accept(self.client.request(Method::GET, url));
        decode(send(request).await?).await
    }

    /// Insert `rows` and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that does not decode into `T`.
    pub async fn insert<B, T>(self, rows: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url()?;
        debug!(table = %self.table, %url, "PostgREST insert");

        let request = self
            .accept(self.client.request(Method::POST, url))
            .header("Prefer", RETURN_REPRESENTATION)
            .json(rows);
        decode(send(request).await?).await
    }

    fn accept(&self, request: RequestBuilder) -> RequestBuilder {
        if self.single {
            request.header(reqwest::header::ACCEPT, SINGLE_OBJECT)
        } else {
            request
        }
    }

    fn url(&self) -> Result<Url, StoreError> {
        let mut url = self
            .client
            .rest_url
            .join(&self.table)
            .map_err(|e| StoreError::Config(format!("invalid table '{}': {e}", self.table)))?;

        {
            let mut query = url.query_pairs_mut();
            if let Some(columns) = &self.columns {
                query.append_pair("select", columns);
            }
            if !self.order.is_empty() {
                let order = self
                    .order
                    .iter()
                    .map(|(column, direction)| format!("{column}.{}", direction.as_str()))
                    .collect::<Vec<_>>()
                    .join(",");
                query.append_pair("order", &order);
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        Ok(url)
    }
}

async fn send(request: RequestBuilder) -> Result<Response, StoreError> {
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(error) => {
            warn!(
                status = status.as_u16(),
                code = error.code.as_deref().unwrap_or(""),
                details = error.details.as_deref().unwrap_or(""),
                "PostgREST request rejected"
            );
            error.message
        }
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("store request failed")
            .to_string(),
    };

    Err(StoreError::Response {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode(e.to_string()))
}

/// Task store backed by a PostgREST table.
#[derive(Debug, Clone)]
pub struct PostgrestTaskStore {
    client: PostgrestClient,
    table: String,
}

impl PostgrestTaskStore {
    /// Create a store for `table` using an existing client.
    #[must_use]
    pub fn new(client: PostgrestClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// Build the client and store from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if no URL is configured or the client
    /// cannot be built.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let url = config
            .url
            .as_ref()
            .ok_or_else(|| StoreError::Config("store.url is not set".to_string()))?;
        let client = PostgrestClient::new(url, config.api_key.clone(), config.timeout)?;
        Ok(Self::new(client, config.table.clone()))
    }
}

#[async_trait::async_trait]
impl TaskStore for PostgrestTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let tasks: Vec<Task> = self
            .client
            .from(&self.table)
            .select("*")
            .order("created_at", Order::Descending)
            .fetch()
            .await?;

        debug!(count = tasks.len(), "Listed tasks from PostgREST");
        Ok(tasks)
    }

    async fn insert_task(&self, task: NewTask) -> Result<Task, StoreError> {
        let task: Task = self
            .client
            .from(&self.table)
            .select("*")
            .single()
            .insert(&[task])
            .await?;

        debug!(id = %task.id, "Inserted task into PostgREST");
        Ok(task)
    }
}
