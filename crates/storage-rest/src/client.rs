//! HTTP client for the hosted row store.
//!
//! The store exposes a PostgREST-style API: one endpoint per table with
//! equality filters in the query string, plus `rpc/` endpoints for the
//! stored procedures backing the atomic balance adjustments. Every
//! repository in this crate goes through this one client so request
//! building, error mapping, and timeouts stay in a single place.

use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use nestegg_core::errors::{DatabaseError, Error, Result};

use crate::errors::StorageError;

/// Default timeout for store requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Rows-affected preference; makes mutating requests echo the touched rows.
const PREFER_REPRESENTATION: &str = "return=representation";

/// An equality filter on a table column.
#[derive(Debug, Clone)]
pub struct Filter {
    column: String,
    value: String,
}

impl Filter {
    pub fn eq(column: &str, value: &str) -> Self {
        Filter {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Renders the filter as a query-string pair (`column=eq.value`).
    fn to_query_pair(&self) -> String {
        format!("{}=eq.{}", self.column, urlencoding::encode(&self.value))
    }
}

/// Error body shape returned by the store on failed requests.
#[derive(Debug, serde::Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the hosted row store.
///
/// Authenticates with the store's service key; row ownership is enforced by
/// the `user_id` filters the repositories attach to every request.
#[derive(Debug, Clone)]
pub struct RestLedgerClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl RestLedgerClient {
    /// Create a new store client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The base URL of the hosted store (e.g. "https://db.example.com")
    /// * `service_key` - The store's service-role key
    ///
    /// # Errors
    ///
    /// Returns an error if the service key is not a valid header value or the
    /// HTTP client cannot be initialized.
    pub fn new(base_url: &str, service_key: &str) -> Result<Self> {
        let auth_header = HeaderValue::from_str(&format!("Bearer {service_key}")).map_err(|e| {
            Error::Database(DatabaseError::Internal(format!(
                "Invalid service key format: {e}"
            )))
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::Database(DatabaseError::Internal(format!(
                    "Failed to initialize HTTP client: {e}"
                )))
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Default headers for store requests.
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Builds a table endpoint URL with equality filters and optional ordering.
    fn table_url(&self, table: &str, filters: &[Filter], order: Option<&str>) -> String {
        let mut params: Vec<String> = filters.iter().map(Filter::to_query_pair).collect();
        if let Some(order) = order {
            params.push(format!("order={order}"));
        }
        let mut url = format!("{}/rest/v1/{}", self.base_url, table);
        if !params.is_empty() {
            url = format!("{}?{}", url, params.join("&"));
        }
        url
    }

    fn rpc_url(&self, function: &str) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, function)
    }

    /// Maps a non-success response to a storage error.
    ///
    /// The store reports constraint violations with SQLSTATE codes in the
    /// error body; those are mapped to their dedicated variants so the core
    /// can react to them (settings race, duplicate category names).
    fn status_error(status: StatusCode, body: &str) -> StorageError {
        if let Ok(err) = serde_json::from_str::<StoreErrorBody>(body) {
            let message = err.message.unwrap_or_else(|| format!("HTTP {status}"));
            match err.code.as_deref() {
                Some("23505") => return StorageError::UniqueViolation(message),
                Some("23503") => return StorageError::ForeignKeyViolation(message),
                _ => {}
            }
        }
        match status {
            StatusCode::NOT_FOUND | StatusCode::NOT_ACCEPTABLE => {
                StorageError::RowNotFound(format!("HTTP {status}"))
            }
            StatusCode::CONFLICT => StorageError::UniqueViolation(format!("HTTP {status}")),
            _ => StorageError::RequestFailed(format!(
                "HTTP {status}: {}",
                body.chars().take(200).collect::<String>()
            )),
        }
    }

    /// Reads a response body as a row set.
    async fn read_rows<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<Vec<T>, StorageError> {
        let status = response.status();
        let body = response.text().await.map_err(StorageError::from)?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }
        serde_json::from_str(&body).map_err(StorageError::from)
    }

    /// Fetches the rows matching `filters`.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&str>,
    ) -> Result<Vec<T>> {
        let url = self.table_url(table, filters, order);
        debug!("[store] GET {url}");
        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(StorageError::from)?;
        Ok(Self::read_rows(response).await?)
    }

    /// Fetches exactly one row; an empty result is a `NotFound`.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
    ) -> Result<T> {
        let mut rows: Vec<T> = self.select(table, filters, None).await?;
        if rows.is_empty() {
            return Err(StorageError::RowNotFound(format!("{table} row")).into());
        }
        Ok(rows.swap_remove(0))
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<T: DeserializeOwned>(
        &self,
        table: &str,
        row: &impl Serialize,
    ) -> Result<T> {
        let url = self.table_url(table, &[], None);
        debug!("[store] POST {url}");
        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .json(row)
            .send()
            .await
            .map_err(StorageError::from)?;
        let mut rows: Vec<T> = Self::read_rows(response).await?;
        if rows.is_empty() {
            return Err(StorageError::Decode(format!("{table} insert returned no row")).into());
        }
        Ok(rows.swap_remove(0))
    }

    /// Patches the rows matching `filters` and returns the first updated row;
    /// an empty match is a `NotFound`.
    pub async fn update_one<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[Filter],
        patch: &impl Serialize,
    ) -> Result<T> {
        let url = self.table_url(table, filters, None);
        debug!("[store] PATCH {url}");
        let response = self
            .client
            .patch(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .json(patch)
            .send()
            .await
            .map_err(StorageError::from)?;
        let mut rows: Vec<T> = Self::read_rows(response).await?;
        if rows.is_empty() {
            return Err(StorageError::RowNotFound(format!("{table} row")).into());
        }
        Ok(rows.swap_remove(0))
    }

    /// Deletes the rows matching `filters` and returns how many were removed.
    pub async fn delete(&self, table: &str, filters: &[Filter]) -> Result<usize> {
        let url = self.table_url(table, filters, None);
        debug!("[store] DELETE {url}");
        let response = self
            .client
            .delete(&url)
            .headers(self.headers())
            .header("Prefer", PREFER_REPRESENTATION)
            .send()
            .await
            .map_err(StorageError::from)?;
        let rows: Vec<serde_json::Value> = Self::read_rows(response).await?;
        Ok(rows.len())
    }

    /// Calls a stored procedure returning a single row.
    ///
    /// The atomic-increment procedures return the updated row, or SQL `NULL`
    /// when no row matched the arguments; the latter surfaces as `NotFound`.
    pub async fn rpc<T: DeserializeOwned>(
        &self,
        function: &str,
        args: &impl Serialize,
    ) -> Result<T> {
        let url = self.rpc_url(function);
        debug!("[store] POST {url}");
        let response = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(args)
            .send()
            .await
            .map_err(StorageError::from)?;

        let status = response.status();
        let body = response.text().await.map_err(StorageError::from)?;
        if !status.is_success() {
            return Err(Self::status_error(status, &body).into());
        }
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(StorageError::RowNotFound(format!("{function} target row")).into());
        }
        Ok(serde_json::from_str(&body).map_err(StorageError::from)?)
    }
}
