//! NRM API client.
//!
//! Thin typed wrapper over the NRM HTTP endpoints. Request and response
//! bodies use the API's envelope convention: a single top-level key naming
//! the resource (`{"cluster": {...}}`, `{"clusters": [...]}`).

use crate::configuration::Configuration;
use crate::listing::ResourceListing;
use crate::model::{Cluster, Host, SearchOptions, Subnet};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

/// Ceiling on the encoded request URI, matching the server's limit. Checked
/// client-side before a request is sent so that an oversized filter query
/// surfaces as a structured error instead of an HTTP 414.
pub const MAX_URI_LEN: usize = 8192;

/// Error emitted by the NRM API client
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("query encoding error: {0}")]
    QueryEncoding(#[from] serde_urlencoded::ser::Error),
    /// The encoded request URI would exceed the server's limit by `excess`
    /// bytes. Never sent over the wire; raised by the pre-flight check.
    #[error("request URI exceeds the maximum length by {excess} bytes")]
    RequestUriTooLong { excess: usize },
    #[error("{resource} {identifier:?} not found")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },
    #[error("{resource} {identifier:?} matches {matches} resources; use the id instead")]
    Ambiguous {
        resource: &'static str,
        identifier: String,
        matches: usize,
    },
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct ClusterEnvelope {
    cluster: Cluster,
}

#[derive(Debug, Deserialize)]
struct ClusterListEnvelope {
    clusters: Vec<Cluster>,
}

#[derive(Debug, Deserialize)]
struct SubnetListEnvelope {
    subnets: Vec<Subnet>,
}

#[derive(Debug, Deserialize)]
struct HostEnvelope {
    host: Host,
}

/// Mutable cluster attributes sent on create and update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClusterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Body of the subnet insert/remove calls.
#[derive(Debug, Clone, Serialize)]
pub struct SubnetAttachment {
    pub subnet_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct ClusterBody<T: Serialize> {
    cluster: T,
}

pub struct NrmApiClient {
    client: Client,
    base_url: String,
    max_uri_len: usize,
}

impl NrmApiClient {
    pub fn new(base_url: impl Into<String>) -> NrmApiClient {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        NrmApiClient {
            client: Client::new(),
            base_url,
            max_uri_len: MAX_URI_LEN,
        }
    }

    pub fn from_configuration(configuration: &Configuration) -> NrmApiClient {
        let client = NrmApiClient::new(configuration.api_url().as_str());
        match configuration.max_uri_len() {
            Some(max_uri_len) => client.with_max_uri_len(max_uri_len),
            None => client,
        }
    }

    pub fn with_max_uri_len(mut self, max_uri_len: usize) -> NrmApiClient {
        self.max_uri_len = max_uri_len;
        self
    }

    pub async fn get_cluster(&self, id: &str) -> Result<Cluster, ApiError> {
        trace!("Fetching cluster {}...", id);
        let url = self.url(&format!("/clusters/{}", id), &SearchOptions::default())?;
        let envelope: ClusterEnvelope = self.get_json(&url).await?;
        Ok(envelope.cluster)
    }

    pub async fn create_cluster(&self, spec: &ClusterSpec) -> Result<Cluster, ApiError> {
        trace!("Creating cluster...");
        let url = self.url("/clusters", &SearchOptions::default())?;
        let envelope: ClusterEnvelope = self.post_json(&url, &ClusterBody { cluster: spec }).await?;
        Ok(envelope.cluster)
    }

    pub async fn update_cluster(&self, id: &str, spec: &ClusterSpec) -> Result<Cluster, ApiError> {
        trace!("Updating cluster {}...", id);
        let url = self.url(&format!("/clusters/{}", id), &SearchOptions::default())?;
        let envelope: ClusterEnvelope = self.put_json(&url, &ClusterBody { cluster: spec }).await?;
        Ok(envelope.cluster)
    }

    pub async fn delete_cluster(&self, id: &str) -> Result<(), ApiError> {
        trace!("Deleting cluster {}...", id);
        let url = self.url(&format!("/clusters/{}", id), &SearchOptions::default())?;
        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ApiError::NotFound {
                resource: "cluster",
                identifier: id.to_string(),
            })
        } else {
            Err(ApiError::UnexpectedStatus(status))
        }
    }

    pub async fn cluster_insert_subnet(
        &self,
        cluster_id: &str,
        attachment: &SubnetAttachment,
    ) -> Result<(), ApiError> {
        trace!(
            "Inserting subnet {} into cluster {}...",
            attachment.subnet_id,
            cluster_id
        );
        let url = self.url(
            &format!("/clusters/{}/insert_subnet", cluster_id),
            &SearchOptions::default(),
        )?;
        self.put_no_content(&url, &ClusterBody { cluster: attachment })
            .await
    }

    pub async fn cluster_remove_subnet(
        &self,
        cluster_id: &str,
        attachment: &SubnetAttachment,
    ) -> Result<(), ApiError> {
        trace!(
            "Removing subnet {} from cluster {}...",
            attachment.subnet_id,
            cluster_id
        );
        let url = self.url(
            &format!("/clusters/{}/remove_subnet", cluster_id),
            &SearchOptions::default(),
        )?;
        self.put_no_content(&url, &ClusterBody { cluster: attachment })
            .await
    }

    pub async fn get_host(&self, id: &str) -> Result<Host, ApiError> {
        trace!("Fetching host restrictions for {}...", id);
        let url = self.url(&format!("/hosts/{}", id), &SearchOptions::default())?;
        let envelope: HostEnvelope = self.get_json(&url).await?;
        Ok(envelope.host)
    }

    /// Build the full request URL and run the pre-flight length check.
    fn url(&self, path: &str, opts: &SearchOptions) -> Result<String, ApiError> {
        let mut url = format!("{}{}", self.base_url, path);
        let pairs = opts.to_query_pairs();
        if !pairs.is_empty() {
            url.push('?');
            url.push_str(&serde_urlencoded::to_string(pairs)?);
        }
        if url.len() > self.max_uri_len {
            return Err(ApiError::RequestUriTooLong {
                excess: url.len() - self.max_uri_len,
            });
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.client.get(url).send().await?;
        self.read_json(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(url).json(body).send().await?;
        self.read_json(response).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.put(url).json(body).send().await?;
        self.read_json(response).await
    }

    async fn put_no_content<B: Serialize>(&self, url: &str, body: &B) -> Result<(), ApiError> {
        let response = self.client.put(url).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::UnexpectedStatus(status))
        }
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            debug!("Request failed with status {}", status);
            return Err(ApiError::UnexpectedStatus(status));
        }
        let response_text = response.text().await?;
        trace!("Raw response text for deserialization: {}", response_text);
        match serde_json::from_str::<T>(&response_text) {
            Ok(result) => Ok(result),
            Err(e) => {
                error!(
                    "Failed to deserialize response: {}. Raw response: {}",
                    e, response_text
                );
                Err(ApiError::Json(e))
            }
        }
    }
}

impl ResourceListing for NrmApiClient {
    async fn list_clusters(&mut self, opts: &SearchOptions) -> Result<Vec<Cluster>, ApiError> {
        trace!("Listing clusters...");
        let url = self.url("/clusters", opts)?;
        let envelope: ClusterListEnvelope = self.get_json(&url).await?;
        Ok(envelope.clusters)
    }

    async fn list_subnets(&mut self, opts: &SearchOptions) -> Result<Vec<Subnet>, ApiError> {
        trace!("Listing subnets ({} id filters)...", opts.ids.len());
        let url = self.url("/subnets", opts)?;
        let envelope: SubnetListEnvelope = self.get_json(&url).await?;
        Ok(envelope.subnets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_encoded_query_pairs() {
        let client = NrmApiClient::new("http://localhost:9696/v2.0");
        let mut opts = SearchOptions::default();
        opts.fields = vec!["id".to_string(), "cidr".to_string()];
        opts.ids = vec!["s1".to_string()];

        let url = client.url("/subnets", &opts).unwrap();
        assert_eq!(
            url,
            "http://localhost:9696/v2.0/subnets?fields=id&fields=cidr&id=s1"
        );
    }

    #[test]
    fn url_strips_trailing_slash_from_base() {
        let client = NrmApiClient::new("http://localhost:9696/v2.0/");
        let url = client.url("/clusters", &SearchOptions::default()).unwrap();
        assert_eq!(url, "http://localhost:9696/v2.0/clusters");
    }

    #[test]
    fn oversized_uri_is_rejected_before_sending() {
        let client = NrmApiClient::new("http://localhost:9696/v2.0").with_max_uri_len(100);
        let mut opts = SearchOptions::default();
        // 36-char ids at 40 encoded bytes each blow well past 100 bytes
        opts.ids = (0..10)
            .map(|i| format!("00000000-0000-0000-0000-00000000{:04}", i))
            .collect();

        let err = client.url("/subnets", &opts).unwrap_err();
        match err {
            ApiError::RequestUriTooLong { excess } => {
                let expected_len = "http://localhost:9696/v2.0/subnets?".len() + 10 * 40 - 1;
                assert_eq!(excess, expected_len - 100);
            }
            other => panic!("expected RequestUriTooLong, got {:?}", other),
        }
    }

    #[test]
    fn uri_at_the_limit_passes() {
        let base = "http://localhost:9696/v2.0";
        let url_len = format!("{}/clusters", base).len();
        let client = NrmApiClient::new(base).with_max_uri_len(url_len);
        assert!(client.url("/clusters", &SearchOptions::default()).is_ok());
    }
}
