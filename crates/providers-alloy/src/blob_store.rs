//! Contains an online implementation of the [BlobStore] trait backed by a NEAR DA sidecar.

use alloy_primitives::{Bytes, B256};
use async_trait::async_trait;
use op_near_derive::{errors::BlobStoreError, traits::BlobStore};
use op_near_primitives::{DaBlob, Namespace};
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, warn};

/// The blob lookup method of the sidecar API.
pub(crate) const BLOB_METHOD: &str = "blob";

/// The sidecar response for a blob lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct APIBlobResponse {
    /// The blob payload.
    pub data: Bytes,
    /// The commitment over the payload.
    pub commitment: B256,
}

impl From<APIBlobResponse> for DaBlob {
    fn from(response: APIBlobResponse) -> Self {
        Self::new(response.data, response.commitment)
    }
}

/// An online implementation of the [BlobStore] trait.
///
/// Blobs are looked up with
/// `GET {base}/blob?transaction_id=<tx id>&namespace_version=<version>&namespace_id=<id>`.
/// A `404` maps to [BlobStoreError::NotFound], every other failure to [BlobStoreError::Backend].
#[derive(Debug, Clone)]
pub struct OnlineBlobStore {
    /// The base URL of the sidecar API.
    base: String,
    /// The namespace blobs are looked up in.
    namespace: Namespace,
    /// The inner reqwest client.
    inner: Client,
}

impl OnlineBlobStore {
    /// Creates a new [OnlineBlobStore] for the sidecar at `base`.
    pub fn new_http(base: String, namespace: Namespace) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self { base, namespace, inner: Client::new() }
    }

    /// Returns the URL of the blob lookup endpoint.
    fn blob_url(&self) -> String {
        format!("{}/{}", self.base, BLOB_METHOD)
    }

    /// Builds the lookup request for the blob posted in DA transaction `tx_id`.
    fn blob_request(&self, tx_id: B256) -> RequestBuilder {
        self.inner.get(self.blob_url()).query(&[
            ("transaction_id", tx_id.to_string()),
            ("namespace_version", self.namespace.version.to_string()),
            ("namespace_id", self.namespace.id.to_string()),
        ])
    }
}

#[async_trait]
impl BlobStore for OnlineBlobStore {
    async fn get_blob(&mut self, tx_id: B256) -> Result<DaBlob, BlobStoreError> {
        debug!(
            target: "blob-store",
            "fetching blob, namespace: {}, tx_id: {tx_id}",
            self.namespace
        );
        let response = self.blob_request(tx_id).send().await.map_err(|e| {
            warn!(target: "blob-store", "blob request failed: {e}");
            BlobStoreError::Backend(e.to_string())
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BlobStoreError::NotFound(tx_id));
        }
        let response =
            response.error_for_status().map_err(|e| BlobStoreError::Backend(e.to_string()))?;

        let blob = response
            .json::<APIBlobResponse>()
            .await
            .map_err(|e| BlobStoreError::Backend(format!("invalid blob response: {e}")))?;
        Ok(blob.into())
    }
}
