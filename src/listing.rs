//! Paginated cluster listing and subnet enrichment.
//!
//! The listing pipeline has two halves: [`ClusterListing::list`] walks the
//! clusters collection page by page, and [`ClusterListing::extend_with_subnets`]
//! resolves the bare subnet identifiers embedded in the returned records into
//! full subnet details with a single bulk lookup. When the bulk lookup's
//! filter query would blow the server's request-URI limit, the lookup is
//! re-issued in id chunks sized to fit under the limit.

use crate::api::ApiError;
use crate::model::{Cluster, SearchOptions, SortDirection, Subnet, SubnetRef};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Encoded byte cost of one `&id=<uuid>` filter pair. Calibrated for
/// 36-character identifiers; override via
/// [`ClusterListing::with_subnet_id_filter_len`] when the deployment uses a
/// different id format.
pub const SUBNET_ID_FILTER_LEN: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The URI length limit cannot be met even for a single id filter. This
    /// means the calibrated per-id filter cost does not match the server's
    /// actual limit; splitting further cannot help.
    #[error("request URI limit cannot be satisfied even for a single subnet id filter (excess {excess} bytes)")]
    UriLimitUnsatisfiable { excess: usize },
}

/// Server-side collection access used by the listing pipeline.
///
/// Implemented by [`crate::api::NrmApiClient`]; tests substitute an
/// in-memory fake.
#[allow(async_fn_in_trait)]
pub trait ResourceListing {
    async fn list_clusters(&mut self, opts: &SearchOptions) -> Result<Vec<Cluster>, ApiError>;
    async fn list_subnets(&mut self, opts: &SearchOptions) -> Result<Vec<Subnet>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

/// Drives a cluster listing query with optional pagination and sorting.
#[derive(Debug, Clone)]
pub struct ClusterListing {
    page_size: Option<usize>,
    sort: Option<SortSpec>,
    subnet_id_filter_len: usize,
}

impl ClusterListing {
    pub fn new() -> ClusterListing {
        ClusterListing {
            page_size: None,
            sort: None,
            subnet_id_filter_len: SUBNET_ID_FILTER_LEN,
        }
    }

    pub fn with_page_size(mut self, page_size: Option<usize>) -> ClusterListing {
        self.page_size = page_size;
        self
    }

    pub fn with_sort(mut self, sort: Option<SortSpec>) -> ClusterListing {
        self.sort = sort;
        self
    }

    pub fn with_subnet_id_filter_len(mut self, len: usize) -> ClusterListing {
        self.subnet_id_filter_len = len;
        self
    }

    /// Fetch the cluster collection under the given filters.
    ///
    /// Without a page size this is a single call. With one, pages are
    /// requested with `limit`/`marker` until a short page signals the end,
    /// and concatenated in server order; no client-side re-sort.
    pub async fn list<C: ResourceListing>(
        &self,
        client: &mut C,
        filters: &SearchOptions,
    ) -> Result<Vec<Cluster>, ListingError> {
        let mut opts = filters.clone();
        if let Some(sort) = &self.sort {
            opts.sort_key = Some(sort.key.clone());
            opts.sort_dir = Some(sort.direction);
        }

        let page_size = match self.page_size {
            None => return Ok(client.list_clusters(&opts).await?),
            Some(page_size) => page_size,
        };

        opts.limit = Some(page_size);
        let mut clusters = Vec::new();
        loop {
            let page = client.list_clusters(&opts).await?;
            let page_len = page.len();
            trace!("Received a page of {} clusters", page_len);
            opts.marker = page.last().map(|c| c.id.clone());
            clusters.extend(page);
            if page_len < page_size {
                break;
            }
        }
        Ok(clusters)
    }

    /// Replace every subnet identifier embedded in `clusters` with its full
    /// detail record, in place.
    ///
    /// Identifiers the lookup does not return are kept as `{id}`-only
    /// records; positions and sequence lengths are preserved. When no record
    /// references a subnet, no lookup call is made at all.
    pub async fn extend_with_subnets<C: ResourceListing>(
        &self,
        client: &mut C,
        clusters: &mut [Cluster],
    ) -> Result<(), ListingError> {
        let subnet_ids: Vec<String> = clusters
            .iter()
            .filter_map(|c| c.subnets.as_ref())
            .flat_map(|refs| refs.iter().map(|r| r.id().to_string()))
            .collect();
        if subnet_ids.is_empty() {
            return Ok(());
        }

        let mut opts = SearchOptions::default();
        opts.fields = vec!["id".to_string(), "cidr".to_string()];
        if let Some(page_size) = self.page_size {
            opts.limit = Some(page_size);
        }

        let subnets = match self.lookup_subnets(client, &subnet_ids, &opts).await {
            Ok(subnets) => subnets,
            Err(ApiError::RequestUriTooLong { excess }) => {
                self.lookup_subnets_chunked(client, &subnet_ids, &opts, excess)
                    .await?
            }
            Err(e) => return Err(e.into()),
        };

        let by_id: HashMap<&str, &Subnet> = subnets.iter().map(|s| (s.id.as_str(), s)).collect();
        for cluster in clusters.iter_mut() {
            if let Some(refs) = cluster.subnets.as_mut() {
                for subnet_ref in refs.iter_mut() {
                    let detail = match by_id.get(subnet_ref.id()) {
                        Some(subnet) => (*subnet).clone(),
                        None => Subnet::id_only(subnet_ref.id()),
                    };
                    *subnet_ref = SubnetRef::Detail(detail);
                }
            }
        }
        Ok(())
    }

    async fn lookup_subnets<C: ResourceListing>(
        &self,
        client: &mut C,
        ids: &[String],
        opts: &SearchOptions,
    ) -> Result<Vec<Subnet>, ApiError> {
        let mut opts = opts.clone();
        opts.ids = ids.to_vec();
        client.list_subnets(&opts).await
    }

    /// Re-issue the lookup in chunks small enough to fit under the URI
    /// limit. The chunk size recovers exactly the `excess` bytes reported by
    /// the failed call, assuming a uniform per-id encoding cost.
    async fn lookup_subnets_chunked<C: ResourceListing>(
        &self,
        client: &mut C,
        ids: &[String],
        opts: &SearchOptions,
        excess: usize,
    ) -> Result<Vec<Subnet>, ListingError> {
        let id_count = ids.len();
        let max_size = (self.subnet_id_filter_len * id_count)
            .checked_sub(excess)
            .ok_or(ListingError::UriLimitUnsatisfiable { excess })?;
        let chunk_size = max_size / self.subnet_id_filter_len;
        if chunk_size == 0 {
            return Err(ListingError::UriLimitUnsatisfiable { excess });
        }

        debug!(
            "Request URI was {} bytes over the limit; retrying {} subnet id filters in chunks of {}",
            excess, id_count, chunk_size
        );
        let mut subnets = Vec::new();
        for chunk in ids.chunks(chunk_size) {
            subnets.extend(self.lookup_subnets(client, chunk, opts).await?);
        }
        Ok(subnets)
    }
}

impl Default for ClusterListing {
    fn default() -> Self {
        ClusterListing::new()
    }
}
