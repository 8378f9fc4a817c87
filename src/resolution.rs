//! Name-or-id resolution for command arguments.
//!
//! Cluster and subnet arguments accept either the resource id or its name.
//! An argument that parses as a UUID is taken verbatim; anything else is
//! resolved by listing the collection filtered by name. Zero or multiple
//! matches are errors, so a name never silently picks a resource.

use crate::api::ApiError;
use crate::listing::ResourceListing;
use crate::model::SearchOptions;
use tracing::debug;
use uuid::Uuid;

pub async fn resolve_cluster_identifier<C: ResourceListing>(
    client: &mut C,
    identifier: &str,
) -> Result<String, ApiError> {
    if Uuid::parse_str(identifier).is_ok() {
        return Ok(identifier.to_string());
    }
    debug!("Resolving cluster name {:?} to an id...", identifier);

    let mut opts = SearchOptions::default();
    opts.fields = vec!["id".to_string(), "name".to_string()];
    opts.name = Some(identifier.to_string());

    let mut matches = client.list_clusters(&opts).await?;
    match matches.len() {
        1 => Ok(matches.remove(0).id),
        0 => Err(ApiError::NotFound {
            resource: "cluster",
            identifier: identifier.to_string(),
        }),
        n => Err(ApiError::Ambiguous {
            resource: "cluster",
            identifier: identifier.to_string(),
            matches: n,
        }),
    }
}

pub async fn resolve_subnet_identifier<C: ResourceListing>(
    client: &mut C,
    identifier: &str,
) -> Result<String, ApiError> {
    if Uuid::parse_str(identifier).is_ok() {
        return Ok(identifier.to_string());
    }
    debug!("Resolving subnet name {:?} to an id...", identifier);

    let mut opts = SearchOptions::default();
    opts.fields = vec!["id".to_string(), "name".to_string()];
    opts.name = Some(identifier.to_string());

    let mut matches = client.list_subnets(&opts).await?;
    match matches.len() {
        1 => Ok(matches.remove(0).id),
        0 => Err(ApiError::NotFound {
            resource: "subnet",
            identifier: identifier.to_string(),
        }),
        n => Err(ApiError::Ambiguous {
            resource: "subnet",
            identifier: identifier.to_string(),
            matches: n,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cluster, Subnet};

    struct FakeDirectory {
        clusters: Vec<Cluster>,
        subnets: Vec<Subnet>,
    }

    impl ResourceListing for FakeDirectory {
        async fn list_clusters(&mut self, opts: &SearchOptions) -> Result<Vec<Cluster>, ApiError> {
            Ok(self
                .clusters
                .iter()
                .filter(|c| opts.name.as_deref() == c.name.as_deref())
                .cloned()
                .collect())
        }

        async fn list_subnets(&mut self, opts: &SearchOptions) -> Result<Vec<Subnet>, ApiError> {
            Ok(self
                .subnets
                .iter()
                .filter(|s| opts.name.as_deref() == s.name.as_deref())
                .cloned()
                .collect())
        }
    }

    fn named_cluster(id: &str, name: &str) -> Cluster {
        let mut cluster = Cluster::new(id);
        cluster.name = Some(name.to_string());
        cluster
    }

    #[tokio::test]
    async fn uuid_arguments_are_used_verbatim() {
        let mut directory = FakeDirectory {
            clusters: Vec::new(),
            subnets: Vec::new(),
        };
        let id = "c44302b1-4ac7-4816-b3e0-a85a4bc7a712";
        let resolved = resolve_cluster_identifier(&mut directory, id).await.unwrap();
        assert_eq!(resolved, id);
    }

    #[tokio::test]
    async fn unique_name_resolves_to_its_id() {
        let mut directory = FakeDirectory {
            clusters: vec![named_cluster("c1", "blue"), named_cluster("c2", "green")],
            subnets: Vec::new(),
        };
        let resolved = resolve_cluster_identifier(&mut directory, "green")
            .await
            .unwrap();
        assert_eq!(resolved, "c2");
    }

    #[tokio::test]
    async fn unknown_name_is_not_found() {
        let mut directory = FakeDirectory {
            clusters: Vec::new(),
            subnets: Vec::new(),
        };
        let err = resolve_cluster_identifier(&mut directory, "missing")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::NotFound {
                resource: "cluster",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn duplicate_names_are_ambiguous() {
        let mut directory = FakeDirectory {
            clusters: vec![named_cluster("c1", "blue"), named_cluster("c2", "blue")],
            subnets: Vec::new(),
        };
        let err = resolve_cluster_identifier(&mut directory, "blue")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Ambiguous { matches: 2, .. }));
    }

    #[tokio::test]
    async fn subnet_names_resolve_through_the_subnet_collection() {
        let mut directory = FakeDirectory {
            clusters: Vec::new(),
            subnets: vec![Subnet {
                id: "s7".to_string(),
                cidr: Some("10.1.0.0/24".to_string()),
                name: Some("storage".to_string()),
            }],
        };
        let resolved = resolve_subnet_identifier(&mut directory, "storage")
            .await
            .unwrap();
        assert_eq!(resolved, "s7");
    }
}
