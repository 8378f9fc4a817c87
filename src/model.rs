//! Data models for NRM entities (clusters, subnets, hosts) and the search
//! options accepted by the listing endpoints.

use crate::format::{CsvRecordProducer, FormattingError, OutputFormat, OutputFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cluster as returned by the NRM API.
///
/// Only `id` is guaranteed to be present. The `subnets` field, when present,
/// initially holds bare subnet identifiers; after enrichment every entry is a
/// full [`Subnet`] detail (see [`crate::listing`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetRef>>,
}

impl Cluster {
    pub fn new(id: impl Into<String>) -> Cluster {
        Cluster {
            id: id.into(),
            name: None,
            tenant_id: None,
            subnets: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// A reference to a subnet inside a cluster record.
///
/// The server lists subnets as bare identifier strings; enrichment replaces
/// each one with the full detail record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubnetRef {
    Detail(Subnet),
    Id(String),
}

impl SubnetRef {
    /// The subnet identifier, regardless of representation.
    pub fn id(&self) -> &str {
        match self {
            SubnetRef::Id(id) => id,
            SubnetRef::Detail(subnet) => &subnet.id,
        }
    }

    pub fn cidr(&self) -> Option<&str> {
        match self {
            SubnetRef::Id(_) => None,
            SubnetRef::Detail(subnet) => subnet.cidr.as_deref(),
        }
    }
}

/// A subnet detail record fetched from the subnets collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Subnet {
    /// A record carrying nothing but the identifier. Used when a referenced
    /// subnet cannot be looked up; serializes to `{"id": ...}`.
    pub fn id_only(id: impl Into<String>) -> Subnet {
        Subnet {
            id: id.into(),
            cidr: None,
            name: None,
        }
    }
}

/// A host restriction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restrictions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<SortDirection, String> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("invalid sort direction {:?}", other)),
        }
    }
}

/// Typed filter set for the listing endpoints.
///
/// Encodes to a query string in which `fields` and `ids` repeat their key
/// once per value and everything else is a single pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    pub fields: Vec<String>,
    pub ids: Vec<String>,
    pub name: Option<String>,
    pub tenant_id: Option<String>,
    pub limit: Option<usize>,
    pub marker: Option<String>,
    pub sort_key: Option<String>,
    pub sort_dir: Option<SortDirection>,
}

impl SearchOptions {
    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }

    /// Flatten into key/value pairs ready for URL encoding.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        for field in &self.fields {
            pairs.push(("fields", field.clone()));
        }
        for id in &self.ids {
            pairs.push(("id", id.clone()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        if let Some(tenant_id) = &self.tenant_id {
            pairs.push(("tenant_id", tenant_id.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(marker) = &self.marker {
            pairs.push(("marker", marker.clone()));
        }
        if let Some(sort_key) = &self.sort_key {
            pairs.push(("sort_key", sort_key.clone()));
        }
        if let Some(sort_dir) = self.sort_dir {
            pairs.push(("sort_dir", sort_dir.to_string()));
        }
        pairs
    }
}

impl CsvRecordProducer for Cluster {
    fn csv_header() -> Vec<String> {
        vec!["ID".to_string(), "NAME".to_string(), "SUBNETS".to_string()]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        let subnets = self
            .subnets
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|s| match s.cidr() {
                Some(cidr) => format!("{} {}", s.id(), cidr),
                None => s.id().to_string(),
            })
            .collect::<Vec<String>>()
            .join("; ");
        vec![vec![self.id.clone(), self.name().to_string(), subnets]]
    }
}

impl OutputFormatter for Cluster {
    type Item = Cluster;

    fn format(&self, format: OutputFormat) -> Result<String, FormattingError> {
        match format {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Csv(options) => self.to_csv(options.with_headers),
        }
    }
}

impl CsvRecordProducer for Vec<Cluster> {
    fn csv_header() -> Vec<String> {
        Cluster::csv_header()
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        self.iter().flat_map(|c| c.as_csv_records()).collect()
    }
}

impl OutputFormatter for Vec<Cluster> {
    type Item = Vec<Cluster>;

    fn format(&self, format: OutputFormat) -> Result<String, FormattingError> {
        match format {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Csv(options) => self.to_csv(options.with_headers),
        }
    }
}

impl CsvRecordProducer for Host {
    fn csv_header() -> Vec<String> {
        vec![
            "ID".to_string(),
            "NAME".to_string(),
            "RESTRICTIONS".to_string(),
        ]
    }

    fn as_csv_records(&self) -> Vec<Vec<String>> {
        let restrictions = self.restrictions.as_deref().unwrap_or_default().join("; ");
        vec![vec![
            self.id.clone(),
            self.name.clone().unwrap_or_default(),
            restrictions,
        ]]
    }
}

impl OutputFormatter for Host {
    type Item = Host;

    fn format(&self, format: OutputFormat) -> Result<String, FormattingError> {
        match format {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Csv(options) => self.to_csv(options.with_headers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnet_ref_deserializes_bare_ids_and_details() {
        let cluster: Cluster = serde_json::from_str(
            r#"{"id": "c1", "name": "blue", "subnets": ["s1", {"id": "s2", "cidr": "10.0.0.0/24"}]}"#,
        )
        .unwrap();

        let subnets = cluster.subnets.unwrap();
        assert_eq!(subnets[0], SubnetRef::Id("s1".to_string()));
        assert_eq!(subnets[0].id(), "s1");
        assert_eq!(subnets[1].id(), "s2");
        assert_eq!(subnets[1].cidr(), Some("10.0.0.0/24"));
    }

    #[test]
    fn id_only_subnet_serializes_to_bare_id_mapping() {
        let fallback = SubnetRef::Detail(Subnet::id_only("s9"));
        assert_eq!(serde_json::to_string(&fallback).unwrap(), r#"{"id":"s9"}"#);
    }

    #[test]
    fn search_options_encode_repeated_filter_keys() {
        let mut opts = SearchOptions::default();
        opts.fields = vec!["id".to_string(), "cidr".to_string()];
        opts.ids = vec!["s1".to_string(), "s2".to_string()];
        opts.limit = Some(100);
        opts.sort_dir = Some(SortDirection::Desc);

        let encoded = serde_urlencoded::to_string(opts.to_query_pairs()).unwrap();
        assert_eq!(
            encoded,
            "fields=id&fields=cidr&id=s1&id=s2&limit=100&sort_dir=desc"
        );
    }

    #[test]
    fn cluster_csv_record_flattens_subnets() {
        let mut cluster = Cluster::new("c1");
        cluster.name = Some("blue".to_string());
        cluster.subnets = Some(vec![
            SubnetRef::Detail(Subnet {
                id: "s1".to_string(),
                cidr: Some("10.0.0.0/24".to_string()),
                name: None,
            }),
            SubnetRef::Detail(Subnet::id_only("s2")),
        ]);

        let records = cluster.as_csv_records();
        assert_eq!(
            records,
            vec![vec![
                "c1".to_string(),
                "blue".to_string(),
                "s1 10.0.0.0/24; s2".to_string(),
            ]]
        );
    }
}
