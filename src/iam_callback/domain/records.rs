//! Records returned by the platform services that own callback resources.
//!
//! Field names follow the JSON the services emit, so the same types decode
//! HTTP payloads and seed in-memory directories.

use super::InstanceInfo;
use serde::{Deserialize, Serialize};

/// One page of downstream records.
///
/// `records` is optional because the services omit it when a project holds
/// no resources of the requested kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage<T> {
    /// Total number of records across all pages.
    #[serde(default)]
    pub count: u64,
    /// Records of the requested page.
    pub records: Option<Vec<T>>,
}

impl<T> RecordPage<T> {
    /// Creates a page from a total count and the page records.
    #[must_use]
    pub const fn new(count: u64, records: Vec<T>) -> Self {
        Self {
            count,
            records: Some(records),
        }
    }
}

/// A downstream record that can be shown as an IAM instance.
pub trait InstanceRecord {
    /// Converts the record into its `{id, displayName}` pair.
    fn into_instance(self) -> InstanceInfo;
}

/// Pipeline summary from the process service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    /// Pipeline identifier.
    pub pipeline_id: String,
    /// Pipeline display name.
    pub pipeline_name: String,
}

impl InstanceRecord for PipelineSummary {
    fn into_instance(self) -> InstanceInfo {
        InstanceInfo::new(self.pipeline_id, self.pipeline_name)
    }
}

/// Code repository summary from the repository service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    /// Hashed repository identifier.
    pub repository_hash_id: String,
    /// Repository alias shown to users.
    pub alias_name: String,
}

impl InstanceRecord for RepositorySummary {
    fn into_instance(self) -> InstanceInfo {
        InstanceInfo::new(self.repository_hash_id, self.alias_name)
    }
}

/// Environment summary from the environment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSummary {
    /// Hashed environment identifier.
    pub env_hash_id: String,
    /// Environment name.
    pub name: String,
}

impl InstanceRecord for EnvironmentSummary {
    fn into_instance(self) -> InstanceInfo {
        InstanceInfo::new(self.env_hash_id, self.name)
    }
}

/// Node summary from the environment service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    /// Hashed node identifier.
    pub node_hash_id: String,
    /// Node name.
    pub name: String,
}

impl InstanceRecord for NodeSummary {
    fn into_instance(self) -> InstanceInfo {
        InstanceInfo::new(self.node_hash_id, self.name)
    }
}

/// Credential summary from the ticket service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialSummary {
    /// Credential identifier.
    pub credential_id: String,
    /// Optional free-text remark.
    #[serde(default)]
    pub credential_remark: Option<String>,
}

impl InstanceRecord for CredentialSummary {
    fn into_instance(self) -> InstanceInfo {
        let display_name = non_blank_or(self.credential_remark, &self.credential_id);
        InstanceInfo::new(self.credential_id, display_name)
    }
}

/// Certificate summary from the ticket service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertSummary {
    /// Certificate identifier.
    pub cert_id: String,
    /// Optional free-text remark.
    #[serde(default)]
    pub cert_remark: Option<String>,
}

impl InstanceRecord for CertSummary {
    fn into_instance(self) -> InstanceInfo {
        let display_name = non_blank_or(self.cert_remark, &self.cert_id);
        InstanceInfo::new(self.cert_id, display_name)
    }
}

/// Project summary from the project service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Project english name, the project's stable identifier.
    pub english_name: String,
    /// Project display name.
    #[serde(default)]
    pub project_name: String,
}

impl InstanceRecord for ProjectSummary {
    fn into_instance(self) -> InstanceInfo {
        InstanceInfo::new(self.english_name.clone(), self.english_name)
    }
}

fn non_blank_or(remark: Option<String>, fallback: &str) -> String {
    remark
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
