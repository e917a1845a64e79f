//! Platform resource kinds known to the authorization system.

use super::ParseResourceTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that routes any action mentioning it to [`ResourceType::EnvNode`].
///
/// Node actions (`env_node_view`, `env_node_use`, ...) contain an underscore
/// inside the resource name itself, so the generic suffix stripping in
/// [`ResourceType::from_action`] would yield `env`.
const ENV_NODE_MARKER: &str = "env_node";

/// Resource kinds registered with the authorization system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// A platform project.
    #[serde(rename = "project")]
    Project,
    /// A pipeline inside a project.
    #[serde(rename = "pipeline")]
    Pipeline,
    /// A code repository binding.
    #[serde(rename = "repertory")]
    CodeRepository,
    /// A deployment environment.
    #[serde(rename = "environment")]
    Environment,
    /// A build or deployment node.
    #[serde(rename = "env_node")]
    EnvNode,
    /// A stored credential.
    #[serde(rename = "credential")]
    Credential,
    /// A stored certificate.
    #[serde(rename = "cert")]
    Cert,
    /// A quality gate rule.
    #[serde(rename = "rule")]
    QualityRule,
    /// A quality gate notification group.
    #[serde(rename = "group")]
    QualityGroup,
    /// An experience (app distribution) task.
    #[serde(rename = "task")]
    ExperienceTask,
    /// An experience user group.
    #[serde(rename = "experience_group")]
    ExperienceGroup,
    /// A development container image.
    #[serde(rename = "dev_image")]
    DevImage,
    /// A production container image.
    #[serde(rename = "prod_image")]
    ProdImage,
}

impl ResourceType {
    /// Every known resource type.
    pub const ALL: [Self; 13] = [
        Self::Project,
        Self::Pipeline,
        Self::CodeRepository,
        Self::Environment,
        Self::EnvNode,
        Self::Credential,
        Self::Cert,
        Self::QualityRule,
        Self::QualityGroup,
        Self::ExperienceTask,
        Self::ExperienceGroup,
        Self::DevImage,
        Self::ProdImage,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Pipeline => "pipeline",
            Self::CodeRepository => "repertory",
            Self::Environment => "environment",
            Self::EnvNode => "env_node",
            Self::Credential => "credential",
            Self::Cert => "cert",
            Self::QualityRule => "rule",
            Self::QualityGroup => "group",
            Self::ExperienceTask => "task",
            Self::ExperienceGroup => "experience_group",
            Self::DevImage => "dev_image",
            Self::ProdImage => "prod_image",
        }
    }

    /// Returns `true` when the resource list callback can enumerate
    /// instances of this type.
    #[must_use]
    pub const fn is_listable(self) -> bool {
        matches!(
            self,
            Self::Pipeline
                | Self::CodeRepository
                | Self::Environment
                | Self::EnvNode
                | Self::Credential
                | Self::Cert
        )
    }

    /// Extracts the resource type name from an IAM action identifier.
    ///
    /// Actions are named `<resource>_<verb>` (`pipeline_view`,
    /// `repertory_use`). Node actions are special-cased because the resource
    /// name itself contains an underscore. An action without an underscore
    /// is returned unchanged.
    #[must_use]
    pub fn type_name_from_action(action: &str) -> &str {
        if action.contains(ENV_NODE_MARKER) {
            return ENV_NODE_MARKER;
        }
        action
            .rsplit_once('_')
            .map_or(action, |(resource, _verb)| resource)
    }

    /// Resolves the resource type addressed by an IAM action identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseResourceTypeError`] when the derived name is not a
    /// known resource type.
    pub fn from_action(action: &str) -> Result<Self, ParseResourceTypeError> {
        Self::try_from(Self::type_name_from_action(action))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResourceType {
    type Error = ParseResourceTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == normalized)
            .ok_or_else(|| ParseResourceTypeError(value.to_owned()))
    }
}
