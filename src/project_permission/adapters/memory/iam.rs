//! In-memory IAM for permission tests and local wiring.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::iam_callback::domain::ResourceType;
use crate::project_permission::{
    domain::{AuthPermission, ProjectGroup, WILDCARD_PROJECT},
    ports::{AuthPermissionApi, AuthProjectApi, AuthResourceApi, IamError, IamResult},
};

/// Thread-safe in-memory IAM.
///
/// Service codes are accepted but not partitioned on.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIam {
    state: Arc<RwLock<IamState>>,
}

#[derive(Debug, Default)]
struct IamState {
    grants: HashSet<Grant>,
    memberships: HashMap<(String, String), HashSet<ProjectGroup>>,
    user_projects: HashMap<String, Vec<String>>,
    resources: HashMap<(ResourceType, String), RegisteredResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Grant {
    user_id: String,
    resource_type: ResourceType,
    project_code: String,
    permission: AuthPermission,
}

/// A resource registered through [`AuthResourceApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredResource {
    /// Project the resource belongs to.
    pub project_code: String,
    /// Display name.
    pub name: String,
    /// User that created the resource.
    pub creator: String,
}

impl InMemoryIam {
    /// Creates an empty IAM.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants a permission on a resource type within a project.
    ///
    /// Use an empty `project_code` for platform-wide grants.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Transport`] when the state lock is poisoned.
    pub fn grant(
        &self,
        user_id: &str,
        resource_type: ResourceType,
        project_code: &str,
        permission: AuthPermission,
    ) -> IamResult<()> {
        self.write()?.grants.insert(Grant {
            user_id: user_id.to_owned(),
            resource_type,
            project_code: project_code.to_owned(),
            permission,
        });
        Ok(())
    }

    /// Adds a user to a project role group.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Transport`] when the state lock is poisoned.
    pub fn add_member(
        &self,
        project_code: &str,
        user_id: &str,
        group: ProjectGroup,
    ) -> IamResult<()> {
        let mut state = self.write()?;
        add_membership(&mut state, project_code, user_id, group);
        Ok(())
    }

    /// Makes every project visible to the user.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Transport`] when the state lock is poisoned.
    pub fn grant_all_projects(&self, user_id: &str) -> IamResult<()> {
        self.write()?
            .user_projects
            .insert(user_id.to_owned(), vec![WILDCARD_PROJECT.to_owned()]);
        Ok(())
    }

    /// Overrides the raw project list reported for a user.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Transport`] when the state lock is poisoned.
    pub fn set_user_projects<I, S>(&self, user_id: &str, projects: I) -> IamResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.write()?.user_projects.insert(
            user_id.to_owned(),
            projects.into_iter().map(Into::into).collect(),
        );
        Ok(())
    }

    /// Returns a registered resource.
    ///
    /// # Errors
    ///
    /// Returns [`IamError::Transport`] when the state lock is poisoned.
    pub fn resource(
        &self,
        resource_type: ResourceType,
        resource_code: &str,
    ) -> IamResult<Option<RegisteredResource>> {
        Ok(self
            .read()?
            .resources
            .get(&(resource_type, resource_code.to_owned()))
            .cloned())
    }

    fn read(&self) -> IamResult<RwLockReadGuard<'_, IamState>> {
        self.state
            .read()
            .map_err(|err| IamError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> IamResult<RwLockWriteGuard<'_, IamState>> {
        self.state
            .write()
            .map_err(|err| IamError::transport(std::io::Error::other(err.to_string())))
    }
}

fn add_membership(state: &mut IamState, project_code: &str, user_id: &str, group: ProjectGroup) {
    state
        .memberships
        .entry((project_code.to_owned(), user_id.to_owned()))
        .or_default()
        .insert(group);
    let projects = state.user_projects.entry(user_id.to_owned()).or_default();
    if !projects.iter().any(|code| code == project_code) {
        projects.push(project_code.to_owned());
    }
}

#[async_trait]
impl AuthProjectApi for InMemoryIam {
    async fn is_project_user(
        &self,
        user_id: &str,
        _service_code: &str,
        project_code: &str,
        group: Option<ProjectGroup>,
    ) -> IamResult<bool> {
        let state = self.read()?;
        let membership = state
            .memberships
            .get(&(project_code.to_owned(), user_id.to_owned()));
        Ok(match (membership, group) {
            (None, _) => false,
            (Some(groups), None) => !groups.is_empty(),
            (Some(groups), Some(required)) => groups.contains(&required),
        })
    }

    async fn get_user_projects(
        &self,
        _service_code: &str,
        user_id: &str,
    ) -> IamResult<Vec<String>> {
        Ok(self
            .read()?
            .user_projects
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_user_projects_available(
        &self,
        _service_code: &str,
        user_id: &str,
    ) -> IamResult<BTreeMap<String, String>> {
        let state = self.read()?;
        let visible = state.user_projects.get(user_id);
        let sees_all = visible
            .and_then(|codes| codes.first())
            .is_some_and(|code| code == WILDCARD_PROJECT);
        let available = state
            .resources
            .iter()
            .filter(|((resource_type, _), _)| *resource_type == ResourceType::Project)
            .filter(|((_, code), _)| {
                sees_all || visible.is_some_and(|codes| codes.contains(code))
            })
            .map(|((_, code), resource)| (code.clone(), resource.name.clone()))
            .collect();
        Ok(available)
    }
}

#[async_trait]
impl AuthPermissionApi for InMemoryIam {
    async fn validate_user_resource_permission(
        &self,
        user_id: &str,
        _service_code: &str,
        resource_type: ResourceType,
        project_code: &str,
        permission: AuthPermission,
    ) -> IamResult<bool> {
        let grant = Grant {
            user_id: user_id.to_owned(),
            resource_type,
            project_code: project_code.to_owned(),
            permission,
        };
        Ok(self.read()?.grants.contains(&grant))
    }
}

#[async_trait]
impl AuthResourceApi for InMemoryIam {
    async fn create_resource(
        &self,
        user_id: &str,
        _service_code: &str,
        resource_type: ResourceType,
        project_code: &str,
        resource_code: &str,
        resource_name: &str,
    ) -> IamResult<()> {
        let mut state = self.write()?;
        let key = (resource_type, resource_code.to_owned());
        if state.resources.contains_key(&key) {
            return Err(IamError::DuplicateResource {
                resource_type,
                resource_code: resource_code.to_owned(),
            });
        }
        state.resources.insert(
            key,
            RegisteredResource {
                project_code: project_code.to_owned(),
                name: resource_name.to_owned(),
                creator: user_id.to_owned(),
            },
        );
        if resource_type == ResourceType::Project {
            add_membership(&mut state, resource_code, user_id, ProjectGroup::Manager);
        }
        Ok(())
    }

    async fn modify_resource(
        &self,
        _service_code: &str,
        resource_type: ResourceType,
        _project_code: &str,
        resource_code: &str,
        resource_name: &str,
    ) -> IamResult<()> {
        let mut state = self.write()?;
        let resource = state
            .resources
            .get_mut(&(resource_type, resource_code.to_owned()))
            .ok_or_else(|| IamError::ResourceNotFound {
                resource_type,
                resource_code: resource_code.to_owned(),
            })?;
        resource_name.clone_into(&mut resource.name);
        Ok(())
    }
}
