//! Operation-to-role allow-sets.
//!
//! Roles carry no ordering. Each operation lists the roles it admits and
//! nothing is inferred from rank.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use taskflow_entity::workspace::WorkspaceRole;

/// An operation gated by workspace role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceAction {
    /// Read workspace details.
    ViewWorkspace,
    /// Create a project.
    CreateProject,
    /// List or read projects.
    ViewProject,
    /// Create a task.
    CreateTask,
    /// List or read tasks.
    ViewTask,
    /// Update a task. Members are further restricted to their own tasks.
    UpdateTask,
    /// Delete a task.
    DeleteTask,
    /// Add a comment to a task.
    AddComment,
    /// List comments on a task.
    ViewComment,
    /// Issue an invite.
    CreateInvite,
}

impl WorkspaceAction {
    /// Every action.
    pub const ALL: [WorkspaceAction; 10] = [
        Self::ViewWorkspace,
        Self::CreateProject,
        Self::ViewProject,
        Self::CreateTask,
        Self::ViewTask,
        Self::UpdateTask,
        Self::DeleteTask,
        Self::AddComment,
        Self::ViewComment,
        Self::CreateInvite,
    ];
}

/// Mapping from each action to the roles allowed to perform it.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    allowed: HashMap<WorkspaceAction, HashSet<WorkspaceRole>>,
}

impl AccessPolicy {
    /// The default policy table.
    pub fn new() -> Self {
        use WorkspaceAction::*;
        use WorkspaceRole::*;

        let any_member = [Owner, Admin, Member, Viewer];
        let contributors = [Owner, Admin, Member];
        let managers = [Owner, Admin];

        let mut allowed = HashMap::new();
        let mut grant = |action: WorkspaceAction, roles: &[WorkspaceRole]| {
            allowed.insert(action, roles.iter().copied().collect::<HashSet<_>>());
        };

        grant(ViewWorkspace, &any_member);
        grant(ViewProject, &any_member);
        grant(ViewTask, &any_member);
        grant(ViewComment, &any_member);

        grant(CreateTask, &contributors);
        grant(AddComment, &contributors);
        grant(UpdateTask, &contributors);

        grant(CreateProject, &managers);
        grant(DeleteTask, &managers);
        grant(CreateInvite, &managers);

        Self { allowed }
    }

    /// Roles admitted for `action`, in declaration order.
    pub fn roles_for(&self, action: WorkspaceAction) -> Vec<WorkspaceRole> {
        let set = self.allowed.get(&action);
        WorkspaceRole::ALL
            .into_iter()
            .filter(|role| set.is_some_and(|s| s.contains(role)))
            .collect()
    }

    /// Whether `role` may perform `action`.
    pub fn allows(&self, role: WorkspaceRole, action: WorkspaceAction) -> bool {
        self.allowed
            .get(&action)
            .is_some_and(|roles| roles.contains(&role))
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}
