//! Authenticated caller of a workflow operation.

use super::Role;
use crate::reference::{CollaboratorId, UserId};

/// The user on whose behalf an operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    user_id: UserId,
    role: Role,
    collaborator_id: Option<CollaboratorId>,
}

impl Actor {
    /// Creates an actor with the given user and role.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self {
            user_id,
            role,
            collaborator_id: None,
        }
    }

    /// Creates a privileged back-office actor.
    #[must_use]
    pub const fn admin(user_id: UserId) -> Self {
        Self::new(user_id, Role::Admin)
    }

    /// Creates a collaborator actor linked to its collaborator record.
    #[must_use]
    pub const fn collaborator(user_id: UserId, collaborator_id: CollaboratorId) -> Self {
        Self {
            user_id,
            role: Role::Collaborator,
            collaborator_id: Some(collaborator_id),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the actor's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this actor is the given collaborator.
    #[must_use]
    pub fn is_collaborator(&self, collaborator_id: &CollaboratorId) -> bool {
        self.collaborator_id.as_ref() == Some(collaborator_id)
    }
}
