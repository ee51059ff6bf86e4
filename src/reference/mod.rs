//! Opaque references to records owned by the remote API.
//!
//! The dashboard never mints these identifiers itself (except in the
//! in-memory adapters); they are carried verbatim between the API and the
//! workflow services.

mod ids;

pub(crate) use ids::opaque_id;
pub use ids::{
    ArticleId, CategoryId, ClientId, CollaboratorId, ProjectId, StatusCode, TaskTypeId, UserId,
};
