//! Identifier newtypes shared by the task and order contexts.

/// Declares a string-backed identifier assigned by the remote API.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier value as received from the API.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Mints a fresh identifier for records created locally.
            #[must_use]
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            /// Returns the identifier as `str`.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use opaque_id;

opaque_id!(
    /// Client (customer account) reference.
    ClientId
);

opaque_id!(
    /// Collaborator (field worker) reference.
    CollaboratorId
);

opaque_id!(
    /// Project reference.
    ProjectId
);

opaque_id!(
    /// Task type reference.
    TaskTypeId
);

opaque_id!(
    /// Catalog article reference.
    ArticleId
);

opaque_id!(
    /// Catalog category reference.
    CategoryId
);

opaque_id!(
    /// Dashboard user account reference.
    UserId
);

opaque_id!(
    /// Status code of an order or order line (`EN_ATTENTE`, `LIVREE`, ...).
    ///
    /// Always the code itself, never the identifier of the status document
    /// the API may populate it from.
    StatusCode
);

impl StatusCode {
    /// Status code of freshly added order lines and of orders still open
    /// for editing.
    pub const PENDING: &'static str = "EN_ATTENTE";

    /// Returns the default status for a newly added order line.
    #[must_use]
    pub fn pending() -> Self {
        Self::new(Self::PENDING)
    }

    /// Returns whether this is the pending status.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.as_str() == Self::PENDING
    }
}
