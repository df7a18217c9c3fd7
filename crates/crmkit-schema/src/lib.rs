pub mod build;
pub mod error;
pub mod node;
pub mod types;
pub mod validate;

/// Field key every entity schema must declare as its identifier.
pub const ID_FIELD: &str = "id";

/// Field key pipeline stages are matched against.
pub const STATUS_FIELD: &str = "status";

/// Maximum length for entity and preset labels.
pub const MAX_LABEL_LEN: usize = 64;

/// Maximum length for field keys.
pub const MAX_FIELD_KEY_LEN: usize = 64;

/// Maximum length for tenant slugs.
pub const MAX_SLUG_LEN: usize = 64;

use crate::{build::BuildError, node::NodeError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        ID_FIELD, STATUS_FIELD, err,
        error::ErrorTree,
        node::*,
        types::{Category, EntityKey, FieldType},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    BuildError(#[from] BuildError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
