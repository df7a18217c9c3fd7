mod entity;
mod features;
mod field;
mod kpi;
mod pipeline;
mod preset;
mod registry;
mod tenant;

pub use entity::Entity;
pub use features::Features;
pub use field::{Field, FieldList};
pub use kpi::KpiTile;
pub use pipeline::{Pipeline, Stage};
pub use preset::Preset;
pub use registry::Registry;
pub use tenant::Tenant;

use crate::{error::ErrorTree, types::Category, types::EntityKey};
use thiserror::Error as ThisError;

///
/// NodeError
///
/// Registration-time failures. Duplicate installs are programmer errors in
/// the startup catalog, reported rather than silently overwritten.
///

#[derive(Debug, ThisError)]
pub enum NodeError {
    #[error("entity '{0}' already registered")]
    DuplicateEntity(EntityKey),

    #[error("pipeline for entity '{0}' already registered")]
    DuplicatePipeline(EntityKey),

    #[error("preset for category '{0}' already registered")]
    DuplicatePreset(Category),

    #[error("tenant '{0}' already registered")]
    DuplicateTenant(String),

    #[error("slug '{0}' already present in the '{1}' routing list")]
    DuplicateRoutingSlug(String, &'static str),
}

///
/// ValidateNode
///
/// Local structural checks for one config node. Cross-node invariants live
/// in `validate`, which also owns route-aware aggregation.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
