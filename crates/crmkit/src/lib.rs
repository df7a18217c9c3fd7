//! crmkit: a schema-first tenant blueprint engine.
//!
//! A tenant slug resolves to a [`Blueprint`] — which entity types are live,
//! their field schemas and pipeline stages, the feature toggles, and the
//! KPI tile layout — from static configuration tables, with a general
//! fallback for unmapped slugs. Generic list and profile view-models are
//! built from the blueprint plus externally fetched rows; this crate never
//! performs I/O.

pub mod catalog;
pub mod error;

pub use crmkit_core::{
    list::{ListQuery, ListView, StageFilter},
    obs,
    profile::ProfileView,
    resolve::{Blueprint, ResolveOptions},
    route::Experience,
    value::{Record, Value},
};
pub use error::Error;

use crmkit_core::obs::ObsEvent;
use crmkit_schema::{build::registry, prelude::EntityKey};

///
/// Prelude
///

pub mod prelude {
    pub use crate::error::Error;
    pub use crmkit_core::prelude::*;
}

/// Resolve a tenant slug against the global registry.
///
/// The only failure mode is an invalid registry (first-read validation);
/// an unmapped slug is fallback behavior, never an error.
pub fn resolve(slug: &str) -> Result<Blueprint, Error> {
    resolve_with(slug, ResolveOptions::default())
}

/// Resolve a tenant slug with explicit options.
pub fn resolve_with(slug: &str, options: ResolveOptions) -> Result<Blueprint, Error> {
    let registry = registry()?;
    let blueprint = crmkit_core::resolve::resolve_with(&registry, slug, options);

    obs::record(ObsEvent::Resolve {
        fallback: blueprint.is_fallback(),
    });

    Ok(blueprint)
}

/// Classify a tenant slug into its top-level experience.
pub fn route(slug: &str) -> Result<Experience, Error> {
    let registry = registry()?;
    let experience = crmkit_core::route::route(&registry, slug);

    obs::record(ObsEvent::Route { experience });

    Ok(experience)
}

/// Build the list view-model for one entity type.
pub fn list_view<'a>(
    blueprint: &Blueprint,
    key: EntityKey,
    rows: &'a [Record],
    query: &ListQuery,
) -> Result<ListView<'a>, Error> {
    let view = crmkit_core::list::build_list(blueprint, key, rows, query)?;

    obs::record(ObsEvent::ListBuilt { entity: key });

    Ok(view)
}

/// Build the profile view-model for one record.
pub fn profile_view(
    blueprint: &Blueprint,
    key: EntityKey,
    record: &Record,
) -> Result<ProfileView, Error> {
    let view = crmkit_core::profile::build_profile(blueprint, key, record)?;

    obs::record(ObsEvent::ProfileBuilt { entity: key });

    Ok(view)
}
