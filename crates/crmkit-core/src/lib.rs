//! Core runtime for crmkit: the blueprint resolver, the tenant router, the
//! generic list/profile view-model builders, and the ergonomics exported
//! via the `prelude`.

pub mod error;
pub mod list;
pub mod obs;
pub mod profile;
pub mod resolve;
pub mod route;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        list::{EmptyState, ListQuery, ListView, StageFilter},
        profile::{PipelineProgress, ProfileTab, ProfileView, StageState},
        resolve::{Blueprint, ResolveOptions, resolve, resolve_with},
        route::{Experience, route},
        value::{Record, Value},
    };
    pub use crmkit_schema::prelude::*;
}
