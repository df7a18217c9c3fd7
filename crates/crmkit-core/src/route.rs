use crate::resolve::normalize_slug;
use crmkit_schema::node::Registry;
use derive_more::Display;
use serde::Serialize;

///
/// Experience
///
/// Which top-level surface a tenant gets. Closed set: classification can
/// never fail, unmatched slugs take the generic blueprint surface.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Experience {
    Generic,
    Legacy,
    Partner,
}

/// Classify a tenant slug.
///
/// Precedence is fixed: the legacy list is checked before the partner list,
/// so a slug accidentally present in both routes to `Legacy`. Validation
/// rejects such overlaps at build time regardless.
#[must_use]
pub fn route(registry: &Registry, slug: &str) -> Experience {
    let slug = normalize_slug(slug);

    if registry.is_legacy(&slug) {
        Experience::Legacy
    } else if registry.is_partner(&slug) {
        Experience::Partner
    } else {
        Experience::Generic
    }
}

///
/// TESTS
///
