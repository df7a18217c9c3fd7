use crate::{MAX_SLUG_LEN, prelude::*};

///
/// Tenant
///
/// Bespoke blueprint definition for one business. `entities` may be empty,
/// in which case resolution falls through to the category preset (or the
/// general preset when no category is set).
///

#[derive(Clone, Debug, Serialize)]
pub struct Tenant {
    pub slug: &'static str,
    pub label: &'static str,
    pub category: Option<Category>,
    pub entities: &'static [EntityKey],
    pub features: Features,
    pub kpis: &'static [KpiTile],
}

impl Tenant {
    /// Whether this definition carries its own entity list or delegates to
    /// a preset.
    #[must_use]
    pub const fn is_bespoke(&self) -> bool {
        !self.entities.is_empty()
    }
}

impl ValidateNode for Tenant {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.slug.is_empty() {
            err!(errs, "tenant slug is empty");
        }
        if self.slug.len() > MAX_SLUG_LEN {
            err!(
                errs,
                "tenant slug '{}' exceeds max length {MAX_SLUG_LEN}",
                self.slug
            );
        }

        // Slugs are stored normalized; resolution lowercases and trims input
        // before lookup, so a non-normalized slug could never match.
        if self.slug != self.slug.trim() || self.slug.chars().any(|c| c.is_ascii_uppercase()) {
            err!(
                errs,
                "tenant slug '{}' must be lowercase and trimmed",
                self.slug
            );
        }

        if self.label.is_empty() {
            err!(errs, "tenant '{}' label is empty", self.slug);
        }

        for (i, key) in self.entities.iter().enumerate() {
            if self.entities[..i].contains(key) {
                err!(errs, "entity '{key}' enabled twice");
            }
        }

        for tile in self.kpis {
            if self.is_bespoke() && !self.entities.contains(&tile.entity) {
                err!(errs, "kpi tile references disabled entity '{}'", tile.entity);
            }
            if let Err(tree) = tile.validate() {
                errs.merge_at(tile.entity.to_string(), tree);
            }
        }

        errs.result()
    }
}

///
/// TESTS
///
