use crate::prelude::*;

///
/// Preset
///
/// Category-level blueprint content. Tenants without a bespoke entity list
/// resolve through their category's preset; the `General` preset is the
/// fallback for unmapped slugs and must always be installed.
///

#[derive(Clone, Debug, Serialize)]
pub struct Preset {
    pub category: Category,
    pub entities: &'static [EntityKey],
    pub features: Features,
    pub kpis: &'static [KpiTile],
}

impl ValidateNode for Preset {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.entities.is_empty() {
            err!(errs, "preset '{}' enables no entities", self.category);
        }

        for (i, key) in self.entities.iter().enumerate() {
            if self.entities[..i].contains(key) {
                err!(errs, "entity '{key}' enabled twice");
            }
        }

        for tile in self.kpis {
            if !self.entities.contains(&tile.entity) {
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
