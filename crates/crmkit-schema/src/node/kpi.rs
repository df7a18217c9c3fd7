use crate::prelude::*;

///
/// KpiTile
///
/// One dashboard count tile. The count itself comes from an external
/// aggregator at render time; the tile only names what to count.
///

#[derive(Clone, Debug, Serialize)]
pub struct KpiTile {
    pub entity: EntityKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

impl ValidateNode for KpiTile {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.label.is_empty() {
            err!(errs, "kpi tile for '{}' has an empty label", self.entity);
        }

        errs.result()
    }
}
