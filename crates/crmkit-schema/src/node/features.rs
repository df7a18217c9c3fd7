use crate::prelude::*;

///
/// Features
///
/// Orthogonal UI toggles carried on presets and tenants. No invariants
/// hold between them; each gates one optional section independently.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Features {
    pub pipeline: bool,
    pub media_vault: bool,
    pub whatsapp: bool,
    pub campaigns: bool,
    pub kpi_tiles: bool,
}

impl Features {
    pub const NONE: Self = Self {
        pipeline: false,
        media_vault: false,
        whatsapp: false,
        campaigns: false,
        kpi_tiles: false,
    };

    pub const ALL: Self = Self {
        pipeline: true,
        media_vault: true,
        whatsapp: true,
        campaigns: true,
        kpi_tiles: true,
    };
}

impl ValidateNode for Features {}
