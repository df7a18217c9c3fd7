use crmkit_schema::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

///
/// ResolveOptions
///
/// Explicit resolution parameters. Simulation mode forces the general
/// fallback so demo surfaces render tenant-neutral data; it is threaded
/// through as an argument rather than ambient state so resolution stays a
/// pure function of its inputs.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ResolveOptions {
    pub simulation: bool,
}

///
/// Blueprint
///
/// The resolved, tenant-specific configuration bundle: which entity types
/// are live, their schemas and pipelines, the feature toggles, and the KPI
/// tile layout. Computed fresh per resolution; no mutable state.
///

#[derive(Clone, Debug, Serialize)]
pub struct Blueprint {
    pub slug: String,
    pub tenant: Option<&'static Tenant>,
    pub enabled: Vec<EntityKey>,
    pub features: Features,
    pub kpis: &'static [KpiTile],

    entities: BTreeMap<EntityKey, &'static Entity>,
    pipelines: BTreeMap<EntityKey, &'static Pipeline>,
}

impl Blueprint {
    #[must_use]
    pub fn is_enabled(&self, key: EntityKey) -> bool {
        self.enabled.contains(&key)
    }

    #[must_use]
    pub fn entity(&self, key: EntityKey) -> Option<&'static Entity> {
        self.entities.get(&key).copied()
    }

    #[must_use]
    pub fn pipeline(&self, key: EntityKey) -> Option<&'static Pipeline> {
        self.pipelines.get(&key).copied()
    }

    /// Whether this blueprint came from the general fallback rather than a
    /// tenant definition.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.tenant.is_none()
    }

    /// Join externally fetched counts onto the KPI tile layout. Tiles with
    /// no count entry show zero rather than disappearing.
    #[must_use]
    pub fn kpi_counts(&self, counts: &BTreeMap<EntityKey, u64>) -> Vec<KpiCount> {
        self.kpis
            .iter()
            .map(|tile| KpiCount {
                tile,
                count: counts.get(&tile.entity).copied().unwrap_or(0),
            })
            .collect()
    }
}

///
/// KpiCount
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct KpiCount {
    pub tile: &'static KpiTile,
    pub count: u64,
}

/// Canonical slug form shared by the resolver and the router.
#[must_use]
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_ascii_lowercase()
}

/// Resolve a tenant slug to its blueprint with default options.
#[must_use]
pub fn resolve(registry: &Registry, slug: &str) -> Blueprint {
    resolve_with(registry, slug, ResolveOptions::default())
}

/// Resolve a tenant slug to its blueprint.
///
/// Pure: a function of the slug, the options, and the registry tables. An
/// unmapped (or empty) slug resolves to the general preset; absence of a
/// mapping is fallback behavior, not an error.
#[must_use]
pub fn resolve_with(registry: &Registry, slug: &str, options: ResolveOptions) -> Blueprint {
    let slug = normalize_slug(slug);

    let tenant = if options.simulation {
        None
    } else {
        registry.tenant(&slug)
    };

    let (enabled, features, kpis) = match tenant {
        Some(tenant) if tenant.is_bespoke() => {
            (tenant.entities.to_vec(), tenant.features, tenant.kpis)
        }

        // Preset-delegating tenant: entity list and tiles come from the
        // category preset (or the general preset), toggles from the tenant.
        Some(tenant) => {
            let preset = tenant
                .category
                .and_then(|c| registry.preset(c))
                .or_else(|| registry.general_preset());

            match preset {
                Some(preset) => (preset.entities.to_vec(), tenant.features, preset.kpis),
                None => (Vec::new(), tenant.features, &[] as &[KpiTile]),
            }
        }

        None => match registry.general_preset() {
            Some(preset) => (preset.entities.to_vec(), preset.features, preset.kpis),
            None => (Vec::new(), Features::NONE, &[] as &[KpiTile]),
        },
    };

    let entities: BTreeMap<EntityKey, &'static Entity> = enabled
        .iter()
        .filter_map(|key| registry.entity(*key).map(|e| (*key, e)))
        .collect();

    let pipelines: BTreeMap<EntityKey, &'static Pipeline> = enabled
        .iter()
        .filter_map(|key| registry.pipeline(*key).map(|p| (*key, p)))
        .collect();

    Blueprint {
        slug,
        tenant,
        enabled,
        features,
        kpis,
        entities,
        pipelines,
    }
}

///
/// TESTS
///
