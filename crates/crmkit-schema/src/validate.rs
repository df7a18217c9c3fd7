//! Registry validation orchestration and cross-node invariants.

use crate::prelude::*;

/// Run full registry validation in a staged, deterministic order.
pub fn validate_registry(registry: &Registry) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(registry);

    // Phase 2: enforce registry-wide invariants.
    validate_global(registry, &mut errors);

    errors.result()
}

// Validate all nodes, grouping failures under stable route keys.
fn validate_nodes(registry: &Registry) -> ErrorTree {
    let mut errs = ErrorTree::new();

    for entity in registry.entities() {
        if let Err(tree) = entity.validate() {
            errs.merge_at(format!("entity.{}", entity.key), tree);
        }
    }
    for pipeline in registry.pipelines() {
        if let Err(tree) = pipeline.validate() {
            errs.merge_at(format!("pipeline.{}", pipeline.entity), tree);
        }
    }
    for preset in registry.presets() {
        if let Err(tree) = preset.validate() {
            errs.merge_at(format!("preset.{}", preset.category), tree);
        }
    }
    for tenant in registry.tenants() {
        if let Err(tree) = tenant.validate() {
            errs.merge_at(format!("tenant.{}", tenant.slug), tree);
        }
    }

    errs
}

// Run global validation passes that require a full registry view.
fn validate_global(registry: &Registry, errs: &mut ErrorTree) {
    validate_fallback(registry, errs);
    validate_pipeline_status(registry, errs);
    validate_enabled_entities(registry, errs);
    validate_routing_lists(registry, errs);
}

// The unmapped-slug fallback must exist and resolve to a non-empty schema set.
fn validate_fallback(registry: &Registry, errs: &mut ErrorTree) {
    match registry.general_preset() {
        Some(preset) => {
            for key in preset.entities {
                if registry.entity(*key).is_none() {
                    err!(errs, "general preset enables unknown entity '{key}'");
                }
            }
        }
        None => err!(errs, "no general preset registered; fallback would be empty"),
    }
}

// Every pipeline needs a registered entity with a Select-typed status field,
// otherwise stage values have no domain to match against.
fn validate_pipeline_status(registry: &Registry, errs: &mut ErrorTree) {
    for pipeline in registry.pipelines() {
        let key = pipeline.entity;

        let Some(entity) = registry.entity(key) else {
            err!(errs, "pipeline registered for unknown entity '{key}'");
            continue;
        };

        match entity.status_field() {
            Some(field) if field.ty == FieldType::Select => {}
            Some(field) => err!(
                errs,
                "entity '{key}' has a pipeline but its '{STATUS_FIELD}' field is {}, not Select",
                field.ty
            ),
            None => err!(
                errs,
                "entity '{key}' has a pipeline but no '{STATUS_FIELD}' field"
            ),
        }
    }
}

// Presets and bespoke tenants may only enable registered entities.
fn validate_enabled_entities(registry: &Registry, errs: &mut ErrorTree) {
    for preset in registry.presets() {
        for key in preset.entities {
            if registry.entity(*key).is_none() {
                err!(
                    errs,
                    "preset '{}' enables unknown entity '{key}'",
                    preset.category
                );
            }
        }
    }

    for tenant in registry.tenants() {
        for key in tenant.entities {
            if registry.entity(*key).is_none() {
                err!(
                    errs,
                    "tenant '{}' enables unknown entity '{key}'",
                    tenant.slug
                );
            }
        }

        if let Some(category) = tenant.category
            && registry.preset(category).is_none()
        {
            err!(
                errs,
                "tenant '{}' references category '{category}' with no preset",
                tenant.slug
            );
        }
    }
}

// The router resolves Legacy before Partner, so an overlap would shadow the
// partner entry silently. Reject it at build time instead.
fn validate_routing_lists(registry: &Registry, errs: &mut ErrorTree) {
    for slug in registry.legacy_slugs() {
        if registry.is_partner(slug) {
            err!(errs, "slug '{slug}' is in both routing lists");
        }
    }
}

///
/// TESTS
///
