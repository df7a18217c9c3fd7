//! End-to-end scenarios against the built-in catalog.

use crmkit::{
    Experience, ListQuery, Record, ResolveOptions, StageFilter, Value, catalog, list_view,
    profile_view, resolve, resolve_with, route,
};
use crmkit_core::{
    list::EmptyState,
    profile::{PipelineProgress, ProfileTab, StageState},
};
use crmkit_schema::prelude::EntityKey;
use std::collections::BTreeMap;

fn setup() {
    catalog::install().expect("catalog installs");
}

#[test]
fn routing_scenarios() {
    setup();

    assert_eq!(route("gasmask").expect("route"), Experience::Legacy);
    assert_eq!(route("toptier").expect("route"), Experience::Partner);
    assert_eq!(route("acme-wholesale").expect("route"), Experience::Generic);
}

#[test]
fn routing_normalizes_case_and_whitespace() {
    setup();

    let canonical = route("gasmask").expect("route");
    assert_eq!(route("GASMASK").expect("route"), canonical);
    assert_eq!(route(" gasmask ").expect("route"), canonical);
}

#[test]
fn unmapped_slug_resolves_to_a_non_empty_default() {
    setup();

    let bp = resolve("acme-wholesale").expect("resolve");

    assert!(bp.is_fallback());
    assert!(!bp.enabled.is_empty());
    for key in &bp.enabled {
        assert!(bp.entity(*key).is_some());
    }
}

#[test]
fn empty_slug_resolves_to_the_default() {
    setup();

    let bp = resolve("").expect("resolve");
    assert!(bp.is_fallback());
    assert!(!bp.enabled.is_empty());
}

#[test]
fn known_tenants_resolve_their_own_blueprints() {
    setup();

    let gasmask = resolve("gasmask").expect("resolve");
    assert!(!gasmask.is_fallback());
    assert!(gasmask.is_enabled(EntityKey::Campaign));
    assert!(!gasmask.is_enabled(EntityKey::Loan));

    let toptier = resolve("toptier").expect("resolve");
    assert!(toptier.is_enabled(EntityKey::Loan));
    assert!(toptier.features.media_vault && toptier.features.whatsapp);

    // Category-preset tenant.
    let verdant = resolve("verdant-coffee").expect("resolve");
    assert!(verdant.is_enabled(EntityKey::Wholesaler));
    assert!(verdant.features.whatsapp);
}

#[test]
fn simulation_mode_is_an_explicit_parameter() {
    setup();

    let bp = resolve_with("gasmask", ResolveOptions { simulation: true }).expect("resolve");
    assert!(bp.is_fallback());
}

#[test]
fn contact_pipeline_scenario() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let record: Record = [
        ("id", "c1"),
        ("name", "Omar Haddad"),
        ("status", "qualified"),
    ]
    .into_iter()
    .collect();

    let view = profile_view(&bp, EntityKey::Contact, &record).expect("profile");

    assert!(view.tabs.contains(&ProfileTab::Pipeline));
    let PipelineProgress::Stages(stages) = view.progress else {
        panic!("expected stage progress");
    };

    // new and contacted precede qualified; won and lost follow it.
    assert_eq!(stages[0].state, StageState::Completed);
    assert_eq!(stages[1].state, StageState::Completed);
    assert_eq!(stages[2].state, StageState::Active);
    assert_eq!(stages[3].state, StageState::Upcoming);
    assert_eq!(stages[4].state, StageState::Upcoming);
}

#[test]
fn list_filtering_end_to_end() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let rows: Vec<Record> = vec![
        [("id", "c1"), ("name", "Dana Reyes"), ("status", "new")]
            .into_iter()
            .collect(),
        [("id", "c2"), ("name", "Omar Haddad"), ("status", "won")]
            .into_iter()
            .collect(),
    ];

    let query = ListQuery {
        search: Some("dana".to_string()),
        stage: StageFilter::All,
    };
    let view = list_view(&bp, EntityKey::Contact, &rows, &query).expect("list");

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.empty, EmptyState::Populated);
    assert_eq!(view.stage_counts.len(), 5);

    let no_match = ListQuery {
        search: Some("nobody".to_string()),
        stage: StageFilter::All,
    };
    let view = list_view(&bp, EntityKey::Contact, &rows, &no_match).expect("list");
    assert_eq!(view.empty, EmptyState::NoMatches);
}

#[test]
fn disabled_entity_maps_to_a_disabled_error() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let rows: Vec<Record> = Vec::new();

    let err = list_view(&bp, EntityKey::Loan, &rows, &ListQuery::default())
        .expect_err("loan is disabled for gasmask");
    assert!(err.is_disabled());
}

#[test]
fn kpi_tiles_join_external_counts() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let counts = BTreeMap::from([(EntityKey::Contact, 42), (EntityKey::Campaign, 3)]);

    let tiles = bp.kpi_counts(&counts);
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[0].count, 42);
    assert_eq!(tiles[1].count, 3);
}

#[test]
fn blueprints_serialize_for_the_ui_layer() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let json = serde_json::to_value(&bp).expect("serialize");

    assert_eq!(json["slug"], "gasmask");
    assert!(json["enabled"].is_array());
}

#[test]
fn boundary_calls_are_counted() {
    setup();

    // Counters are thread-local, so this test observes only its own calls.
    crmkit::obs::obs_reset();

    resolve("gasmask").expect("resolve");
    resolve("acme-wholesale").expect("resolve");
    route("toptier").expect("route");

    let report = crmkit::obs::obs_report();
    assert_eq!(report.ops.resolve_hits, 1);
    assert_eq!(report.ops.resolve_fallbacks, 1);
    assert_eq!(report.ops.route_partner, 1);
}

#[test]
fn overview_rows_render_scalars_only() {
    setup();

    let bp = resolve("gasmask").expect("resolve");
    let mut record: Record = [("id", "c1"), ("name", "Dana Reyes"), ("status", "new")]
        .into_iter()
        .collect();
    record.insert("tags", Value::List(vec![Value::Text("vip".to_string())]));

    let view = profile_view(&bp, EntityKey::Contact, &record).expect("profile");

    assert!(view.overview.iter().all(|row| row.key != "id"));
    assert!(view.overview.iter().all(|row| row.key != "tags"));
    assert!(view.overview.iter().any(|row| row.key == "name"));
}
