use crate::{error::InternalError, resolve::Blueprint, value::Record};
use convert_case::{Case, Casing};
use crmkit_schema::prelude::*;
use derive_more::Display;
use serde::Serialize;

///
/// ProfileTab
///
/// Optional detail tabs, strictly gated: Pipeline needs the feature flag
/// AND stages for the entity; Media and WhatsApp need their flags.
/// Overview is always present and is not listed here.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum ProfileTab {
    Media,
    Pipeline,
    WhatsApp,
}

///
/// StageState
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum StageState {
    Active,
    Completed,
    Upcoming,
}

///
/// StageProgress
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StageProgress {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub state: StageState,
}

///
/// PipelineProgress
///
/// A status value absent from the stage list degrades to `None` rather
/// than crashing or mis-indexing.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum PipelineProgress {
    None,
    Stages(Vec<StageProgress>),
}

///
/// OverviewRow
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OverviewRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

///
/// ProfileView
///

#[derive(Clone, Debug, Serialize)]
pub struct ProfileView {
    pub entity: &'static Entity,
    pub overview: Vec<OverviewRow>,
    pub tabs: Vec<ProfileTab>,
    pub progress: PipelineProgress,
}

/// Build the tabbed detail view-model for one record.
pub fn build_profile(
    blueprint: &Blueprint,
    key: EntityKey,
    record: &Record,
) -> Result<ProfileView, InternalError> {
    let entity = blueprint
        .entity(key)
        .ok_or_else(|| InternalError::view_disabled(key))?;

    let overview = overview_rows(entity, record);

    let pipeline = blueprint.pipeline(key);
    let mut tabs = Vec::new();
    if blueprint.features.pipeline && pipeline.is_some() {
        tabs.push(ProfileTab::Pipeline);
    }
    if blueprint.features.media_vault {
        tabs.push(ProfileTab::Media);
    }
    if blueprint.features.whatsapp {
        tabs.push(ProfileTab::WhatsApp);
    }

    let progress = if tabs.contains(&ProfileTab::Pipeline) {
        pipeline.map_or(PipelineProgress::None, |p| {
            pipeline_progress(p, record.status())
        })
    } else {
        PipelineProgress::None
    };

    Ok(ProfileView {
        entity,
        overview,
        tabs,
        progress,
    })
}

// Overview rows: schema fields in declaration order, then any extra record
// fields in key order. The identifier and nested values never render.
fn overview_rows(entity: &Entity, record: &Record) -> Vec<OverviewRow> {
    let mut rows = Vec::new();

    for field in entity.fields.iter() {
        if field.key == ID_FIELD {
            continue;
        }
        let Some(value) = record.get(field.key) else {
            continue;
        };
        if !value.is_scalar() {
            continue;
        }

        rows.push(OverviewRow {
            key: field.key.to_string(),
            label: field.label.to_string(),
            value: value.display_text(),
        });
    }

    for key in record.keys() {
        if key == ID_FIELD || entity.fields.contains(key) {
            continue;
        }
        let Some(value) = record.get(key) else {
            continue;
        };
        if !value.is_scalar() {
            continue;
        }

        rows.push(OverviewRow {
            key: key.to_string(),
            label: humanize(key),
            value: value.display_text(),
        });
    }

    rows
}

/// Compute Completed/Active/Upcoming markers for the stage progression.
#[must_use]
pub fn pipeline_progress(pipeline: &Pipeline, status: Option<&str>) -> PipelineProgress {
    let Some(current) = status.and_then(|s| pipeline.stage_index(s)) else {
        return PipelineProgress::None;
    };

    let stages = pipeline
        .stages
        .iter()
        .enumerate()
        .map(|(i, stage)| StageProgress {
            value: stage.value,
            label: stage.label,
            color: stage.color,
            state: match i.cmp(&current) {
                std::cmp::Ordering::Less => StageState::Completed,
                std::cmp::Ordering::Equal => StageState::Active,
                std::cmp::Ordering::Greater => StageState::Upcoming,
            },
        })
        .collect();

    PipelineProgress::Stages(stages)
}

// "signup_source" -> "Signup Source"
fn humanize(key: &str) -> String {
    key.to_case(Case::Title)
}

///
/// TESTS
///
