use crate::{
    error::InternalError,
    resolve::Blueprint,
    value::{Record, Value},
};
use crmkit_schema::prelude::*;
use serde::{Deserialize, Serialize};

///
/// StageFilter
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum StageFilter {
    /// Unfiltered sentinel.
    #[default]
    All,
    Stage(String),
}

impl StageFilter {
    /// Stage-click toggle: selecting the active stage clears the filter.
    #[must_use]
    pub fn toggle(self, value: &str) -> Self {
        match self {
            Self::Stage(current) if current == value => Self::All,
            _ => Self::Stage(value.to_string()),
        }
    }

    fn matches(&self, status: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Stage(value) => status == Some(value.as_str()),
        }
    }
}

///
/// ListQuery
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub stage: StageFilter,
}

impl ListQuery {
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            stage: StageFilter::All,
        }
    }

    pub fn toggle_stage(&mut self, value: &str) {
        self.stage = std::mem::take(&mut self.stage).toggle(value);
    }
}

///
/// EmptyState
///
/// "Nothing here yet" and "your filters matched nothing" get different
/// guidance text, so the builder distinguishes them.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum EmptyState {
    NoMatches,
    NoRecords,
    Populated,
}

///
/// StageCount
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct StageCount {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    pub selected: bool,
}

///
/// ListView
///

#[derive(Clone, Debug, Serialize)]
pub struct ListView<'a> {
    pub entity: &'static Entity,
    pub rows: Vec<&'a Record>,
    pub stage_counts: Vec<StageCount>,
    pub empty: EmptyState,
}

/// Build the filterable list view-model for one entity type.
///
/// Search applies first; stage counts are computed over the searched set so
/// the Kanban header stays stable while a stage filter toggles on and off.
pub fn build_list<'a>(
    blueprint: &Blueprint,
    key: EntityKey,
    rows: &'a [Record],
    query: &ListQuery,
) -> Result<ListView<'a>, InternalError> {
    let entity = blueprint
        .entity(key)
        .ok_or_else(|| InternalError::view_disabled(key))?;

    let searched: Vec<&Record> = rows
        .iter()
        .filter(|record| matches_search(entity, record, query.search.as_deref()))
        .collect();

    let stage_counts = blueprint
        .pipeline(key)
        .map(|pipeline| stage_counts(pipeline, &searched, &query.stage))
        .unwrap_or_default();

    let filtered: Vec<&Record> = searched
        .into_iter()
        .filter(|record| query.stage.matches(record.status()))
        .collect();

    let empty = if rows.is_empty() {
        EmptyState::NoRecords
    } else if filtered.is_empty() {
        EmptyState::NoMatches
    } else {
        EmptyState::Populated
    };

    Ok(ListView {
        entity,
        rows: filtered,
        stage_counts,
        empty,
    })
}

// Free-text search: case-insensitive substring over text values of fields
// the schema declares. Not tokenized.
fn matches_search(entity: &Entity, record: &Record, term: Option<&str>) -> bool {
    let Some(term) = term else {
        return true;
    };
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }

    entity.fields.iter().any(|field| {
        field.ty.is_textual()
            && record
                .get(field.key)
                .and_then(Value::as_text)
                .is_some_and(|text| text.to_lowercase().contains(&term))
    })
}

fn stage_counts(pipeline: &Pipeline, searched: &[&Record], filter: &StageFilter) -> Vec<StageCount> {
    pipeline
        .stages
        .iter()
        .map(|stage| StageCount {
            value: stage.value,
            label: stage.label,
            color: stage.color,
            count: searched
                .iter()
                .filter(|r| r.status() == Some(stage.value))
                .count(),
            selected: *filter == StageFilter::Stage(stage.value.to_string()),
        })
        .collect()
}

///
/// TESTS
///
