use crate::prelude::*;

///
/// Pipeline
///
/// Ordered status progression for one entity type. Order defines display
/// and progress rendering only; any status may jump to any other.
///

#[derive(Clone, Debug, Serialize)]
pub struct Pipeline {
    pub entity: EntityKey,
    pub stages: &'static [Stage],
}

impl Pipeline {
    /// Position of a status value in the progression.
    #[must_use]
    pub fn stage_index(&self, value: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.value == value)
    }

    #[must_use]
    pub fn get(&self, value: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.value == value)
    }
}

impl ValidateNode for Pipeline {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.stages.is_empty() {
            err!(errs, "pipeline for '{}' has no stages", self.entity);
        }

        for (i, stage) in self.stages.iter().enumerate() {
            if stage.value.is_empty() {
                err!(errs, "stage {i} has an empty value");
            }
            if self.stages[..i].iter().any(|s| s.value == stage.value) {
                err!(errs, "duplicate stage value '{}'", stage.value);
            }
        }

        errs.result()
    }
}

///
/// Stage
///

#[derive(Clone, Debug, Serialize)]
pub struct Stage {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

///
/// TESTS
///
