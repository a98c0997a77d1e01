use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Course, CourseModule, ModuleId, UserId};
use crate::providers::{CompletionTracker, ProviderError};

/// Per-activity completion tracking configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTracking {
    #[default]
    None,
    /// The user ticks the activity off themselves.
    Manual,
    /// The system marks the activity according to conditions.
    Automatic,
}

/// A user's completion state for one activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    #[default]
    Incomplete,
    Complete,
    CompletePass,
    CompleteFail,
}

impl CompletionState {
    /// Wire code posted by the completion toggle form.
    pub fn code(self) -> u8 {
        match self {
            CompletionState::Incomplete => 0,
            CompletionState::Complete => 1,
            CompletionState::CompletePass => 2,
            CompletionState::CompleteFail => 3,
        }
    }
}

/// Request-scoped cache over the completion tracker.
///
/// Created once per page build and passed by reference into each activity's
/// completion computation so no module is looked up twice. Holds no invariant
/// beyond "represents completion answers for this course, populated lazily".
pub struct CompletionInfo<'a> {
    course: &'a Course,
    tracker: &'a dyn CompletionTracker,
    modes: HashMap<ModuleId, CompletionTracking>,
    states: HashMap<ModuleId, CompletionState>,
}

impl<'a> CompletionInfo<'a> {
    pub fn new(course: &'a Course, tracker: &'a dyn CompletionTracker) -> Self {
        CompletionInfo {
            course,
            tracker,
            modes: HashMap::new(),
            states: HashMap::new(),
        }
    }

    /// Tracking mode for one activity; `None` whenever the course-level
    /// switch is off, regardless of the activity's own configuration.
    pub fn mode(&mut self, module: &CourseModule) -> Result<CompletionTracking, ProviderError> {
        if !self.course.completion_enabled {
            return Ok(CompletionTracking::None);
        }
        if let Some(mode) = self.modes.get(&module.id) {
            return Ok(*mode);
        }
        let mode = self.tracker.tracking_mode(self.course, module)?;
        self.modes.insert(module.id, mode);
        Ok(mode)
    }

    /// The requesting user's completion state for one activity.
    pub fn state(
        &mut self,
        user: UserId,
        module: &CourseModule,
    ) -> Result<CompletionState, ProviderError> {
        if let Some(state) = self.states.get(&module.id) {
            return Ok(*state);
        }
        let state = self.tracker.completion_state(user, module)?;
        self.states.insert(module.id, state);
        Ok(state)
    }
}
