//! Seams to the external subsystems the course page depends on.
//!
//! The formatter treats all four as black boxes: it asks, it never decides.
//! Permissions, availability rules, completion rules and section/activity
//! ordering are all owned elsewhere. Any failure behind a seam propagates as
//! a hard error; this is display code with no resilience requirements of its
//! own.

pub mod memory;

use std::fmt;

use crate::models::{
    CompletionState, CompletionTracking, Course, CourseId, CourseModule, ModuleId, SectionInfo,
    UserId,
};

/// Failure reported by any collaborator. Not retried, not suppressed.
#[derive(Debug)]
pub struct ProviderError(pub String);

impl ProviderError {
    pub fn new(msg: impl Into<String>) -> Self {
        ProviderError(msg.into())
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered section and activity records for a course, already projected for
/// the requesting user (`user_visible` computed, restricted info attached).
pub trait ModuleInfoProvider {
    fn sections(&self, course: &Course, user: UserId) -> Result<Vec<SectionInfo>, ProviderError>;

    fn section_modules(
        &self,
        course: &Course,
        section: u32,
        user: UserId,
    ) -> Result<Vec<CourseModule>, ProviderError>;
}

/// Tracking-mode and per-user completion-state queries.
pub trait CompletionTracker {
    fn tracking_mode(
        &self,
        course: &Course,
        module: &CourseModule,
    ) -> Result<CompletionTracking, ProviderError>;

    fn completion_state(
        &self,
        user: UserId,
        module: &CourseModule,
    ) -> Result<CompletionState, ProviderError>;
}

/// Availability-condition queries for staff-facing notices.
pub trait AvailabilityEvaluator {
    /// False when any condition may hide the activity from some students.
    fn available_for_all(&self, module: &CourseModule) -> Result<bool, ProviderError>;

    /// Full description of all conditions on the activity, if any.
    fn full_information(&self, module: &CourseModule) -> Result<Option<String>, ProviderError>;

    /// Whether some availability condition reads this activity's completion
    /// state (the completion toggle must then bypass client-side handling).
    fn completion_value_used(
        &self,
        course: &Course,
        module: ModuleId,
    ) -> Result<bool, ProviderError>;
}

/// Context a capability is checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Course(CourseId),
    Module(ModuleId),
}

/// Boolean permission answers. A missing capability silently omits a view
/// element, never an error.
pub trait CapabilityChecker {
    fn has_capability(&self, user: UserId, capability: &str, scope: Scope) -> bool;
}
