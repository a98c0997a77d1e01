//! In-memory implementation of all four collaborator seams.
//!
//! Backs the demo binary (seeded from `data/seed/course.json`) and the test
//! suite. Section and activity rows are stored with their raw flags and
//! projected per requesting user on every query, so the formatter always
//! receives records with `user_visible` already computed.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use super::{
    AvailabilityEvaluator, CapabilityChecker, CompletionTracker, ModuleInfoProvider,
    ProviderError, Scope,
};
use crate::auth::capability::{self, Capabilities};
use crate::models::{
    CompletionState, CompletionTracking, Course, CourseModule, ModuleId, SectionId, SectionInfo,
    UserId,
};

fn default_true() -> bool {
    true
}

/// Section row with raw flags, before per-user projection.
#[derive(Debug, Clone, Deserialize)]
pub struct SectionRecord {
    pub id: SectionId,
    pub index: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub available_info: Option<String>,
}

impl SectionRecord {
    pub fn new(index: u32, name: &str) -> Self {
        SectionRecord {
            id: 1000 + index as SectionId,
            index,
            name: (!name.is_empty()).then(|| name.to_string()),
            summary: String::new(),
            visible: true,
            available: true,
            available_info: None,
        }
    }
}

/// Activity row with raw flags, before per-user projection.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleRecord {
    pub id: ModuleId,
    pub section: u32,
    pub mod_type: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub after_link: Option<String>,
    #[serde(default)]
    pub after_edit_icons: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub available_info: Option<String>,
    #[serde(default)]
    pub indent: u32,
    #[serde(default)]
    pub stealth: bool,
    #[serde(default)]
    pub completion: CompletionTracking,
}

impl ModuleRecord {
    pub fn new(id: ModuleId, section: u32, mod_type: &str, name: &str) -> Self {
        ModuleRecord {
            id,
            section,
            mod_type: mod_type.to_string(),
            name: name.to_string(),
            url: Some(format!("/mod/{mod_type}/view?id={id}")),
            content: String::new(),
            after_link: None,
            after_edit_icons: None,
            visible: true,
            available: true,
            available_info: None,
            indent: 0,
            stealth: false,
            completion: CompletionTracking::None,
        }
    }
}

/// Availability rule attached to an activity. The formatter never inspects
/// rules; it only receives their rendered descriptions.
#[derive(Debug, Clone)]
pub enum AvailabilityRule {
    FromDate(NaiveDate),
    GradeAbove { item: String, percent: u32 },
    GroupMember { group: String },
    CompletionOf { module: ModuleId, name: String },
}

impl AvailabilityRule {
    pub fn description(&self) -> String {
        match self {
            AvailabilityRule::FromDate(date) => format!(
                "Not available unless: It is on or after {}",
                date.format("%-d %B %Y")
            ),
            AvailabilityRule::GradeAbove { item, percent } => {
                format!("Not available unless: You achieve at least {percent}% in {item}")
            }
            AvailabilityRule::GroupMember { group } => {
                format!("Not available unless: You belong to {group}")
            }
            AvailabilityRule::CompletionOf { name, .. } => {
                format!("Not available unless: The activity {name} is marked complete")
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RuleRecord {
    FromDate { date: String },
    GradeAbove { item: String, percent: u32 },
    GroupMember { group: String },
    CompletionOf { module: ModuleId, name: String },
}

#[derive(Debug, Clone, Deserialize)]
struct RestrictionRecord {
    module: ModuleId,
    rule: RuleRecord,
}

#[derive(Debug, Clone, Deserialize)]
struct GrantRecord {
    user: UserId,
    capabilities: String,
}

#[derive(Debug, Clone, Deserialize)]
struct StateRecord {
    user: UserId,
    module: ModuleId,
    state: CompletionState,
}

#[derive(Debug, Deserialize)]
struct Seed {
    course: Course,
    default_user: UserId,
    #[serde(default)]
    grants: Vec<GrantRecord>,
    sections: Vec<SectionRecord>,
    #[serde(default)]
    modules: Vec<ModuleRecord>,
    #[serde(default)]
    completion_states: Vec<StateRecord>,
    #[serde(default)]
    restrictions: Vec<RestrictionRecord>,
}

/// One course held in memory, answering every collaborator query.
pub struct InMemoryCourse {
    course: Course,
    sections: Vec<SectionRecord>,
    modules: Vec<ModuleRecord>,
    grants: HashMap<UserId, Capabilities>,
    states: HashMap<(UserId, ModuleId), CompletionState>,
    restrictions: HashMap<ModuleId, AvailabilityRule>,
    default_user: UserId,
}

impl InMemoryCourse {
    pub fn new(course: Course, default_user: UserId) -> Self {
        InMemoryCourse {
            course,
            sections: Vec::new(),
            modules: Vec::new(),
            grants: HashMap::new(),
            states: HashMap::new(),
            restrictions: HashMap::new(),
            default_user,
        }
    }

    pub fn from_seed(json: &str) -> Result<Self, ProviderError> {
        let seed: Seed = serde_json::from_str(json)
            .map_err(|e| ProviderError::new(format!("bad course seed: {e}")))?;
        let mut store = InMemoryCourse::new(seed.course, seed.default_user);
        for grant in seed.grants {
            store.grant(grant.user, &grant.capabilities);
        }
        for section in seed.sections {
            store.add_section(section);
        }
        for module in seed.modules {
            store.add_module(module);
        }
        for state in seed.completion_states {
            store.set_completion_state(state.user, state.module, state.state);
        }
        for restriction in seed.restrictions {
            let rule = match restriction.rule {
                RuleRecord::FromDate { date } => {
                    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                        ProviderError::new(format!("bad restriction date {date:?}: {e}"))
                    })?;
                    AvailabilityRule::FromDate(date)
                }
                RuleRecord::GradeAbove { item, percent } => {
                    AvailabilityRule::GradeAbove { item, percent }
                }
                RuleRecord::GroupMember { group } => AvailabilityRule::GroupMember { group },
                RuleRecord::CompletionOf { module, name } => {
                    AvailabilityRule::CompletionOf { module, name }
                }
            };
            store.restrict(restriction.module, rule);
        }
        Ok(store)
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn default_user(&self) -> UserId {
        self.default_user
    }

    pub fn module_name(&self, id: ModuleId) -> Option<&str> {
        self.modules
            .iter()
            .find(|m| m.id == id)
            .map(|m| m.name.as_str())
    }

    pub fn add_section(&mut self, section: SectionRecord) {
        self.sections.push(section);
        self.sections.sort_by_key(|s| s.index);
    }

    pub fn add_module(&mut self, module: ModuleRecord) {
        self.modules.push(module);
    }

    pub fn grant(&mut self, user: UserId, capabilities_csv: &str) {
        self.grants
            .insert(user, Capabilities::from_csv(capabilities_csv));
    }

    pub fn set_completion_state(&mut self, user: UserId, module: ModuleId, state: CompletionState) {
        self.states.insert((user, module), state);
    }

    pub fn restrict(&mut self, module: ModuleId, rule: AvailabilityRule) {
        self.restrictions.insert(module, rule);
    }

    fn user_can(&self, user: UserId, cap: &str) -> bool {
        self.grants.get(&user).is_some_and(|caps| caps.has(cap))
    }

    fn project_section(&self, section: &SectionRecord, user: UserId) -> SectionInfo {
        let user_visible = (section.visible && section.available)
            || self.user_can(user, capability::VIEW_HIDDEN_SECTIONS);
        SectionInfo {
            id: section.id,
            index: section.index,
            name: section.name.clone(),
            summary: section.summary.clone(),
            visible: section.visible,
            available: section.available,
            available_info: section.available_info.clone(),
            user_visible,
        }
    }

    fn project_module(&self, module: &ModuleRecord, user: UserId) -> CourseModule {
        let manager = self.user_can(user, capability::VIEW_HIDDEN_ACTIVITIES);
        let user_visible = if module.stealth {
            manager
        } else {
            (module.visible && module.available) || manager
        };
        CourseModule {
            id: module.id,
            section: module.section,
            mod_type: module.mod_type.clone(),
            name: module.name.clone(),
            url: module.url.clone(),
            content: module.content.clone(),
            after_link: module.after_link.clone(),
            after_edit_icons: module.after_edit_icons.clone(),
            visible: module.visible,
            user_visible,
            available_info: module.available_info.clone(),
            indent: module.indent,
            stealth: module.stealth,
        }
    }
}

impl ModuleInfoProvider for InMemoryCourse {
    fn sections(&self, _course: &Course, user: UserId) -> Result<Vec<SectionInfo>, ProviderError> {
        Ok(self
            .sections
            .iter()
            .map(|s| self.project_section(s, user))
            .collect())
    }

    fn section_modules(
        &self,
        _course: &Course,
        section: u32,
        user: UserId,
    ) -> Result<Vec<CourseModule>, ProviderError> {
        Ok(self
            .modules
            .iter()
            .filter(|m| m.section == section)
            .map(|m| self.project_module(m, user))
            .collect())
    }
}

impl CompletionTracker for InMemoryCourse {
    fn tracking_mode(
        &self,
        _course: &Course,
        module: &CourseModule,
    ) -> Result<CompletionTracking, ProviderError> {
        Ok(self
            .modules
            .iter()
            .find(|m| m.id == module.id)
            .map(|m| m.completion)
            .unwrap_or_default())
    }

    fn completion_state(
        &self,
        user: UserId,
        module: &CourseModule,
    ) -> Result<CompletionState, ProviderError> {
        Ok(self
            .states
            .get(&(user, module.id))
            .copied()
            .unwrap_or_default())
    }
}

impl AvailabilityEvaluator for InMemoryCourse {
    fn available_for_all(&self, module: &CourseModule) -> Result<bool, ProviderError> {
        Ok(!self.restrictions.contains_key(&module.id))
    }

    fn full_information(&self, module: &CourseModule) -> Result<Option<String>, ProviderError> {
        Ok(self
            .restrictions
            .get(&module.id)
            .map(AvailabilityRule::description))
    }

    fn completion_value_used(
        &self,
        _course: &Course,
        module: ModuleId,
    ) -> Result<bool, ProviderError> {
        Ok(self.restrictions.values().any(
            |rule| matches!(rule, AvailabilityRule::CompletionOf { module: m, .. } if *m == module),
        ))
    }
}

impl CapabilityChecker for InMemoryCourse {
    // Grants are course-wide here; module scope resolves to the owning course.
    fn has_capability(&self, user: UserId, capability: &str, _scope: Scope) -> bool {
        self.user_can(user, capability)
    }
}
