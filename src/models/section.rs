use serde::{Deserialize, Serialize};

use super::SectionId;
use crate::strings;

/// One section of a course as seen by the requesting user.
///
/// `user_visible` is computed by the module-info provider: visibility AND
/// availability for this user (managers may see more than students).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionInfo {
    pub id: SectionId,
    /// Ordering index; 0 is the "general" section and always exists.
    pub index: u32,
    pub name: Option<String>,
    pub summary: String,
    pub visible: bool,
    pub available: bool,
    pub available_info: Option<String>,
    pub user_visible: bool,
}

impl SectionInfo {
    /// Display name, falling back to the generated default when unnamed.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ if self.index == 0 => strings::SECTION0_NAME.to_string(),
            _ => format!("{} {}", strings::SECTION_NAME, self.index),
        }
    }

    pub fn has_available_info(&self) -> bool {
        self.available_info.as_deref().is_some_and(|s| !s.is_empty())
    }
}
