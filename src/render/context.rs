use crate::models::{ModuleId, UserId};
use crate::providers::{CapabilityChecker, Scope};

/// Activity sitting on the move clipboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingActivity {
    pub id: ModuleId,
    pub name: String,
}

/// Everything request-scoped the formatter needs, passed explicitly into
/// every call: requesting user, editing flag, session key for action URLs,
/// and the capability checker.
pub struct RenderContext<'a> {
    pub user: UserId,
    pub editing: bool,
    pub sesskey: String,
    pub caps: &'a dyn CapabilityChecker,
    /// Site-wide switch for the conditional-availability subsystem.
    pub availability_enabled: bool,
    pub moving: Option<MovingActivity>,
    /// URL of the page being rendered; target of the edit-mode toggle.
    pub page_url: String,
}

impl RenderContext<'_> {
    pub fn has_capability(&self, capability: &str, scope: Scope) -> bool {
        self.caps.has_capability(self.user, capability, scope)
    }

    /// Clipboard state only applies while editing.
    pub fn moving(&self) -> Option<&MovingActivity> {
        if self.editing { self.moving.as_ref() } else { None }
    }
}
