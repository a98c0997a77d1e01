use actix_session::Session;

use crate::models::{ModuleId, UserId};

pub fn get_user_id(session: &Session) -> Option<UserId> {
    session.get::<UserId>("user_id").unwrap_or(None)
}

/// Editing mode is a per-session flag toggled through the page's own
/// `?edit=on|off` links.
pub fn is_editing(session: &Session) -> bool {
    session.get::<bool>("editing").unwrap_or(None).unwrap_or(false)
}

pub fn set_editing(session: &Session, on: bool) {
    let _ = session.insert("editing", on);
}

/// Id of the activity currently held on the move clipboard, if any.
///
/// Set by the (out-of-scope) move endpoint; the course page only reads it to
/// render the clipboard notice and the "move here" targets.
pub fn moving_activity(session: &Session) -> Option<ModuleId> {
    session.get::<ModuleId>("activity_copy").unwrap_or(None)
}
