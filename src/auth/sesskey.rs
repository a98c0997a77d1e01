use actix_session::Session;
use rand::Rng;

/// Get the session key from the session, or mint a new one.
///
/// The key is embedded in every state-changing URL the course page emits
/// (edit toggle, marker, completion toggle, move targets) and checked by the
/// receiving endpoint.
pub fn get_or_create(session: &Session) -> String {
    if let Ok(Some(key)) = session.get::<String>("sesskey") {
        return key;
    }
    let key = generate();
    let _ = session.insert("sesskey", &key);
    key
}

/// Validate a submitted session key against the one stored in the session.
pub fn validate(session: &Session, submitted: &str) -> bool {
    let stored = session
        .get::<String>("sesskey")
        .unwrap_or(None)
        .unwrap_or_default();
    !stored.is_empty() && constant_time_eq(&stored, submitted)
}

/// Generate a random 32-byte hex key.
fn generate() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
