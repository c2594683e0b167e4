//! Test fixtures - reusable catalog documents.

/// Client used throughout the scenarios
pub const CLIENT: &str = "EE:GOV:70000001:registry";

/// Two user services
pub const USERS_V1: &str = r#"{"services": [
    {"code": "getUser", "version": "v1", "title": "Get user", "url": "http://backend/users/get"},
    {"code": "listUsers", "version": "v1", "title": "List users", "url": "http://backend/users/list"}
]}"#;

/// `listUsers` dropped, `deleteUser` added
pub const USERS_V2: &str = r#"{"services": [
    {"code": "getUser", "version": "v1", "title": "Get user", "url": "http://backend/users/get"},
    {"code": "deleteUser", "version": "v1", "title": "Delete user", "url": "http://backend/users/delete"}
]}"#;

/// Collides with `USERS_V1` on `getuser.V1`
pub const COLLIDING: &str = r#"{"services": [
    {"code": "getuser", "version": "V1", "title": "Get user (legacy)", "url": "http://legacy/users"}
]}"#;

/// One entry the structural validator flags (no title)
pub const UNTITLED: &str = r#"{"services": [
    {"code": "ping", "url": "http://backend/ping"}
]}"#;
