use serde::{Deserialize, Serialize};

/// Role a user selects when logging in.
///
/// Stored and transmitted as the display strings below, including the
/// space in "Security Guard".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Student,
    Teacher,
    Admin,
    #[serde(rename = "Security Guard")]
    SecurityGuard,
}

impl Role {
    /// Human-readable label, identical to the wire representation.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::Admin => "Admin",
            Role::SecurityGuard => "Security Guard",
        }
    }

    /// Parse from the string value submitted by the login form.
    pub fn from_str(s: &str) -> Option<Role> {
        match s {
            "Student" => Some(Role::Student),
            "Teacher" => Some(Role::Teacher),
            "Admin" => Some(Role::Admin),
            "Security Guard" => Some(Role::SecurityGuard),
            _ => None,
        }
    }

    /// All valid roles, in display order.
    pub fn all() -> &'static [Role] {
        &[Role::Student, Role::Teacher, Role::Admin, Role::SecurityGuard]
    }
}
