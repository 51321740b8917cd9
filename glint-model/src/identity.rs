use glint_types::UserId;
use std::fmt;

/// The authenticated requester, as resolved by the session layer.
///
/// Absence of an identity is represented by `Option<Identity>` at the call
/// sites, never by a sentinel account.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub role: Role,
}

/// Account role.
///
/// Authorization keys on the variant; an account's display name carries no
/// privilege whatever it is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    User,
    Guest,
}

impl Role {
    /// True for the distinguished administrative role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Administrator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Administrator => "Administrator",
            Role::User => "User",
            Role::Guest => "Guest",
        };
        write!(f, "{s}")
    }
}
