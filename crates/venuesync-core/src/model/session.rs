// ── Session flags ──
//
// The web client keeps these as two loose localStorage strings
// (`isLoggedIn` = "true"/"false", `userType` = "guest"/"host").
// The string forms are preserved at the storage boundary.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which side of the marketplace the device is acting as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    #[default]
    Guest,
    Host,
}

/// Per-device session state. There is no authentication behind this --
/// it is a pair of UI flags and nothing more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub role: UserRole,
}

impl Session {
    /// Decode from the persisted flag strings. Anything other than the
    /// literal `"true"` counts as logged out; an unparseable role
    /// degrades to guest.
    pub fn from_flags(logged_in: Option<&str>, role: Option<&str>) -> Self {
        Self {
            logged_in: logged_in == Some("true"),
            role: role.and_then(|r| r.parse().ok()).unwrap_or_default(),
        }
    }

    /// The persisted flag strings, in (`isLoggedIn`, `userType`) order.
    pub fn to_flags(self) -> (String, String) {
        (self.logged_in.to_string(), self.role.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip() {
        let session = Session { logged_in: true, role: UserRole::Host };
        let (logged_in, role) = session.to_flags();
        assert_eq!(logged_in, "true");
        assert_eq!(role, "host");
        assert_eq!(Session::from_flags(Some(&logged_in), Some(&role)), session);
    }

    #[test]
    fn garbage_flags_degrade_to_logged_out_guest() {
        let session = Session::from_flags(Some("yes"), Some("admin"));
        assert!(!session.logged_in);
        assert_eq!(session.role, UserRole::Guest);
    }

    #[test]
    fn absent_flags_default() {
        assert_eq!(Session::from_flags(None, None), Session::default());
    }
}
