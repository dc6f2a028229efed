//! User domain types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of account a login belongs to.
///
/// Wire format: the variant name (`"Admin"`, `"Teacher"`, `"Student"`).
/// Storage format: `u8` (0 = Admin, 1 = Teacher, 2 = Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Admin = 0,
    Teacher = 1,
    Student = 2,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::Teacher, Self::Student];

    /// Convert from `u8` storage value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Admin),
            1 => Some(Self::Teacher),
            2 => Some(Self::Student),
            _ => None,
        }
    }

    /// Convert to `u8` storage value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user role: {0}")]
pub struct UnknownUserRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownUserRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Teacher" => Ok(Self::Teacher),
            "Student" => Ok(Self::Student),
            other => Err(UnknownUserRole(other.to_owned())),
        }
    }
}
