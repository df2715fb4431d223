use crate::utils::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A roster member. Exactly one of three shapes, distinguished by the
/// explicit `tag` field on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tag")]
pub enum Member {
    #[serde(rename = "ADMIN")]
    Admin { name: String, kick_count: u32 },
    #[serde(rename = "MEMBER")]
    Regular { name: String, point: u32 },
    #[serde(rename = "GUEST")]
    Guest { name: String, visit_count: u32 },
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Admin { name, .. } => name,
            Member::Regular { name, .. } => name,
            Member::Guest { name, .. } => name,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Member::Admin { .. } => Role::Admin,
            Member::Regular { .. } => Role::User,
            Member::Guest { .. } => Role::Guest,
        }
    }

    /// The per-variant greeting shown when a member signs in.
    pub fn login_message(&self) -> String {
        match self {
            Member::Admin { name, kick_count } => {
                format!("{} has kicked {} member(s) so far", name, kick_count)
            }
            Member::Regular { name, point } => {
                format!("{} has collected {} point(s) so far", name, point)
            }
            Member::Guest { name, visit_count } => {
                format!("{} has visited {} time(s) so far", name, visit_count)
            }
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Member::Admin { .. } => "ADMIN",
            Member::Regular { .. } => "MEMBER",
            Member::Guest { .. } => "GUEST",
        }
    }

    /// The variant's counter: kicks for admins, points for regulars, visits
    /// for guests.
    pub fn count(&self) -> u32 {
        match self {
            Member::Admin { kick_count, .. } => *kick_count,
            Member::Regular { point, .. } => *point,
            Member::Guest { visit_count, .. } => *visit_count,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag(), self.name())
    }
}

/// Role codes carried on the wire. The gaps are deliberate: codes 1..=9 are
/// reserved for future privileged roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin = 0,
    User = 10,
    Guest = 11,
}

impl Role {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Role {
    type Error = RosterError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Role::Admin),
            10 => Ok(Role::User),
            11 => Ok(Role::Guest),
            _ => Err(RosterError::UnknownRoleError { code }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "en")]
    English,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "ko" => Ok(Language::Korean),
            "en" => Ok(Language::English),
            other => Err(RosterError::UnknownLanguageError {
                code: other.to_string(),
            }),
        }
    }
}

/// An article fetched through a [`PostSource`](crate::domain::ports::PostSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// What a member does outside the roster, distinguished by the `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Profile {
    Student { school: String },
    Developer { skill: String },
}

/// A named record generic over its profile payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account<P> {
    pub name: String,
    pub profile: P,
}

impl<P> Account<P> {
    pub fn new(name: impl Into<String>, profile: P) -> Self {
        Self {
            name: name.into(),
            profile,
        }
    }
}

impl Account<Profile> {
    pub fn headline(&self) -> String {
        match &self.profile {
            Profile::Student { school } => format!("{} is enrolled at {}", self.name, school),
            Profile::Developer { skill } => format!("{} writes {}", self.name, skill),
        }
    }
}

/// A loosely-typed field value, narrowed by exhaustive match instead of
/// runtime type tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
    Person { name: String, age: u32 },
    Missing,
}

impl FieldValue {
    /// Total over every variant; the missing case is a defined outcome.
    pub fn describe(&self) -> String {
        match self {
            FieldValue::Number(n) => format!("{:.0}", n),
            FieldValue::Text(s) => s.to_uppercase(),
            FieldValue::Timestamp(t) => t.timestamp_millis().to_string(),
            FieldValue::Person { name, age } => format!("{} is {} years old", name, age),
            FieldValue::Missing => "no value".to_string(),
        }
    }
}
