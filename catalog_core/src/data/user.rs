use serde::{Deserialize, Serialize};

/// A unique ID that refers to a user. Categories point at their owner by
/// this ID.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m", alias = "male")]
    Male,
    #[serde(rename = "f", alias = "female")]
    Female,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// The display name, e.g. "Roma".
    pub name: String,
    pub sex: Sex,
}

impl Sex {
    /// The single-letter code used in the record files.
    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}
