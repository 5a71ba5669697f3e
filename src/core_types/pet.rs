//! Pet records as the service returns them, and the payloads used to create
//! or update them.

use crate::error::{PetError, PetResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age as the service stores it: free text or a whole number.
///
/// The form field is always text, so both render through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PetAge {
    Number(i64),
    Text(String),
}

impl fmt::Display for PetAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetAge::Number(n) => write!(f, "{n}"),
            PetAge::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PetAge {
    fn from(value: i64) -> Self {
        PetAge::Number(value)
    }
}

impl From<&str> for PetAge {
    fn from(value: &str) -> Self {
        PetAge::Text(value.to_string())
    }
}

impl From<String> for PetAge {
    fn from(value: String) -> Self {
        PetAge::Text(value)
    }
}

/// Name, animal type and age sent when creating or updating a pet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetDetails {
    pub name: String,
    pub animal_type: String,
    pub age: PetAge,
}

impl PetDetails {
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl Into<PetAge>,
    ) -> Self {
        Self {
            name: name.into(),
            animal_type: animal_type.into(),
            age: age.into(),
        }
    }

    /// Form fields in the order the service documents them.
    pub fn form_fields(&self) -> [(&'static str, String); 3] {
        [
            ("name", self.name.clone()),
            ("animal_type", self.animal_type.clone()),
            ("age", self.age.to_string()),
        ]
    }
}

/// A pet owned by the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: PetAge,
    /// Data URI of the photo; empty or absent when none was attached.
    #[serde(default)]
    pub pet_photo: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    /// Unix seconds with a fractional part, as a string.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Creation time, if the service reported one that parses.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?.trim();
        let seconds: f64 = raw.parse().ok()?;
        if !seconds.is_finite() || seconds < 0.0 {
            return None;
        }
        let whole = seconds.trunc();
        let nanos = ((seconds - whole) * 1_000_000_000.0).round() as u32;
        DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
    }
}

/// Body of `GET /api/pets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    #[serde(default)]
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn contains_id(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|p| p.id == pet_id)
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

/// Which pets `GET /api/pets` should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet visible on the site.
    #[default]
    All,
    /// Only pets owned by the caller.
    MyPets,
}

impl PetFilter {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl FromStr for PetFilter {
    type Err = PetError;

    fn from_str(s: &str) -> PetResult<Self> {
        match s {
            "" => Ok(PetFilter::All),
            "my_pets" => Ok(PetFilter::MyPets),
            other => Err(PetError::configuration_error(format!(
                "Unsupported pet filter '{other}', expected '' or 'my_pets'"
            ))),
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PetFilter::All => f.write_str("all"),
            PetFilter::MyPets => f.write_str("my_pets"),
        }
    }
}
