use anyhow::{bail, Context, Result};
use tracing::debug;

use super::aircraft::AircraftProfile;

const BUILTIN_CATALOG: &str = include_str!("../../data/aircraft.json");

/// Read-only set of aircraft profiles, kept in definition order
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<AircraftProfile>,
}

impl Catalog {
    /// Build a catalog, rejecting non-positive performance numbers and duplicate codes
    pub fn new(profiles: Vec<AircraftProfile>) -> Result<Self> {
        for (i, profile) in profiles.iter().enumerate() {
            if let Some(field) = profile.invalid_field() {
                bail!("Aircraft '{}' has an invalid {} value", profile.code, field);
            }

            let duplicate = profiles[..i]
                .iter()
                .any(|p| p.code.eq_ignore_ascii_case(&profile.code));
            if duplicate {
                bail!("Duplicate aircraft code: {}", profile.code);
            }
        }

        Ok(Self { profiles })
    }

    /// Parse a JSON array of profiles
    pub fn from_json(contents: &str) -> Result<Self> {
        let profiles: Vec<AircraftProfile> = serde_json::from_str(contents)
            .context("Failed to parse aircraft catalog JSON")?;
        let catalog = Self::new(profiles)?;
        debug!("[CATALOG] Loaded {} aircraft profiles", catalog.len());
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG).context("Built-in aircraft catalog is invalid")
    }

    /// Case-insensitive lookup by aircraft code
    pub fn get(&self, code: &str) -> Option<&AircraftProfile> {
        let code = code.trim();
        self.profiles
            .iter()
            .find(|p| p.code.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &AircraftProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
