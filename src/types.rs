//! Core types and structures for pass-forge

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::config_error;
use crate::error::Result;

/// Longest permutation the combination pass will build
pub const MAX_COMBINATION_LEN: usize = 3;

/// How many years before the current one get appended as suffixes
pub const DEFAULT_YEAR_SPAN: u32 = 5;

/// Special characters appended as suffixes, in order
pub const DEFAULT_SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%'];

/// Default export target
pub const DEFAULT_OUTPUT: &str = "custom_wordlist.txt";

/// Environment variable pinning the "current year"
pub const YEAR_ENV: &str = "PASS_FORGE_YEAR";

/// Environment variable overriding the export target
pub const OUTPUT_ENV: &str = "PASS_FORGE_OUTPUT";

/// Named personal detail used as generation input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedField {
    Name,
    Surname,
    Nickname,
    Dob,
    Pet,
    City,
}

impl SeedField {
    /// All fields, in prompt order
    pub const ALL: [SeedField; 6] = [
        SeedField::Name,
        SeedField::Surname,
        SeedField::Nickname,
        SeedField::Dob,
        SeedField::Pet,
        SeedField::City,
    ];

    /// Whether the field holds free text (everything but the date)
    pub fn is_free_text(&self) -> bool {
        !matches!(self, SeedField::Dob)
    }

    /// Prompt label for interactive collection
    pub fn prompt(&self) -> &'static str {
        match self {
            SeedField::Name => "Enter a first name (e.g., John):",
            SeedField::Surname => "Enter a surname (e.g., Doe):",
            SeedField::Nickname => "Enter a nickname:",
            SeedField::Dob => "Enter a date of birth (YYYY-MM-DD):",
            SeedField::Pet => "Enter a pet's name:",
            SeedField::City => "Enter a city:",
        }
    }
}

impl std::fmt::Display for SeedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedField::Name => write!(f, "name"),
            SeedField::Surname => write!(f, "surname"),
            SeedField::Nickname => write!(f, "nickname"),
            SeedField::Dob => write!(f, "dob"),
            SeedField::Pet => write!(f, "pet"),
            SeedField::City => write!(f, "city"),
        }
    }
}

/// Raw seed values as captured from the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seeds {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub nickname: Option<String>,
    pub dob: Option<String>,
    pub pet: Option<String>,
    pub city: Option<String>,
}

impl Seeds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, field: SeedField, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn set(&mut self, field: SeedField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    pub fn get(&self, field: SeedField) -> Option<&str> {
        match field {
            SeedField::Name => self.name.as_deref(),
            SeedField::Surname => self.surname.as_deref(),
            SeedField::Nickname => self.nickname.as_deref(),
            SeedField::Dob => self.dob.as_deref(),
            SeedField::Pet => self.pet.as_deref(),
            SeedField::City => self.city.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: SeedField) -> &mut Option<String> {
        match field {
            SeedField::Name => &mut self.name,
            SeedField::Surname => &mut self.surname,
            SeedField::Nickname => &mut self.nickname,
            SeedField::Dob => &mut self.dob,
            SeedField::Pet => &mut self.pet,
            SeedField::City => &mut self.city,
        }
    }
}

/// Configuration for wordlist generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Year treated as "now" for the suffix range
    pub current_year: i32,
    /// Number of preceding years included in the suffix range
    pub year_span: u32,
    /// Special characters appended as suffixes
    pub special_chars: Vec<char>,
    /// Longest permutation built by the combination pass
    pub max_combination_len: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            current_year: chrono::Local::now().year(),
            year_span: DEFAULT_YEAR_SPAN,
            special_chars: DEFAULT_SPECIAL_CHARS.to_vec(),
            max_combination_len: MAX_COMBINATION_LEN,
        }
    }
}

impl GenerationConfig {
    /// Pin the current year, for reproducible output
    pub fn with_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Build from defaults, honouring `PASS_FORGE_YEAR` when set
    pub fn from_env() -> Result<Self> {
        let config = Self::default();
        match std::env::var(YEAR_ENV) {
            Ok(raw) => Ok(config.with_year(parse_year(&raw)?)),
            Err(_) => Ok(config),
        }
    }
}

/// Parse a year given on the command line or in the environment
pub fn parse_year(raw: &str) -> Result<i32> {
    let trimmed = raw.trim();
    match trimmed.parse::<i32>() {
        Ok(year) if (1..=9999).contains(&year) => Ok(year),
        _ => Err(config_error!("'{}' is not a valid year", trimmed)),
    }
}

/// Per-pass counts for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub base_tokens: usize,
    pub after_transform: usize,
    pub after_combination: usize,
    pub after_suffix: usize,
    pub current_year: i32,
    pub warnings: Vec<String>,
}
