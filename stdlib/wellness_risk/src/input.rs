//! Lifestyle questionnaire answers and their boundary validation.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const AGE_RANGE: RangeInclusive<u32> = 13..=60;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 140.0..=190.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 35.0..=120.0;
pub const SLEEP_HOURS_RANGE: RangeInclusive<f64> = 4.0..=10.0;
pub const DAYS_PER_WEEK_RANGE: RangeInclusive<u8> = 0..=7;

/// Errors raised while turning raw answers into a [`LifestyleInput`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("unknown {field} value '{value}'")]
    UnknownValue { field: &'static str, value: String },
    #[error("{field} expects a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
}

impl InputError {
    /// Name of the questionnaire field the error is about.
    pub fn field(&self) -> &'static str {
        match self {
            InputError::OutOfRange { field, .. }
            | InputError::NotFinite { field }
            | InputError::UnknownValue { field, .. }
            | InputError::NotANumber { field, .. } => field,
        }
    }
}

/// Integer code or textual name, as accepted from profiles and batch files.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CodeOrName {
    Code(i64),
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub fn from_code(code: i64) -> Result<Self, InputError> {
        match code {
            0 => Ok(Gender::Female),
            1 => Ok(Gender::Male),
            _ => Err(InputError::UnknownValue {
                field: "gender",
                value: code.to_string(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "f" | "female" => Ok(Gender::Female),
            "1" | "m" | "male" => Ok(Gender::Male),
            _ => Err(InputError::UnknownValue {
                field: "gender",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(c) => Gender::from_code(c),
            CodeOrName::Name(s) => s.parse(),
        }
        .map_err(D::Error::custom)
    }
}

/// Self-reported stress. Codes follow the questionnaire: 1 = low, 2 = medium, 3 = high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl StressLevel {
    pub fn from_code(code: i64) -> Result<Self, InputError> {
        match code {
            1 => Ok(StressLevel::Low),
            2 => Ok(StressLevel::Medium),
            3 => Ok(StressLevel::High),
            _ => Err(InputError::UnknownValue {
                field: "stress_level",
                value: code.to_string(),
            }),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            StressLevel::Low => 1,
            StressLevel::Medium => 2,
            StressLevel::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StressLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "low" => Ok(StressLevel::Low),
            "2" | "medium" | "med" => Ok(StressLevel::Medium),
            "3" | "high" => Ok(StressLevel::High),
            _ => Err(InputError::UnknownValue {
                field: "stress_level",
                value: s.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for StressLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CodeOrName::deserialize(deserializer)? {
            CodeOrName::Code(c) => StressLevel::from_code(c),
            CodeOrName::Name(s) => s.parse(),
        }
        .map_err(D::Error::custom)
    }
}

/// Parse a yes/no answer. Accepts `yes`/`no`, `true`/`false`, `y`/`n` and `1`/`0`.
pub fn parse_yes_no(field: &'static str, s: &str) -> Result<bool, InputError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" => Ok(true),
        "0" | "n" | "no" | "false" => Ok(false),
        _ => Err(InputError::UnknownValue {
            field,
            value: s.to_string(),
        }),
    }
}

fn smoking_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Code(i64),
        Name(String),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Code(0) => Ok(false),
        Flag::Code(1) => Ok(true),
        Flag::Code(c) => Err(D::Error::custom(InputError::UnknownValue {
            field: "smoking",
            value: c.to_string(),
        })),
        Flag::Name(s) => parse_yes_no("smoking", &s).map_err(D::Error::custom),
    }
}

/// The nine questionnaire answers a classification is computed from.
///
/// Missing fields deserialize to the questionnaire defaults, so a profile
/// only has to spell out what differs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifestyleInput {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub sleep_hours: f64,
    pub exercise_days: u8,
    pub junk_days: u8,
    pub stress_level: StressLevel,
    #[serde(deserialize_with = "smoking_flag")]
    pub smoking: bool,
}

impl Default for LifestyleInput {
    fn default() -> Self {
        Self {
            age: 18,
            gender: Gender::Female,
            height_cm: 160.0,
            weight_kg: 55.0,
            sleep_hours: 7.0,
            exercise_days: 3,
            junk_days: 2,
            stress_level: StressLevel::Medium,
            smoking: false,
        }
    }
}

impl LifestyleInput {
    /// Check every answer against its questionnaire domain.
    ///
    /// Reports the first offending field in declaration order.
    pub fn validate(&self) -> Result<(), InputError> {
        for field in RANGED_FIELDS {
            self.validate_field(field)?;
        }
        Ok(())
    }

    /// Check a single answer against its domain. Categorical answers are
    /// always in domain once parsed.
    pub fn validate_field(&self, field: &'static str) -> Result<(), InputError> {
        let value = match field {
            "age" => f64::from(self.age),
            "height_cm" => self.height_cm,
            "weight_kg" => self.weight_kg,
            "sleep_hours" => self.sleep_hours,
            "exercise_days" => f64::from(self.exercise_days),
            "junk_days" => f64::from(self.junk_days),
            _ => return Ok(()),
        };
        let Some(range) = field_range(field) else {
            return Ok(());
        };
        if !value.is_finite() {
            return Err(InputError::NotFinite { field });
        }
        if range.contains(&value) {
            Ok(())
        } else {
            Err(InputError::OutOfRange {
                field,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }
}

/// Numeric answers, in declaration order.
const RANGED_FIELDS: [&str; 6] = [
    "age",
    "height_cm",
    "weight_kg",
    "sleep_hours",
    "exercise_days",
    "junk_days",
];

/// Domain of a numeric answer, `None` for categorical ones.
pub fn field_range(field: &str) -> Option<RangeInclusive<f64>> {
    match field {
        "age" => Some(widen(&AGE_RANGE)),
        "height_cm" => Some(HEIGHT_CM_RANGE),
        "weight_kg" => Some(WEIGHT_KG_RANGE),
        "sleep_hours" => Some(SLEEP_HOURS_RANGE),
        "exercise_days" | "junk_days" => Some(widen(&DAYS_PER_WEEK_RANGE)),
        _ => None,
    }
}

fn widen<T: Copy + Into<f64>>(range: &RangeInclusive<T>) -> RangeInclusive<f64> {
    (*range.start()).into()..=(*range.end()).into()
}
