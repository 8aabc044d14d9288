//! `wellness.toml` profiles and command-line overrides.
//!
//! Precedence, highest first: command-line flags, profile file, built-in
//! questionnaire defaults.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wellness_report::ReportFormat;
use wellness_risk::{parse_yes_no, Gender, InputError, LifestyleInput, StressLevel};

pub const DEFAULT_PROFILE_FILE: &str = "wellness.toml";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid profile '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid report settings: {0}")]
    Report(#[from] wellness_report::ReportError),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ReportSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub summary_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub answers: LifestyleInput,
    #[serde(default)]
    pub report: ReportSettings,
}

impl Profile {
    pub fn report_format(&self) -> Result<Option<ReportFormat>, ProfileError> {
        match &self.report.format {
            Some(name) => Ok(Some(name.parse()?)),
            None => Ok(None),
        }
    }
}

pub fn parse_profile(text: &str) -> Result<Profile, toml::de::Error> {
    toml::from_str::<Profile>(text)
}

pub fn load_profile(path: &Path) -> Result<Profile, ProfileError> {
    let text = fs::read_to_string(path).map_err(|source| ProfileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let profile = parse_profile(&text).map_err(|source| ProfileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded profile from '{}'", path.display());
    Ok(profile)
}

/// Commented starter profile written by `wellness init`.
pub fn generate_profile_template() -> String {
    let d = LifestyleInput::default();
    let mut out = String::new();
    out.push_str("# Lifestyle questionnaire answers. Any key may be omitted.\n");
    out.push_str("[answers]\n");
    out.push_str(&format!("age = {}            # 13-60\n", d.age));
    out.push_str("gender = \"female\"   # female | male (or 0 | 1)\n");
    out.push_str(&format!("height_cm = {:.1}    # 140-190\n", d.height_cm));
    out.push_str(&format!("weight_kg = {:.1}     # 35-120\n", d.weight_kg));
    out.push_str(&format!("sleep_hours = {:.1}    # 4-10\n", d.sleep_hours));
    out.push_str(&format!("exercise_days = {}    # 0-7 per week\n", d.exercise_days));
    out.push_str(&format!("junk_days = {}        # 0-7 per week\n", d.junk_days));
    out.push_str("stress_level = \"medium\"  # low | medium | high (or 1 | 2 | 3)\n");
    out.push_str("smoking = false\n");
    out.push_str("\n[report]\n");
    out.push_str("# format = \"text\"   # text | markdown | html | json\n");
    out.push_str("# summary_only = false\n");
    out.push_str("# seed = 42         # fixes the confidence draw\n");
    out
}

fn parse_smoking(s: &str) -> Result<bool, InputError> {
    parse_yes_no("smoking", s)
}

/// Questionnaire answers given as flags. Unset flags leave the profile value alone.
#[derive(Debug, Clone, Default, Args)]
pub struct AnswerOverrides {
    /// Age in years (13-60)
    #[arg(long, value_name = "YEARS")]
    pub age: Option<u32>,

    /// female | male (or 0 | 1)
    #[arg(long, value_name = "GENDER")]
    pub gender: Option<Gender>,

    /// Height in centimetres (140-190)
    #[arg(long = "height", value_name = "CM")]
    pub height_cm: Option<f64>,

    /// Weight in kilograms (35-120)
    #[arg(long = "weight", value_name = "KG")]
    pub weight_kg: Option<f64>,

    /// Sleep hours per day (4-10)
    #[arg(long = "sleep", value_name = "HOURS")]
    pub sleep_hours: Option<f64>,

    /// Exercise days per week (0-7)
    #[arg(long = "exercise", value_name = "DAYS")]
    pub exercise_days: Option<u8>,

    /// Junk food days per week (0-7)
    #[arg(long = "junk", value_name = "DAYS")]
    pub junk_days: Option<u8>,

    /// low | medium | high (or 1 | 2 | 3)
    #[arg(long = "stress", value_name = "LEVEL")]
    pub stress_level: Option<StressLevel>,

    /// yes | no
    #[arg(long, value_name = "YES|NO", value_parser = parse_smoking)]
    pub smoking: Option<bool>,
}

impl AnswerOverrides {
    pub fn apply(&self, mut input: LifestyleInput) -> LifestyleInput {
        if let Some(v) = self.age {
            input.age = v;
        }
        if let Some(v) = self.gender {
            input.gender = v;
        }
        if let Some(v) = self.height_cm {
            input.height_cm = v;
        }
        if let Some(v) = self.weight_kg {
            input.weight_kg = v;
        }
        if let Some(v) = self.sleep_hours {
            input.sleep_hours = v;
        }
        if let Some(v) = self.exercise_days {
            input.exercise_days = v;
        }
        if let Some(v) = self.junk_days {
            input.junk_days = v;
        }
        if let Some(v) = self.stress_level {
            input.stress_level = v;
        }
        if let Some(v) = self.smoking {
            input.smoking = v;
        }
        input
    }
}
