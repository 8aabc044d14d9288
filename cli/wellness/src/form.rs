//! Line-by-line questionnaire for `wellness form`.
//!
//! [`FormSession`] holds the state and is driven one answer at a time, so it
//! can be exercised without a terminal. [`run_form`] wires it to rustyline.

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use wellness_risk::{field_range, parse_yes_no, InputError, LifestyleInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Age,
    Gender,
    Height,
    Weight,
    Sleep,
    Exercise,
    JunkFood,
    Stress,
    Smoking,
}

impl FormField {
    pub const ORDER: [FormField; 9] = [
        FormField::Age,
        FormField::Gender,
        FormField::Height,
        FormField::Weight,
        FormField::Sleep,
        FormField::Exercise,
        FormField::JunkFood,
        FormField::Stress,
        FormField::Smoking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Age => "🎂 Age",
            FormField::Gender => "🧑 Gender",
            FormField::Height => "📏 Height (cm)",
            FormField::Weight => "⚖️ Weight (kg)",
            FormField::Sleep => "😴 Sleep hours/day",
            FormField::Exercise => "🏃 Exercise days/week",
            FormField::JunkFood => "🍟 Junk food days/week",
            FormField::Stress => "🧠 Stress Level",
            FormField::Smoking => "🚬 Smoking",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            FormField::Age => "13-60",
            FormField::Gender => "female/male",
            FormField::Height => "140-190",
            FormField::Weight => "35-120",
            FormField::Sleep => "4-10",
            FormField::Exercise | FormField::JunkFood => "0-7",
            FormField::Stress => "low/medium/high",
            FormField::Smoking => "yes/no",
        }
    }

    /// Name used in validation errors for this field.
    fn key(self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::Height => "height_cm",
            FormField::Weight => "weight_kg",
            FormField::Sleep => "sleep_hours",
            FormField::Exercise => "exercise_days",
            FormField::JunkFood => "junk_days",
            FormField::Stress => "stress_level",
            FormField::Smoking => "smoking",
        }
    }

    pub fn current(self, input: &LifestyleInput) -> String {
        match self {
            FormField::Age => input.age.to_string(),
            FormField::Gender => input.gender.label().to_ascii_lowercase(),
            FormField::Height => input.height_cm.to_string(),
            FormField::Weight => input.weight_kg.to_string(),
            FormField::Sleep => input.sleep_hours.to_string(),
            FormField::Exercise => input.exercise_days.to_string(),
            FormField::JunkFood => input.junk_days.to_string(),
            FormField::Stress => input.stress_level.label().to_ascii_lowercase(),
            FormField::Smoking => String::from(if input.smoking { "yes" } else { "no" }),
        }
    }

    fn set(self, input: &mut LifestyleInput, raw: &str) -> Result<(), InputError> {
        let raw = raw.trim();
        match self {
            FormField::Age => input.age = number(self, raw)?,
            FormField::Gender => input.gender = raw.parse()?,
            FormField::Height => input.height_cm = number(self, raw)?,
            FormField::Weight => input.weight_kg = number(self, raw)?,
            FormField::Sleep => input.sleep_hours = number(self, raw)?,
            FormField::Exercise => input.exercise_days = number(self, raw)?,
            FormField::JunkFood => input.junk_days = number(self, raw)?,
            FormField::Stress => input.stress_level = raw.parse()?,
            FormField::Smoking => input.smoking = parse_yes_no("smoking", raw)?,
        }
        Ok(())
    }
}

/// Parse a numeric answer. A number that does not fit the field's type is
/// reported against the field's range, not as unparseable.
fn number<T: std::str::FromStr>(field: FormField, raw: &str) -> Result<T, InputError> {
    if let Ok(value) = raw.parse::<T>() {
        return Ok(value);
    }
    let key = field.key();
    match (raw.parse::<f64>(), field_range(key)) {
        (Ok(value), Some(range)) if value.is_finite() && !range.contains(&value) => {
            Err(InputError::OutOfRange {
                field: key,
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
        _ => Err(InputError::NotANumber {
            field: key,
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormStep {
    /// Answer accepted, ask the next question.
    Next,
    /// Answer rejected; the same question is asked again.
    Rejected(String),
    Complete(LifestyleInput),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct FormSession {
    answers: LifestyleInput,
    index: usize,
}

impl FormSession {
    pub fn new(defaults: LifestyleInput) -> Self {
        Self {
            answers: defaults,
            index: 0,
        }
    }

    pub fn current_field(&self) -> Option<FormField> {
        FormField::ORDER.get(self.index).copied()
    }

    pub fn prompt(&self) -> Option<String> {
        self.current_field().map(|f| {
            format!(
                "{} [{}] ({}): ",
                f.label(),
                f.hint(),
                f.current(&self.answers)
            )
        })
    }

    /// Feed one answer. An empty line keeps the shown default; `:quit` aborts.
    pub fn handle_line(&mut self, line: &str) -> FormStep {
        let trimmed = line.trim();
        if matches!(trimmed, ":q" | ":quit" | ":exit") {
            return FormStep::Cancelled;
        }
        let Some(field) = self.current_field() else {
            return FormStep::Complete(self.answers);
        };

        let mut candidate = self.answers;
        if !trimmed.is_empty() {
            if let Err(e) = field.set(&mut candidate, trimmed) {
                return FormStep::Rejected(e.to_string());
            }
        }
        // Kept defaults are range-checked as well.
        if let Err(e) = candidate.validate_field(field.key()) {
            return FormStep::Rejected(e.to_string());
        }
        self.answers = candidate;

        self.index += 1;
        if self.index >= FormField::ORDER.len() {
            FormStep::Complete(self.answers)
        } else {
            FormStep::Next
        }
    }
}

/// Ask every question on the terminal. Returns `Ok(None)` when the user aborts.
pub fn run_form(defaults: LifestyleInput) -> Result<Option<LifestyleInput>, ReadlineError> {
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    let mut session = FormSession::new(defaults);
    println!("🌿✨ Wellness Wish AI: answer each question, Enter keeps the default, :quit aborts.");

    while let Some(prompt) = session.prompt() {
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(e) => return Err(e),
        };
        match session.handle_line(&line) {
            FormStep::Next => {}
            FormStep::Rejected(msg) => println!("error: {msg}"),
            FormStep::Complete(input) => return Ok(Some(input)),
            FormStep::Cancelled => return Ok(None),
        }
    }
    Ok(None)
}
