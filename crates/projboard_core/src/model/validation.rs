//! Form input validation.
//!
//! # Responsibility
//! - Check raw user input against declarative rules before it reaches the
//!   store.
//! - Turn a raw `ProjectDraft` into a trusted `NewProject`.
//!
//! # Invariants
//! - The store never validates; everything it receives went through
//!   `ProjectDraft::validate()`.
//! - Text length rules count chars, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub const TITLE_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const PEOPLE_FIELD: &str = "people";

pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const PEOPLE_MIN: i64 = 1;
pub const PEOPLE_MAX: i64 = 5;

/// Value under validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validatable<'a> {
    Text(&'a str),
    Number(i64),
}

/// Declarative rule set. `None` means the rule is not applied.
///
/// Length rules only apply to text and bound rules only apply to numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl Rules {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// First rule violation found for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required {
        field: &'static str,
    },
    TooShort {
        field: &'static str,
        min_length: usize,
        actual: usize,
    },
    TooLong {
        field: &'static str,
        max_length: usize,
        actual: usize,
    },
    BelowMin {
        field: &'static str,
        min: i64,
        actual: i64,
    },
    AboveMax {
        field: &'static str,
        max: i64,
        actual: i64,
    },
    NotANumber {
        field: &'static str,
        value: String,
    },
}

impl ValidationError {
    /// Name of the form field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::BelowMin { field, .. }
            | Self::AboveMax { field, .. }
            | Self::NotANumber { field, .. } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::TooShort {
                field,
                min_length,
                actual,
            } => write!(
                f,
                "{field} must be at least {min_length} characters, got {actual}"
            ),
            Self::TooLong {
                field,
                max_length,
                actual,
            } => write!(
                f,
                "{field} must be at most {max_length} characters, got {actual}"
            ),
            Self::BelowMin { field, min, actual } => {
                write!(f, "{field} must be >= {min}, got {actual}")
            }
            Self::AboveMax { field, max, actual } => {
                write!(f, "{field} must be <= {max}, got {actual}")
            }
            Self::NotANumber { field, value } => {
                write!(f, "{field} must be a whole number, got `{value}`")
            }
        }
    }
}

impl Error for ValidationError {}

/// Checks `value` against `rules` and reports the first violation.
pub fn validate(
    field: &'static str,
    value: Validatable<'_>,
    rules: &Rules,
) -> Result<(), ValidationError> {
    match value {
        Validatable::Text(text) => {
            let trimmed = text.trim();
            if rules.required && trimmed.is_empty() {
                return Err(ValidationError::Required { field });
            }
            let length = trimmed.chars().count();
            if let Some(min_length) = rules.min_length {
                if length < min_length {
                    return Err(ValidationError::TooShort {
                        field,
                        min_length,
                        actual: length,
                    });
                }
            }
            if let Some(max_length) = rules.max_length {
                if length > max_length {
                    return Err(ValidationError::TooLong {
                        field,
                        max_length,
                        actual: length,
                    });
                }
            }
        }
        Validatable::Number(number) => {
            if rules.required && number == 0 {
                return Err(ValidationError::Required { field });
            }
            if let Some(min) = rules.min {
                if number < min {
                    return Err(ValidationError::BelowMin {
                        field,
                        min,
                        actual: number,
                    });
                }
            }
            if let Some(max) = rules.max {
                if number > max {
                    return Err(ValidationError::AboveMax {
                        field,
                        max,
                        actual: number,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    /// Kept as text: the form field may hold anything.
    pub people: String,
}

impl ProjectDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people: people.into(),
        }
    }

    /// Validates every field and returns the trimmed, typed values.
    ///
    /// # Errors
    /// - `Required` for a blank title or description, or zero people.
    /// - `TooShort` for a description under 5 chars.
    /// - `NotANumber` when people is not an integer.
    /// - `BelowMin` / `AboveMax` when people is outside `1..=5`.
    pub fn validate(&self) -> Result<NewProject, ValidationError> {
        validate(
            TITLE_FIELD,
            Validatable::Text(&self.title),
            &Rules::required(),
        )?;
        validate(
            DESCRIPTION_FIELD,
            Validatable::Text(&self.description),
            &Rules::required().with_min_length(DESCRIPTION_MIN_LEN),
        )?;

        let people_text = self.people.trim();
        if people_text.is_empty() {
            return Err(ValidationError::Required {
                field: PEOPLE_FIELD,
            });
        }
        let people = people_text
            .parse::<i64>()
            .map_err(|_| ValidationError::NotANumber {
                field: PEOPLE_FIELD,
                value: people_text.to_string(),
            })?;
        validate(
            PEOPLE_FIELD,
            Validatable::Number(people),
            &Rules::required().with_range(PEOPLE_MIN, PEOPLE_MAX),
        )?;

        Ok(NewProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            // In range 1..=5 after the check above.
            people: people as u32,
        })
    }
}

/// Validated input accepted by `ProjectStore::add_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub people: u32,
}

impl NewProject {
    /// Builds an already-validated triple.
    ///
    /// Callers bypassing `ProjectDraft::validate()` own the input contract:
    /// non-empty title, description of at least 5 chars, people in `1..=5`.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            people,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ProjectDraft, Rules, Validatable, ValidationError};

    #[test]
    fn required_text_rejects_blank() {
        let err = validate("title", Validatable::Text("   "), &Rules::required()).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "title" });
    }

    #[test]
    fn length_rules_ignore_numbers_and_bounds_ignore_text() {
        let rules = Rules::default().with_min_length(10).with_range(1, 2);
        assert!(validate("x", Validatable::Number(2), &rules).is_ok());
        assert!(validate("x", Validatable::Text("0123456789"), &rules).is_ok());
    }

    #[test]
    fn max_length_counts_chars() {
        let rules = Rules::default().with_max_length(3);
        assert!(validate("x", Validatable::Text("äöü"), &rules).is_ok());
        let err = validate("x", Validatable::Text("äöüß"), &rules).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooLong {
                field: "x",
                max_length: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn draft_validate_trims_and_types_fields() {
        let project = ProjectDraft::new(" Ship ", " write docs ", " 3 ")
            .validate()
            .unwrap();
        assert_eq!(project.title, "Ship");
        assert_eq!(project.description, "write docs");
        assert_eq!(project.people, 3);
    }

    #[test]
    fn draft_validate_reports_first_failing_field() {
        let err = ProjectDraft::new("", "tiny", "9").validate().unwrap_err();
        assert_eq!(err.field(), "title");

        let err = ProjectDraft::new("t", "tiny", "9").validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "description",
                min_length: 5,
                actual: 4
            }
        );
    }

    #[test]
    fn draft_validate_checks_people_range_and_format() {
        let err = ProjectDraft::new("t", "long enough", "0")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "people" });

        let err = ProjectDraft::new("t", "long enough", "6")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::AboveMax { max: 5, .. }));

        let err = ProjectDraft::new("t", "long enough", "-1")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::BelowMin { min: 1, .. }));

        let err = ProjectDraft::new("t", "long enough", "two")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
        assert!(err.to_string().contains("two"));
    }
}
