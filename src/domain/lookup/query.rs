//! Query input types for the request dispatcher

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine;
use crate::domain::{DomainError, Record};

/// Error message shown when an identifier is submitted but trims to nothing.
pub const EMPTY_ID_MESSAGE: &str = "Please enter an ID value";

/// Which key a lookup filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupKind {
    #[serde(rename = "student_id")]
    Student,
    #[serde(rename = "course_id")]
    Course,
}

impl LookupKind {
    /// Filter the record table by this kind's key.
    pub fn filter(&self, records: &[Record], id: &str) -> Vec<Record> {
        match self {
            Self::Student => engine::by_student(records, id),
            Self::Course => engine::by_course(records, id),
        }
    }

    /// Kind-specific message for a lookup that matched nothing.
    pub fn not_found_message(&self, id: &str) -> String {
        match self {
            Self::Student => format!("Student {id} not found"),
            Self::Course => format!("Course {id} not found"),
        }
    }
}

impl FromStr for LookupKind {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student_id" => Ok(Self::Student),
            "course_id" => Ok(Self::Course),
            other => Err(DomainError::validation(format!(
                "Unknown lookup kind '{other}'"
            ))),
        }
    }
}

/// The identifying input of one request, constructed exactly once at the top
/// of request handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// No identifying input at all; the plain form view is rendered.
    NoInput,
    /// A well-formed lookup for `id` by the given key.
    Lookup { kind: LookupKind, id: String },
}

impl QueryInput {
    /// Build a lookup from a caller-supplied identifier.
    ///
    /// The identifier is trimmed here and nowhere else; an input that trims to
    /// nothing is a validation error, not a lookup.
    pub fn lookup(kind: LookupKind, raw_id: &str) -> Result<Self, DomainError> {
        let id = raw_id.trim();
        if id.is_empty() {
            return Err(DomainError::validation(EMPTY_ID_MESSAGE));
        }
        Ok(Self::Lookup {
            kind,
            id: id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_trims_identifier() {
        let input = QueryInput::lookup(LookupKind::Student, "  S1  ").unwrap();
        assert_eq!(
            input,
            QueryInput::Lookup {
                kind: LookupKind::Student,
                id: "S1".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_identifier_is_rejected() {
        let err = QueryInput::lookup(LookupKind::Course, "").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Please enter an ID value");
    }

    #[test]
    fn test_whitespace_identifier_is_rejected() {
        let err = QueryInput::lookup(LookupKind::Student, "   ").unwrap_err();
        assert!(err.to_string().contains(EMPTY_ID_MESSAGE));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("student_id".parse::<LookupKind>().unwrap(), LookupKind::Student);
        assert_eq!("course_id".parse::<LookupKind>().unwrap(), LookupKind::Course);
        assert!("teacher_id".parse::<LookupKind>().is_err());
    }

    #[test]
    fn test_not_found_messages_contain_identifier() {
        assert_eq!(
            LookupKind::Student.not_found_message("S9"),
            "Student S9 not found"
        );
        assert_eq!(
            LookupKind::Course.not_found_message("CSE999"),
            "Course CSE999 not found"
        );
    }
}
