//! Request parameter types for the lookup surface

use serde::Deserialize;

use crate::domain::{DomainError, LookupKind, QueryInput};

/// Query parameters of `GET /`. Exactly one of the two identifiers is
/// expected; when both are present the student one wins (it is checked
/// first).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IndexParams {
    pub student_id: Option<String>,
    pub course_id: Option<String>,
}

impl IndexParams {
    pub fn into_query(self) -> Result<QueryInput, DomainError> {
        match (self.student_id, self.course_id) {
            (Some(id), _) => QueryInput::lookup(LookupKind::Student, &id),
            (None, Some(id)) => QueryInput::lookup(LookupKind::Course, &id),
            (None, None) => Ok(QueryInput::NoInput),
        }
    }
}

/// Body of `POST /`: a kind selector named `ID` and the identifier value.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupForm {
    #[serde(rename = "ID")]
    pub kind: Option<String>,
    #[serde(default)]
    pub id_value: String,
}

impl LookupForm {
    pub fn into_query(self) -> Result<QueryInput, DomainError> {
        let Some(kind) = self.kind else {
            return Ok(QueryInput::NoInput);
        };
        // An unrecognized selector falls through to the plain form view.
        let Ok(kind) = kind.parse::<LookupKind>() else {
            return Ok(QueryInput::NoInput);
        };
        QueryInput::lookup(kind, &self.id_value)
    }
}
