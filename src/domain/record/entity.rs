//! Record entity - one row of the marks table

use serde::{Deserialize, Serialize};

/// A single row of the marks table: which student scored what in which course.
///
/// Records are immutable values created by the datastore loader and discarded
/// at the end of the request. There is no identity beyond the field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Student identifier, stored verbatim (never trimmed or case-folded)
    pub student_id: String,

    /// Course identifier, stored verbatim
    pub course_id: String,

    /// Marks obtained by the student in the course
    pub marks: i64,
}

impl Record {
    pub fn new(
        student_id: impl Into<String>,
        course_id: impl Into<String>,
        marks: i64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            course_id: course_id.into(),
            marks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_construction() {
        let record = Record::new("S1", "CSE101", 80);
        assert_eq!(record.student_id, "S1");
        assert_eq!(record.course_id, "CSE101");
        assert_eq!(record.marks, 80);
    }

    #[test]
    fn test_record_stores_values_verbatim() {
        // Stored values keep their whitespace; matching is the lookup's concern.
        let record = Record::new(" S1 ", "cse101", 0);
        assert_eq!(record.student_id, " S1 ");
        assert_eq!(record.course_id, "cse101");
    }
}
