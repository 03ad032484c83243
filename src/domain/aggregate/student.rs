//! Student aggregation - total marks over a matched record set

use crate::domain::Record;

/// Summary of one student's marks across all matched courses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub student_id: String,
    /// The matched rows, in table order, shown one per line in the view.
    pub records: Vec<Record>,
    /// Arithmetic sum of marks over the matched rows. No average is computed
    /// for students.
    pub total_marks: i64,
}

impl StudentSummary {
    /// Aggregate a non-empty match set. Returns `None` for an empty set, so
    /// the caller decides how "not found" is reported.
    pub fn from_records(student_id: impl Into<String>, records: Vec<Record>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }
        let total_marks = records.iter().map(|r| r.marks).sum();
        Some(Self {
            student_id: student_id.into(),
            records,
            total_marks,
        })
    }
}
