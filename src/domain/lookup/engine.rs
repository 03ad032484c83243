//! Lookup engine - linear filters over the in-memory record table

use crate::domain::Record;

/// All records for one student, in table order.
///
/// Exact string equality; stored values are compared verbatim. Trimming of
/// the caller-supplied identifier happens at input construction, not here.
pub fn by_student(records: &[Record], student_id: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.student_id == student_id)
        .cloned()
        .collect()
}

/// All records for one course, in table order.
pub fn by_course(records: &[Record], course_id: &str) -> Vec<Record> {
    records
        .iter()
        .filter(|r| r.course_id == course_id)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<Record> {
        vec![
            Record::new("S1", "C1", 80),
            Record::new("S1", "C2", 90),
            Record::new("S2", "C1", 70),
        ]
    }

    #[test]
    fn test_by_student_matches_all_rows() {
        let matches = by_student(&table(), "S1");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|r| r.student_id == "S1"));
    }

    #[test]
    fn test_by_course_matches_all_rows() {
        let matches = by_course(&table(), "C1");
        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|r| r.course_id == "C1"));
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(by_student(&table(), "S9").is_empty());
        assert!(by_course(&table(), "C9").is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        // No case folding and no trimming of stored values.
        let records = vec![Record::new(" S1", "c1", 10)];
        assert!(by_student(&records, "S1").is_empty());
        assert!(by_course(&records, "C1").is_empty());
        assert_eq!(by_student(&records, " S1").len(), 1);
    }

    #[test]
    fn test_preserves_table_order() {
        let matches = by_course(&table(), "C1");
        assert_eq!(matches[0].student_id, "S1");
        assert_eq!(matches[1].student_id, "S2");
    }
}
