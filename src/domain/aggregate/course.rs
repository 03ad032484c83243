//! Course aggregation - average and maximum marks over a matched record set

/// Summary statistics for one course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub course_id: String,
    /// Mean of the matched marks, rounded to 2 decimal places
    /// (round-half-away-from-zero, what `f64::round` gives).
    pub average_marks: f64,
    pub maximum_marks: i64,
}

impl CourseSummary {
    /// Aggregate a non-empty marks set. Returns `None` for an empty set, so
    /// the caller decides how "not found" is reported.
    pub fn from_marks(course_id: impl Into<String>, marks: &[i64]) -> Option<Self> {
        let maximum_marks = marks.iter().copied().max()?;
        let sum: i64 = marks.iter().sum();
        let average = sum as f64 / marks.len() as f64;
        Some(Self {
            course_id: course_id.into(),
            average_marks: round_to_2dp(average),
            maximum_marks,
        })
    }
}

fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
