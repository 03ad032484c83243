//! Chart renderer trait - the seam to the image-producing backend

use crate::domain::DomainError;

/// Produces the per-course histogram artifact.
///
/// Rendering is a pure side effect: the artifact for a course is overwritten
/// on every render and is regenerable from the same inputs. Concurrent
/// requests for the same course race on the same file name with no locking;
/// last writer wins.
pub trait ChartRenderer: Send + Sync {
    /// Render a histogram of `marks` for the given course and return the
    /// artifact file name (`histogram_<course_id>.png`).
    fn render_histogram(&self, course_id: &str, marks: &[i64]) -> Result<String, DomainError>;
}
