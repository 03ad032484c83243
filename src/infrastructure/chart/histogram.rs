//! Histogram rendering via plotters

use std::path::{Path, PathBuf};

use plotters::prelude::*;
use tracing::debug;

use crate::domain::{ChartRenderer, DomainError};

const BIN_COUNT: usize = 10;
const CHART_SIZE: (u32, u32) = (800, 600);

/// Renders per-course mark histograms as PNG files under a public directory.
///
/// The file name is deterministic per course, so a re-render overwrites the
/// previous artifact. Concurrent renders for the same course race on the same
/// file with no locking; the artifact is regenerable, last writer wins.
pub struct HistogramRenderer {
    output_dir: PathBuf,
}

impl HistogramRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Deterministic artifact name for a course.
    pub fn artifact_file_name(course_id: &str) -> String {
        format!("histogram_{course_id}.png")
    }
}

impl ChartRenderer for HistogramRenderer {
    fn render_histogram(&self, course_id: &str, marks: &[i64]) -> Result<String, DomainError> {
        std::fs::create_dir_all(&self.output_dir).map_err(|err| {
            DomainError::chart(format!(
                "failed to create {}: {}",
                self.output_dir.display(),
                err
            ))
        })?;

        let file_name = Self::artifact_file_name(course_id);
        let path = self.output_dir.join(&file_name);

        draw_histogram(&path, course_id, marks).map_err(|err| {
            DomainError::chart(format!("failed to render {}: {}", path.display(), err))
        })?;

        debug!(artifact = %path.display(), "rendered course histogram");
        Ok(file_name)
    }
}

fn draw_histogram(
    path: &Path,
    course_id: &str,
    marks: &[i64],
) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(&min), Some(&max)) = (marks.iter().min(), marks.iter().max()) else {
        return Err("cannot render an empty marks set".into());
    };

    // 10 fixed-width bins spanning the observed range; the top bin is
    // inclusive of the maximum. A single distinct value gets a unit-wide span.
    let lo = min as f64;
    let hi = if max > min { max as f64 } else { lo + 1.0 };
    let bin_width = (hi - lo) / BIN_COUNT as f64;

    let mut counts = [0u32; BIN_COUNT];
    for &mark in marks {
        let offset = (mark as f64 - lo) / bin_width;
        let bin = (offset as usize).min(BIN_COUNT - 1);
        counts[bin] += 1;
    }
    let y_max = counts.iter().copied().max().unwrap_or(0) + 1;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Marks Distribution for Course {course_id}"),
            ("sans-serif", 30),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(lo..hi, 0u32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Marks")
        .y_desc("Number of Students")
        .bold_line_style(&BLACK.mix(0.2))
        .light_line_style(&BLACK.mix(0.08))
        .draw()?;

    chart.draw_series(counts.iter().enumerate().flat_map(|(bin, &count)| {
        let x0 = lo + bin_width * bin as f64;
        let x1 = x0 + bin_width;
        [
            Rectangle::new([(x0, 0), (x1, count)], BLUE.mix(0.7).filled()),
            Rectangle::new([(x0, 0), (x1, count)], BLACK.stroke_width(1)),
        ]
    }))?;

    root.present()?;
    Ok(())
}
