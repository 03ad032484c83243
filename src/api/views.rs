//! HTML views - index, student, course and error pages
//!
//! The pages are intentionally plain; the interesting part of this app is the
//! lookup and aggregation behind them. User-supplied identifiers are escaped
//! on output.

use crate::domain::{CourseSummary, StudentSummary};

/// The input form: pick a lookup kind and submit an identifier.
pub fn index_page() -> String {
    page(
        "Marks Lookup",
        r#"<h1>Marks Lookup</h1>
<form method="post" action="/">
  <p>
    <label><input type="radio" name="ID" value="student_id" checked> Student ID</label>
    <label><input type="radio" name="ID" value="course_id"> Course ID</label>
  </p>
  <p>
    <input type="text" name="id_value" placeholder="Enter an ID">
    <button type="submit">Search</button>
  </p>
</form>"#,
    )
}

/// Per-student marks summary: one row per matched record plus the total.
pub fn student_page(summary: &StudentSummary) -> String {
    let mut rows = String::new();
    for record in &summary.records {
        rows.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td></tr>\n",
            escape(&record.course_id),
            record.marks
        ));
    }

    let body = format!(
        r#"<h1>Marks for Student {id}</h1>
<table border="1">
  <thead>
    <tr><th>Course ID</th><th>Marks</th></tr>
  </thead>
  <tbody>
{rows}  </tbody>
</table>
<p>Total marks: <strong>{total}</strong></p>
<p><a href="/">Back</a></p>"#,
        id = escape(&summary.student_id),
        rows = rows,
        total = summary.total_marks,
    );
    page("Student Marks", &body)
}

/// Per-course statistics plus the generated histogram artifact.
pub fn course_page(summary: &CourseSummary, artifact: &str) -> String {
    let body = format!(
        r#"<h1>Course {id}</h1>
<p>Average marks: <strong>{average}</strong></p>
<p>Maximum marks: <strong>{maximum}</strong></p>
<img src="/static/{artifact}" alt="Marks distribution for course {id}">
<p><a href="/">Back</a></p>"#,
        id = escape(&summary.course_id),
        average = summary.average_marks,
        maximum = summary.maximum_marks,
        artifact = escape(artifact),
    );
    page("Course Marks", &body)
}

/// Error view used for bad input, lookup misses and load failures alike.
pub fn error_page(message: &str) -> String {
    let body = format!(
        r#"<h1>Error</h1>
<p>{}</p>
<p><a href="/">Back</a></p>"#,
        escape(message)
    );
    page("Error", &body)
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
        body = body,
    )
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
