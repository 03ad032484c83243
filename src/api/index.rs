//! The lookup dispatcher - `GET /` and `POST /`

use axum::{
    Form,
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{IndexParams, LookupForm, PageError};
use crate::api::views;
use crate::domain::{CourseSummary, LookupKind, QueryInput, StudentSummary};

/// GET / - the input form, or a lookup via `student_id`/`course_id` query
/// parameters.
pub async fn index_get(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<Response, PageError> {
    let input = params.into_query()?;
    dispatch(&state, input).await
}

/// POST / - form submission with an `ID` kind selector and an `id_value`.
pub async fn index_post(
    State(state): State<AppState>,
    Form(form): Form<LookupForm>,
) -> Result<Response, PageError> {
    let input = form.into_query()?;
    dispatch(&state, input).await
}

/// Drive one lookup: load, filter, aggregate, and for courses render the
/// histogram before selecting the view.
///
/// The table is re-read on every request. A missing source loads as an empty
/// table, so it reports as a lookup miss; the two cases are deliberately not
/// distinguished here.
async fn dispatch(state: &AppState, input: QueryInput) -> Result<Response, PageError> {
    let (kind, id) = match input {
        QueryInput::NoInput => return Ok(Html(views::index_page()).into_response()),
        QueryInput::Lookup { kind, id } => (kind, id),
    };

    debug!(?kind, id = %id, "dispatching lookup");
    let records = state.record_store.load().await?;
    let matches = kind.filter(&records, &id);

    match kind {
        LookupKind::Student => {
            let Some(summary) = StudentSummary::from_records(&id, matches) else {
                return Err(PageError::not_found(kind.not_found_message(&id)));
            };
            Ok(Html(views::student_page(&summary)).into_response())
        }
        LookupKind::Course => {
            let marks: Vec<i64> = matches.iter().map(|r| r.marks).collect();
            let Some(summary) = CourseSummary::from_marks(&id, &marks) else {
                return Err(PageError::not_found(kind.not_found_message(&id)));
            };
            let artifact = state.chart_renderer.render_histogram(&id, &marks)?;
            Ok(Html(views::course_page(&summary, &artifact)).into_response())
        }
    }
}
