use crate::errors::AppError;
use crate::models::{DayForm, DayResponse, IndexQuery, SelectDayRequest, Task};
use crate::state::AppState;
use crate::sync::{SyncOutcome, dispatch};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Form, Path, Query, State},
    response::{Html, Redirect},
};
use chrono::NaiveDate;
use tokio::task::JoinHandle;

/// Renders `?date=` when given, otherwise the selected day. Rendering never
/// moves the selection.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => state.selector.lock().await.selected(),
    };
    let store = state.store.lock().await;
    Ok(Html(render_index(date, store.get_tasks(date))))
}

// The navigation forms carry the date they were rendered for, so a stale page
// moves relative to what it shows.
pub async fn previous_day(
    State(state): State<AppState>,
    Form(form): Form<DayForm>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&form.date)?;
    let mut selector = state.selector.lock().await;
    selector.select(date);
    Ok(redirect_to_day(selector.previous_day()))
}

pub async fn next_day(
    State(state): State<AppState>,
    Form(form): Form<DayForm>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&form.date)?;
    let mut selector = state.selector.lock().await;
    selector.select(date);
    Ok(redirect_to_day(selector.next_day()))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path((date, task_id)): Path<(String, u64)>,
) -> Result<Redirect, AppError> {
    let date = parse_date(&date)?;
    apply_toggle(&state, date, task_id).await;
    Ok(redirect_to_day(date))
}

pub async fn get_day(State(state): State<AppState>) -> Json<DayResponse> {
    let date = state.selector.lock().await.selected();
    Json(day_response(&state, date).await)
}

pub async fn select_day(
    State(state): State<AppState>,
    Json(payload): Json<SelectDayRequest>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&payload.date)?;
    state.selector.lock().await.select(date);
    Ok(Json(day_response(&state, date).await))
}

pub async fn api_previous_day(State(state): State<AppState>) -> Json<DayResponse> {
    let date = state.selector.lock().await.previous_day();
    Json(day_response(&state, date).await)
}

pub async fn api_next_day(State(state): State<AppState>) -> Json<DayResponse> {
    let date = state.selector.lock().await.next_day();
    Json(day_response(&state, date).await)
}

pub async fn get_tasks(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(day_response(&state, date).await))
}

pub async fn api_toggle(
    State(state): State<AppState>,
    Path((date, task_id)): Path<(String, u64)>,
) -> Result<Json<DayResponse>, AppError> {
    let date = parse_date(&date)?;
    let (tasks, _) = apply_toggle(&state, date, task_id).await;
    Ok(Json(DayResponse {
        date: date.to_string(),
        tasks,
    }))
}

/// Flips the task's read flag, then forwards the task as it reads after the
/// flip. Unknown ids change nothing and forward nothing.
pub async fn apply_toggle(
    state: &AppState,
    date: NaiveDate,
    task_id: u64,
) -> (Vec<Task>, Option<JoinHandle<SyncOutcome>>) {
    let (tasks, updated) = {
        let mut store = state.store.lock().await;
        let tasks = store.toggle_read(date, task_id);
        (tasks, store.task(date, task_id).cloned())
    };

    let sync = updated.map(|task| dispatch(state.forwarder.clone(), task));
    (tasks, sync)
}

async fn day_response(state: &AppState, date: NaiveDate) -> DayResponse {
    let store = state.store.lock().await;
    DayResponse {
        date: date.to_string(),
        tasks: store.get_tasks(date).to_vec(),
    }
}

fn redirect_to_day(date: NaiveDate) -> Redirect {
    Redirect::to(&format!("/?date={date}"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    Ok(raw.trim().parse::<NaiveDate>()?)
}
