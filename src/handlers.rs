use crate::errors::AppError;
use crate::models::{
    CreateGridRequest, Grid, GridResponse, ScheduleSpec, ToggleDateRequest, UpdateGridRequest,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::streaks::compute_streaks_at;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

pub async fn index() -> Html<String> {
    Html(render_index(&today_date().to_string()))
}

pub async fn list_grids(
    State(state): State<AppState>,
) -> Result<Json<Vec<GridResponse>>, AppError> {
    let today = today_date();
    let data = state.data.lock().await;
    let grids = data
        .grids
        .values()
        .map(|grid| with_stats(grid.clone(), today))
        .collect();
    Ok(Json(grids))
}

pub async fn create_grid(
    State(state): State<AppState>,
    Json(payload): Json<CreateGridRequest>,
) -> Result<Json<GridResponse>, AppError> {
    let title = validate_title(&payload.title)?;
    let schedule = ScheduleSpec {
        mode: payload.mode,
        weekly_goal: payload.weekly_goal,
        custom_days: payload.custom_days,
    };
    validate_schedule(&schedule)?;

    let now = now_millis();
    let grid = Grid {
        id: Uuid::new_v4().to_string(),
        title,
        schedule,
        completed_dates: BTreeSet::new(),
        created_at: now,
        updated_at: now,
    };

    let mut data = state.data.lock().await;
    data.grids.insert(grid.id.clone(), grid.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(with_stats(grid, today_date())))
}

pub async fn get_grid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GridResponse>, AppError> {
    let data = state.data.lock().await;
    let grid = data.grids.get(&id).cloned().ok_or_else(grid_not_found)?;
    Ok(Json(with_stats(grid, today_date())))
}

pub async fn update_grid(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGridRequest>,
) -> Result<Json<GridResponse>, AppError> {
    let mut data = state.data.lock().await;
    let current = data.grids.get(&id).ok_or_else(grid_not_found)?;

    let mut updated = current.clone();
    if let Some(title) = &payload.title {
        updated.title = validate_title(title)?;
    }
    if let Some(mode) = payload.mode {
        updated.schedule.mode = mode;
    }
    if let Some(goal) = payload.weekly_goal {
        updated.schedule.weekly_goal = Some(goal);
    }
    if let Some(days) = payload.custom_days {
        updated.schedule.custom_days = Some(days);
    }
    validate_schedule(&updated.schedule)?;
    updated.updated_at = now_millis();

    data.grids.insert(id, updated.clone());
    persist_data(&state.data_path, &data).await?;

    Ok(Json(with_stats(updated, today_date())))
}

pub async fn delete_grid(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.grids.remove(&id).is_none() {
        return Err(grid_not_found());
    }
    persist_data(&state.data_path, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_date(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ToggleDateRequest>,
) -> Result<Json<GridResponse>, AppError> {
    let parsed = NaiveDate::parse_from_str(payload.date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    let canonical = parsed.to_string();

    let mut data = state.data.lock().await;
    let grid = data.grids.get_mut(&id).ok_or_else(grid_not_found)?;
    if !grid.completed_dates.remove(&canonical) {
        grid.completed_dates.insert(canonical);
    }
    grid.updated_at = now_millis();
    let grid = grid.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(with_stats(grid, today_date())))
}

pub async fn mark_today(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GridResponse>, AppError> {
    let today = today_date();
    let mut data = state.data.lock().await;
    let grid = data.grids.get_mut(&id).ok_or_else(grid_not_found)?;
    grid.completed_dates.insert(today.to_string());
    grid.updated_at = now_millis();
    let grid = grid.clone();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(with_stats(grid, today)))
}

fn with_stats(grid: Grid, today: NaiveDate) -> GridResponse {
    let stats = compute_streaks_at(today, &grid.schedule, &grid.completed_dates);
    GridResponse { grid, stats }
}

fn grid_not_found() -> AppError {
    AppError::not_found("grid not found")
}

fn validate_title(raw: &str) -> Result<String, AppError> {
    let title = raw.trim();
    if title.is_empty() || title.len() > 100 {
        return Err(AppError::bad_request("title must be 1-100 characters"));
    }
    Ok(title.to_string())
}

fn validate_schedule(schedule: &ScheduleSpec) -> Result<(), AppError> {
    if let Some(goal) = schedule.weekly_goal {
        if !(1..=7).contains(&goal) {
            return Err(AppError::bad_request("weekly_goal must be 1-7"));
        }
    }
    if let Some(days) = &schedule.custom_days {
        if days.iter().any(|&day| day > 6) {
            return Err(AppError::bad_request("custom_days entries must be 0-6"));
        }
    }
    Ok(())
}

fn today_date() -> NaiveDate {
    Local::now().date_naive()
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
