use crate::aggregate::CategoryAggregate;
use crate::analytics::{Dispatch, RenderTicket, View, render_category_chart};
use crate::drill::Intent;
use crate::errors::AppError;
use crate::models::{
    AppData, BulkEntryRequest, BulkResponse, CalendarQuery, CreatedResponse, CustomTemplate,
    Decrement, DecrementQuery, DecrementResponse, Entry, EntryQuery, IndexQuery, IntentRequest, MAX_SCORE,
    NewEntryRequest, OptionsQuery, RangeQuery, SearchQuery, TemplateRequest, UserData,
};
use crate::phrase::{PhraseBubble, aggregate_phrases};
use crate::range::{DateRange, RangeKind, date_key, parse_date};
use crate::state::AppState;
use crate::stats::{CalendarMonth, TrendChart, build_calendar, build_trend, is_editable};
use crate::storage::{EntryStore, persist_data};
use crate::taxonomy;
use crate::templates::{
    TemplateOption, UsageRecord, dedupe_bulk_items, template_options, usage_history,
};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, info, warn};

const DEFAULT_USER: &str = "default";

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Html<String>, AppError> {
    let user = query.user.unwrap_or_else(|| DEFAULT_USER.to_string());
    let user = validate_user(&user)?;
    let date = today_string();
    let data = state.data.lock().await;
    let entries = match data.users.get(user) {
        Some(user_data) => user_data.entries_by_date(&date)?,
        None => Vec::new(),
    };
    let categories: Vec<CategoryAggregate> = render_category_chart(&entries);
    Ok(Html(render_index(user, &date, &entries, &categories)))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<EntryQuery>,
) -> Result<Json<Vec<Entry>>, AppError> {
    let user = validate_user(&user)?.to_string();
    let data = state.data.lock().await;
    let Some(user_data) = data.users.get(&user) else {
        return Ok(Json(Vec::new()));
    };

    let entries = match (query.date, query.start, query.end) {
        (Some(date), _, _) => user_data.entries_by_date(&date_key(parse_date(&date)?))?,
        (None, Some(start), Some(end)) => {
            let (start, end) = (parse_date(&start)?, parse_date(&end)?);
            if start > end {
                return Err(AppError::bad_request("start must not be after end"));
            }
            user_data.entries_by_date_range(&date_key(start), &date_key(end))?
        }
        (None, None, None) => user_data.list_entries()?,
        _ => return Err(AppError::bad_request("start and end must be given together")),
    };
    Ok(Json(entries))
}

pub async fn add_entry(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<Json<Entry>, AppError> {
    let user = validate_user(&user)?.to_string();
    let name = validate_name(&payload.name)?;
    validate_score(payload.score)?;
    let date = editable_date(&state, &payload.date)?;

    let mut data = state.data.lock().await;
    let entry = user_mut(&mut data, &user).add_entry(name, &date, payload.score)?;
    persist_data(&state.config.data_path, &data).await?;

    info!(user = %user, id = entry.id, date = %entry.date, "entry added");
    Ok(Json(entry))
}

pub async fn bulk_add(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<BulkEntryRequest>,
) -> Result<Json<BulkResponse>, AppError> {
    let user = validate_user(&user)?.to_string();
    let date = editable_date(&state, &payload.date)?;
    let items = dedupe_bulk_items(payload.items);
    for item in &items {
        validate_score(item.score)?;
    }

    let mut data = state.data.lock().await;
    let user_data = user_mut(&mut data, &user);
    let mut created = Vec::with_capacity(items.len());
    for item in &items {
        created.push(user_data.add_entry(&item.name, &date, item.score)?);
    }
    persist_data(&state.config.data_path, &data).await?;

    info!(user = %user, date = %date, count = created.len(), "entries copied");
    Ok(Json(BulkResponse { created }))
}

pub async fn increment_entry(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<Json<Entry>, AppError> {
    let user = validate_user(&user)?.to_string();
    let mut data = state.data.lock().await;
    let user_data = existing_user_mut(&mut data, &user)?;
    let mut entry = user_data.get_entry(id)?;
    editable_date(&state, &entry.date)?;

    entry.increment()?;
    user_data.update_entry(&entry)?;
    persist_data(&state.config.data_path, &data).await?;

    debug!(user = %user, id, count = entry.count, "entry incremented");
    Ok(Json(entry))
}

pub async fn decrement_entry(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
    Query(query): Query<DecrementQuery>,
) -> Result<Json<DecrementResponse>, AppError> {
    let user = validate_user(&user)?.to_string();
    let mut data = state.data.lock().await;
    let user_data = existing_user_mut(&mut data, &user)?;
    let mut entry = user_data.get_entry(id)?;
    editable_date(&state, &entry.date)?;

    let response = match entry.decrement() {
        Decrement::Decremented => {
            user_data.update_entry(&entry)?;
            DecrementResponse::Updated { entry }
        }
        Decrement::NeedsDeletion if query.confirm => {
            user_data.delete_entry(id)?;
            info!(user = %user, id, "entry deleted on decrement");
            DecrementResponse::Deleted { id }
        }
        Decrement::NeedsDeletion => {
            return Ok(Json(DecrementResponse::ConfirmationRequired { entry }));
        }
    };
    persist_data(&state.config.data_path, &data).await?;
    Ok(Json(response))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<Json<DecrementResponse>, AppError> {
    let user = validate_user(&user)?.to_string();
    let mut data = state.data.lock().await;
    existing_user_mut(&mut data, &user)?.delete_entry(id)?;
    persist_data(&state.config.data_path, &data).await?;

    info!(user = %user, id, "entry deleted");
    Ok(Json(DecrementResponse::Deleted { id }))
}

pub async fn list_templates(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<CustomTemplate>>, AppError> {
    let user = validate_user(&user)?.to_string();
    let data = state.data.lock().await;
    let templates = data
        .users
        .get(&user)
        .map(|user_data| user_data.templates.clone())
        .unwrap_or_default();
    Ok(Json(templates))
}

pub async fn save_template(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<TemplateRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let user = validate_user(&user)?.to_string();
    let name = validate_name(&payload.name)?;
    validate_score(payload.score)?;

    let mut data = state.data.lock().await;
    let template = user_mut(&mut data, &user).upsert_template(name, payload.score);
    persist_data(&state.config.data_path, &data).await?;

    info!(user = %user, id = template.id, "template saved");
    Ok(Json(CreatedResponse { id: template.id }))
}

pub async fn list_template_options(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<Vec<TemplateOption>>, AppError> {
    let user = validate_user(&user)?.to_string();
    let data = state.data.lock().await;
    let custom: &[CustomTemplate] = data
        .users
        .get(&user)
        .map(|user_data| user_data.templates.as_slice())
        .unwrap_or(&[]);
    Ok(Json(template_options(query.source, custom, &query.q)))
}

pub async fn history(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<UsageRecord>>, AppError> {
    let user = validate_user(&user)?.to_string();
    let data = state.data.lock().await;
    let entries = match data.users.get(&user) {
        Some(user_data) => user_data.list_entries()?,
        None => Vec::new(),
    };
    Ok(Json(usage_history(&entries, &query.q)))
}

pub async fn trend(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<TrendChart>, AppError> {
    let user = validate_user(&user)?.to_string();
    let anchor = anchor_date(query.date.as_deref())?;
    let kind = if query.range == RangeKind::Day { RangeKind::Week } else { query.range };
    let entries = load_range(&state, &user, DateRange::resolve(kind, anchor)).await;
    Ok(Json(build_trend(kind, anchor, &entries)))
}

pub async fn calendar(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>, AppError> {
    let user = validate_user(&user)?.to_string();
    let today = Local::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;

    let entries = load_range(&state, &user, DateRange::resolve(RangeKind::Month, first)).await;
    build_calendar(year, month, &entries, state.config.edit_window_days)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))
}

pub async fn category_chart(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<View>, AppError> {
    let user = validate_user(&user)?.to_string();
    let range = DateRange::resolve(query.range, anchor_date(query.date.as_deref())?);
    let view = run_intent(&state, &user, Intent::ChangeRange(range)).await?;
    Ok(Json(view))
}

pub async fn dispatch(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<IntentRequest>,
) -> Result<Json<View>, AppError> {
    let user = validate_user(&user)?.to_string();
    let intent = resolve_intent(payload)?;
    let view = run_intent(&state, &user, intent).await?;
    Ok(Json(view))
}

pub async fn phrase_chart(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<PhraseBubble>>, AppError> {
    let user = validate_user(&user)?.to_string();
    let range = DateRange::resolve(query.range, anchor_date(query.date.as_deref())?);
    let entries = load_range(&state, &user, range).await;
    Ok(Json(aggregate_phrases(&entries)))
}

/// Feeds an intent to the user's session. Range changes release the session
/// lock while entries load and only commit if nothing newer happened since.
async fn run_intent(state: &AppState, user: &str, intent: Intent) -> Result<View, AppError> {
    let dispatch = {
        let mut sessions = state.sessions.lock().await;
        sessions.entry(user.to_string()).or_default().dispatch(intent)
    };

    let ticket: RenderTicket = match dispatch {
        Dispatch::Render(view) => return Ok(view),
        Dispatch::Fetch(ticket) => ticket,
    };
    let entries = load_range(state, user, ticket.range()).await;

    let mut sessions = state.sessions.lock().await;
    sessions
        .entry(user.to_string())
        .or_default()
        .commit_range(ticket, entries)
        .ok_or_else(|| AppError::conflict("analytics view changed while loading"))
}

fn resolve_intent(request: IntentRequest) -> Result<Intent, AppError> {
    Ok(match request {
        IntentRequest::ChangeRange { range, date } => {
            Intent::ChangeRange(DateRange::resolve(range, anchor_date(date.as_deref())?))
        }
        IntentRequest::SelectCategory { category } => Intent::SelectCategory(
            taxonomy::find(&category)
                .ok_or_else(|| AppError::bad_request(format!("unknown category: {category}")))?,
        ),
        IntentRequest::SelectTask { task } => Intent::SelectTask(task),
        IntentRequest::Back => Intent::Back,
    })
}

/// Entries in `range`; a failing store is logged and read as empty.
async fn load_range(state: &AppState, user: &str, range: DateRange) -> Vec<Entry> {
    let data = state.data.lock().await;
    let Some(user_data) = data.users.get(user) else {
        return Vec::new();
    };
    user_data
        .entries_by_date_range(&range.start_key(), &range.end_key())
        .unwrap_or_else(|err| {
            warn!(user = %user, "failed to load entries: {err}");
            Vec::new()
        })
}

fn user_mut<'a>(data: &'a mut AppData, user: &str) -> &'a mut UserData {
    data.users.entry(user.to_string()).or_default()
}

fn existing_user_mut<'a>(data: &'a mut AppData, user: &str) -> Result<&'a mut UserData, AppError> {
    data.users
        .get_mut(user)
        .ok_or_else(|| AppError::not_found(format!("no entries for user {user}")))
}

fn validate_user(user: &str) -> Result<&str, AppError> {
    let user = user.trim();
    if user.is_empty() {
        return Err(AppError::bad_request("user must not be empty"));
    }
    Ok(user)
}

fn validate_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::bad_request("name must not be empty"));
    }
    Ok(name)
}

fn validate_score(score: i64) -> Result<(), AppError> {
    if !(1..=MAX_SCORE).contains(&score) {
        return Err(AppError::bad_request(format!(
            "score must be between 1 and {MAX_SCORE}"
        )));
    }
    Ok(())
}

/// Parses `value` and checks it lies in the editable window.
fn editable_date(state: &AppState, value: &str) -> Result<String, AppError> {
    let date = parse_date(value)?;
    if !is_editable(date, state.config.edit_window_days) {
        return Err(AppError::bad_request(format!(
            "{value} is outside the editable window"
        )));
    }
    Ok(date_key(date))
}

fn anchor_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    match value {
        Some(value) => parse_date(value),
        None => Ok(Local::now().date_naive()),
    }
}

fn today_string() -> String {
    date_key(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_resolve_category_names_case_insensitively() {
        let intent = resolve_intent(IntentRequest::SelectCategory {
            category: "physical health".into(),
        })
        .unwrap();
        assert!(matches!(intent, Intent::SelectCategory(category) if category.name == "Physical Health"));
    }

    #[test]
    fn unknown_category_is_a_bad_request() {
        let err = resolve_intent(IntentRequest::SelectCategory {
            category: "Astrology".into(),
        })
        .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn change_range_uses_the_given_anchor() {
        let intent = resolve_intent(IntentRequest::ChangeRange {
            range: RangeKind::Month,
            date: Some("2026-02-14".into()),
        })
        .unwrap();
        let Intent::ChangeRange(range) = intent else {
            panic!("expected a range change");
        };
        assert_eq!(range.start_key(), "2026-02-01");
        assert_eq!(range.end_key(), "2026-02-28");
    }

    #[tokio::test]
    async fn user_segments_are_trimmed_before_lookup() {
        let mut data_path = std::env::temp_dir();
        data_path.push(format!("positive_log_handlers_{}.json", std::process::id()));
        let config = crate::config::Config {
            data_path: data_path.clone(),
            ..Default::default()
        };
        let state = AppState::new(config, AppData::default());

        let request = NewEntryRequest {
            name: "Read a book".into(),
            date: today_string(),
            score: 2,
        };
        add_entry(State(state.clone()), Path(" bob ".to_string()), Json(request))
            .await
            .unwrap();

        let Json(entries) = list_entries(
            State(state.clone()),
            Path("bob".to_string()),
            Query(EntryQuery { date: None, start: None, end: None }),
        )
        .await
        .unwrap();
        assert_eq!(entries.len(), 1);
        assert!(state.data.lock().await.users.contains_key("bob"));
        let _ = std::fs::remove_file(&data_path);
    }

    #[test]
    fn names_and_scores_are_validated() {
        assert_eq!(validate_name("  Read a book ").unwrap(), "Read a book");
        assert!(validate_name("   ").is_err());
        assert!(validate_score(0).is_err());
        assert!(validate_score(3).is_ok());
        assert!(validate_score(MAX_SCORE).is_ok());
        assert!(validate_score(MAX_SCORE + 1).is_err());
        assert!(validate_score(i64::MAX).is_err());
        assert!(validate_user(" ").is_err());
    }
}
