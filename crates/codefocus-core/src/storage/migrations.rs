//! Decoding of stored documents, including the legacy stats-only schema.
//!
//! Decoding never fails. Each field is read on its own and falls back to its
//! default when absent, `null`, or of the wrong JSON type, so documents
//! written before a field existed still load.
//!
//! Schema history:
//! - legacy (`codefocus-stats`): flat statistics fields with `goals` nested
//!   inside; no tasks or settings.
//! - v1 (`codefocus-app`): `{stats, tasks, settings, goals, version}`.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::clock::parse_date_key;
use crate::settings::Settings;
use crate::state::{PersistedState, CURRENT_VERSION};
use crate::stats::{AggregateStats, DayRecord, Goals, PersonalRecords};
use crate::task::Task;

type Object = Map<String, Value>;

/// Outcome of reading the two durable records.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredDocument {
    /// A parsable current-schema document, merged against defaults.
    Current(PersistedState),
    /// No usable current document; built from the legacy one. Must be
    /// written back under the current key.
    Legacy(PersistedState),
    /// Nothing usable in either record.
    Missing,
}

impl StoredDocument {
    pub fn into_state(self) -> PersistedState {
        match self {
            StoredDocument::Current(state) | StoredDocument::Legacy(state) => state,
            StoredDocument::Missing => PersistedState::default(),
        }
    }
}

/// Try the current schema, then the legacy one.
pub fn decode(current: Option<&str>, legacy: Option<&str>) -> StoredDocument {
    if let Some(state) = current.and_then(decode_current) {
        return StoredDocument::Current(state);
    }
    if let Some(state) = legacy.and_then(decode_legacy) {
        return StoredDocument::Legacy(state);
    }
    StoredDocument::Missing
}

fn parse_object(raw: &str, schema: &str) -> Option<Object> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(obj)) => Some(obj),
        Ok(other) => {
            tracing::warn!(schema, kind = json_kind(&other), "stored document is not an object");
            None
        }
        Err(e) => {
            tracing::warn!(schema, error = %e, "stored document is not valid JSON");
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decode a current-schema document.
pub fn decode_current(raw: &str) -> Option<PersistedState> {
    let obj = parse_object(raw, "current")?;
    Some(PersistedState {
        stats: merge_stats(object(&obj, "stats")),
        tasks: merge_list(&obj, "tasks", |v| Task::deserialize(v).ok()),
        settings: merge_settings(object(&obj, "settings")),
        goals: merge_goals(object(&obj, "goals")),
        version: field(&obj, "version").unwrap_or(CURRENT_VERSION),
    })
}

/// Decode a legacy stats-only document into the current schema.
pub fn decode_legacy(raw: &str) -> Option<PersistedState> {
    let obj = parse_object(raw, "legacy")?;
    Some(PersistedState {
        stats: merge_stats(Some(&obj)),
        // Tasks and settings were never persisted by the legacy schema.
        tasks: Vec::new(),
        settings: Settings::default(),
        goals: merge_goals(object(&obj, "goals")),
        version: CURRENT_VERSION,
    })
}

fn field<T: DeserializeOwned>(obj: &Object, key: &str) -> Option<T> {
    obj.get(key)
        .filter(|v| !v.is_null())
        .and_then(|v| T::deserialize(v).ok())
}

fn object<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}

/// Elements of an array field that decode; `[]` if the field is not an array.
fn merge_list<T>(obj: &Object, key: &str, decode: impl Fn(&Value) -> Option<T>) -> Vec<T> {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    let decoded: Vec<T> = items.iter().filter_map(decode).collect();
    if decoded.len() != items.len() {
        tracing::warn!(
            key,
            dropped = items.len() - decoded.len(),
            "dropped malformed entries from stored list"
        );
    }
    decoded
}

fn merge_day_record(value: &Value) -> Option<DayRecord> {
    let obj = value.as_object()?;
    let date = obj
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| parse_date_key(s).ok())?;
    Some(DayRecord {
        date,
        completed_pomodoros: field(obj, "completedPomodoros").unwrap_or(0),
        skipped_pomodoros: field(obj, "skippedPomodoros").unwrap_or(0),
        focus_minutes: field(obj, "focusMinutes").unwrap_or(0),
    })
}

fn merge_daily_log(obj: &Object) -> Vec<DayRecord> {
    let mut seen = HashSet::new();
    merge_list(obj, "dailyStats", merge_day_record)
        .into_iter()
        .filter(|r| seen.insert(r.date))
        .collect()
}

fn merge_personal_records(obj: Option<&Object>) -> PersonalRecords {
    let Some(obj) = obj else {
        return PersonalRecords::default();
    };
    PersonalRecords {
        best_day: field(obj, "mostProductiveDay").or_else(|| field(obj, "bestDay")),
        best_week: field(obj, "mostProductiveWeek").or_else(|| field(obj, "bestWeek")),
    }
}

pub(crate) fn merge_stats(obj: Option<&Object>) -> AggregateStats {
    let Some(obj) = obj else {
        return AggregateStats::default();
    };
    let defaults = AggregateStats::default();
    AggregateStats {
        current_streak: field(obj, "currentStreak").unwrap_or(defaults.current_streak),
        longest_streak: field(obj, "longestStreak").unwrap_or(defaults.longest_streak),
        total_focus_minutes: field(obj, "totalFocusMinutes").unwrap_or(defaults.total_focus_minutes),
        total_pomodoros: field(obj, "totalPomodoros").unwrap_or(defaults.total_pomodoros),
        daily_stats: merge_daily_log(obj),
        last_active_date: field(obj, "lastActiveDate"),
        personal_records: merge_personal_records(object(obj, "personalRecords")),
    }
}

pub(crate) fn merge_settings(obj: Option<&Object>) -> Settings {
    let defaults = Settings::default();
    let Some(obj) = obj else {
        return defaults;
    };
    Settings {
        pomodoro: field(obj, "pomodoro").unwrap_or(defaults.pomodoro),
        short_break: field(obj, "shortBreak").unwrap_or(defaults.short_break),
        long_break: field(obj, "longBreak").unwrap_or(defaults.long_break),
        auto_start_breaks: field(obj, "autoStartBreaks").unwrap_or(defaults.auto_start_breaks),
        auto_start_pomodoros: field(obj, "autoStartPomodoros").unwrap_or(defaults.auto_start_pomodoros),
        long_break_interval: field(obj, "longBreakInterval").unwrap_or(defaults.long_break_interval),
    }
}

pub(crate) fn merge_goals(obj: Option<&Object>) -> Goals {
    let Some(obj) = obj else {
        return Goals::default();
    };
    Goals {
        daily_pomodoros: field(obj, "dailyPomodoros"),
        weekly_pomodoros: field(obj, "weeklyPomodoros"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn nothing_stored_is_missing() {
        assert_eq!(decode(None, None), StoredDocument::Missing);
        assert_eq!(decode(None, None).into_state(), PersistedState::default());
    }

    #[test]
    fn corrupt_current_falls_through_to_legacy() {
        let legacy = json!({"totalPomodoros": 3, "goals": {"dailyPomodoros": 4}}).to_string();
        match decode(Some("{not json"), Some(&legacy)) {
            StoredDocument::Legacy(state) => {
                assert_eq!(state.stats.total_pomodoros, 3);
                assert_eq!(state.goals.daily_pomodoros, Some(4));
            }
            other => panic!("expected legacy, got {other:?}"),
        }
    }

    #[test]
    fn non_object_documents_are_unusable() {
        assert_eq!(decode(Some("null"), Some("42")), StoredDocument::Missing);
        assert_eq!(decode(Some("[]"), None), StoredDocument::Missing);
    }

    #[test]
    fn current_wins_over_legacy() {
        let current = json!({"stats": {"totalPomodoros": 9}}).to_string();
        let legacy = json!({"totalPomodoros": 3}).to_string();
        match decode(Some(&current), Some(&legacy)) {
            StoredDocument::Current(state) => assert_eq!(state.stats.total_pomodoros, 9),
            other => panic!("expected current, got {other:?}"),
        }
    }

    #[test]
    fn empty_object_loads_all_defaults() {
        assert_eq!(decode_current("{}").unwrap(), PersistedState::default());
    }

    #[test]
    fn wrong_shapes_fall_back_per_field() {
        let raw = json!({
            "stats": {"currentStreak": "three", "longestStreak": 5, "dailyStats": {"a": 1}},
            "tasks": "none",
            "settings": {"pomodoro": 50, "shortBreak": -1, "autoStartBreaks": "yes"},
            "goals": {"dailyPomodoros": 6, "weeklyPomodoros": "lots"},
            "version": "one"
        })
        .to_string();
        let state = decode_current(&raw).unwrap();
        assert_eq!(state.stats.current_streak, 0);
        assert_eq!(state.stats.longest_streak, 5);
        assert!(state.stats.daily_stats.is_empty());
        assert!(state.tasks.is_empty());
        assert_eq!(state.settings.pomodoro, 50);
        assert_eq!(state.settings.short_break, 5);
        assert!(!state.settings.auto_start_breaks);
        assert_eq!(state.goals.daily_pomodoros, Some(6));
        assert_eq!(state.goals.weekly_pomodoros, None);
        assert_eq!(state.version, CURRENT_VERSION);
    }

    #[test]
    fn malformed_day_records_are_dropped() {
        let raw = json!({"stats": {"dailyStats": [
            {"date": "2024-01-10", "completedPomodoros": 2, "skippedPomodoros": 0, "focusMinutes": 50},
            {"date": "yesterday", "completedPomodoros": 1},
            {"date": "2024-01-11", "completedPomodoros": 1},
            {"date": "2024-01-10", "completedPomodoros": 7},
            17
        ]}})
        .to_string();
        let log = decode_current(&raw).unwrap().stats.daily_stats;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].completed_pomodoros, 2);
        assert_eq!(log[1].date, d("2024-01-11"));
        assert_eq!(log[1].focus_minutes, 0);
    }

    #[test]
    fn missing_goals_default_to_unset() {
        let raw = json!({"stats": {}, "tasks": [], "settings": {}, "version": 1}).to_string();
        assert_eq!(decode_current(&raw).unwrap().goals, Goals::default());
    }

    #[test]
    fn legacy_personal_records_and_goals() {
        let legacy = json!({
            "currentStreak": 2,
            "longestStreak": 4,
            "totalFocusMinutes": 100,
            "totalPomodoros": 4,
            "dailyStats": [{"date": "2024-01-10", "completedPomodoros": 4, "skippedPomodoros": 1, "focusMinutes": 100}],
            "lastActiveDate": "2024-01-10",
            "personalRecords": {"mostProductiveDay": {"date": "2024-01-10", "pomodoros": 4}},
            "goals": {"dailyPomodoros": 4, "weeklyPomodoros": 20}
        })
        .to_string();
        let state = decode_legacy(&legacy).unwrap();
        assert_eq!(state.stats.longest_streak, 4);
        assert_eq!(state.stats.last_active_date, Some(d("2024-01-10")));
        assert_eq!(state.stats.personal_records.best_day.unwrap().pomodoros, 4);
        assert_eq!(state.stats.personal_records.best_week, None);
        assert_eq!(state.goals.weekly_pomodoros, Some(20));
        assert!(state.tasks.is_empty());
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn malformed_tasks_are_dropped() {
        let raw = json!({"tasks": [
            {"id": "a", "title": "ok", "estimatedPomodoros": 2, "completedPomodoros": 0,
             "completed": false, "createdAt": "2024-01-10T09:00:00.000Z"},
            {"id": "b"}
        ]})
        .to_string();
        let tasks = decode_current(&raw).unwrap().tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "a");
    }
}
