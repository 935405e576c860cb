//! Integration tests for the statistics engine.
//!
//! This test file verifies:
//! - Streak scenarios across gaps and the one-day grace period
//! - Focus score, level, and goal progress on realistic logs
//! - Heatmap shape independent of log sparsity
//! - Mutation invariants over random event sequences

use chrono::{Duration, NaiveDate};
use codefocus_core::{
    apply_completed_pomodoro, apply_skipped_pomodoro, compute_focus_score, compute_goal_progress,
    compute_level, compute_personal_records, compute_streak, generate_heatmap, today_record,
    AggregateStats, DayRecord, Goals, LevelName,
};
use proptest::prelude::*;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn completed(date: &str, n: u32) -> DayRecord {
    DayRecord {
        date: d(date),
        completed_pomodoros: n,
        skipped_pomodoros: 0,
        focus_minutes: n * 25,
    }
}

#[test]
fn test_streak_scenario_with_gap() {
    let today = d("2024-01-12");
    let log = vec![
        completed("2024-01-10", 1),
        completed("2024-01-11", 1),
        completed("2024-01-12", 1),
    ];
    assert_eq!(compute_streak(&log, today), 3);

    let without_middle: Vec<DayRecord> = log
        .iter()
        .filter(|r| r.date != d("2024-01-11"))
        .cloned()
        .collect();
    assert_eq!(compute_streak(&without_middle, today), 1);
}

#[test]
fn test_inactive_today_and_yesterday_means_no_streak() {
    let mut log = vec![completed("2024-01-05", 3), completed("2024-01-06", 2)];
    // Zero-completion records for today and yesterday do not count
    log.push(DayRecord {
        skipped_pomodoros: 2,
        ..completed("2024-01-11", 0)
    });
    log.push(completed("2024-01-12", 0));
    assert_eq!(compute_streak(&log, d("2024-01-12")), 0);
}

#[test]
fn test_full_week_of_activity() {
    let mut stats = AggregateStats::default();
    let start = d("2024-01-07");
    for offset in 0..7 {
        let day = start + Duration::days(offset);
        for _ in 0..=offset {
            stats = apply_completed_pomodoro(&stats, 25, day);
        }
    }
    stats = apply_skipped_pomodoro(&stats, d("2024-01-13"));

    let today = d("2024-01-13");
    assert_eq!(stats.current_streak, 7);
    assert_eq!(stats.longest_streak, 7);
    assert_eq!(stats.total_pomodoros, 28);
    assert_eq!(stats.total_focus_minutes, 700);

    let records = stats.personal_records.clone();
    assert_eq!(records.best_day.unwrap().date, today);
    let week = records.best_week.unwrap();
    assert_eq!(week.start_date, start);
    assert_eq!(week.pomodoros, 28);
    assert_eq!(compute_personal_records(&stats.daily_stats), stats.personal_records);

    // 7 completed, 1 skipped today: round(87.5) = 88, plus both streak bonuses
    let record = today_record(&stats.daily_stats, today);
    assert_eq!(compute_focus_score(&record, stats.current_streak), 98);

    let goals = Goals {
        daily_pomodoros: Some(14),
        weekly_pomodoros: Some(56),
    };
    let progress = compute_goal_progress(&stats.daily_stats, &goals, today);
    assert_eq!(progress.daily.percentage, Some(50.0));
    assert_eq!(progress.weekly.current, 28);
    assert_eq!(progress.weekly.percentage, Some(50.0));

    let level = compute_level(stats.total_focus_minutes);
    assert_eq!(level.name, LevelName::Apprentice);
    assert_eq!(level.progress, 44.0);
}

#[test]
fn test_focus_score_examples() {
    let today = DayRecord {
        skipped_pomodoros: 1,
        ..completed("2024-01-12", 3)
    };
    assert_eq!(compute_focus_score(&today, 7), 85);
    assert_eq!(compute_focus_score(&completed("2024-01-12", 0), 9), 100);
}

#[test]
fn test_level_boundaries() {
    assert_eq!(compute_level(0).tier, 1);
    assert_eq!(compute_level(25 * 60).tier, 2);
    assert_eq!(compute_level(100 * 60).tier, 3);
    let top = compute_level(500 * 60);
    assert_eq!(top.tier, 4);
    assert_eq!(top.next_tier, None);
}

#[test]
fn test_heatmap_spans_181_days() {
    let today = d("2024-03-01");
    let log = vec![completed("2024-02-29", 4), completed("2023-09-03", 9)];
    let cells = generate_heatmap(&log, today);
    assert_eq!(cells.len(), 181);
    assert_eq!(cells.first().unwrap().date, d("2023-09-03"));
    assert_eq!(cells.first().unwrap().level, 4);
    assert_eq!(cells.last().unwrap().date, today);
    assert_eq!(cells[179].count, 4);
    assert_eq!(cells[179].level, 2);
}

fn arb_log() -> impl Strategy<Value = Vec<DayRecord>> {
    let base = d("2024-01-01");
    prop::collection::btree_map(0i64..400, (0u32..12, 0u32..4), 0..60).prop_map(move |days| {
        days.into_iter()
            .map(|(offset, (done, skipped))| DayRecord {
                date: base + Duration::days(offset),
                completed_pomodoros: done,
                skipped_pomodoros: skipped,
                focus_minutes: done * 25,
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Event {
    Completed { minutes: u32, day: i64 },
    Skipped { day: i64 },
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    let event = prop_oneof![
        (1u32..90, 0i64..3).prop_map(|(minutes, day)| Event::Completed { minutes, day }),
        (0i64..3).prop_map(|day| Event::Skipped { day }),
    ];
    prop::collection::vec(event, 0..40)
}

proptest! {
    #[test]
    fn streak_is_deterministic(log in arb_log(), today_offset in 0i64..420) {
        let today = d("2024-01-01") + Duration::days(today_offset);
        prop_assert_eq!(compute_streak(&log, today), compute_streak(&log, today));
    }

    #[test]
    fn heatmap_is_contiguous(log in arb_log(), today_offset in 0i64..420) {
        let today = d("2024-01-01") + Duration::days(today_offset);
        let cells = generate_heatmap(&log, today);
        prop_assert_eq!(cells.len(), 181);
        prop_assert_eq!(cells[0].date, today - Duration::days(180));
        for pair in cells.windows(2) {
            prop_assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
        prop_assert_eq!(cells[180].date, today);
    }

    #[test]
    fn mutations_keep_invariants(events in arb_events()) {
        // Days only move forward, as a real clock would.
        let mut stats = AggregateStats::default();
        let mut today = d("2024-01-01");
        for event in events {
            let before = stats.clone();
            match event {
                Event::Completed { minutes, day } => {
                    today += Duration::days(day);
                    stats = apply_completed_pomodoro(&stats, minutes, today);
                    prop_assert_eq!(stats.total_pomodoros, before.total_pomodoros + 1);
                    prop_assert_eq!(stats.total_focus_minutes, before.total_focus_minutes + u64::from(minutes));
                }
                Event::Skipped { day } => {
                    today += Duration::days(day);
                    stats = apply_skipped_pomodoro(&stats, today);
                    prop_assert_eq!(stats.total_pomodoros, before.total_pomodoros);
                    prop_assert_eq!(stats.total_focus_minutes, before.total_focus_minutes);
                    prop_assert_eq!(stats.current_streak, before.current_streak);
                    prop_assert_eq!(stats.longest_streak, before.longest_streak);
                }
            }
            prop_assert!(stats.longest_streak >= stats.current_streak);
            prop_assert!(stats.longest_streak >= before.longest_streak);
            prop_assert_eq!(stats.last_active_date, Some(today));

            let mut dates: Vec<_> = stats.daily_stats.iter().map(|r| r.date).collect();
            dates.sort();
            dates.dedup();
            prop_assert_eq!(dates.len(), stats.daily_stats.len());
        }
    }
}
