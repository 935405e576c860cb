//! Activity heatmap over the trailing ~6 months.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::daily::DayRecord;

/// Days before today covered by the heatmap; the grid has this many + 1 cells.
pub const HEATMAP_LOOKBACK_DAYS: i64 = 180;

/// One calendar day in the heatmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
    /// Intensity bucket 0-4.
    pub level: u8,
}

impl HeatmapCell {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self {
            date,
            count,
            level: heat_level(count),
        }
    }

    /// Character for text rendering.
    pub fn heat_char(&self) -> char {
        match self.level {
            0 => '·',
            1 => '░',
            2 => '▒',
            3 => '▓',
            _ => '█',
        }
    }
}

/// Bucket a completed count: 0, 1-2, 3-4, 5-7, 8+.
pub fn heat_level(count: u32) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=4 => 2,
        5..=7 => 3,
        _ => 4,
    }
}

/// Contiguous cells from `today - 180 days` through `today`, oldest first.
pub fn generate_heatmap(daily_log: &[DayRecord], today: NaiveDate) -> Vec<HeatmapCell> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::with_capacity(daily_log.len());
    for record in daily_log {
        counts.entry(record.date).or_insert(record.completed_pomodoros);
    }

    (0..=HEATMAP_LOOKBACK_DAYS)
        .rev()
        .map(|offset| {
            let date = today - Duration::days(offset);
            HeatmapCell::new(date, counts.get(&date).copied().unwrap_or(0))
        })
        .collect()
}

/// Render cells as a GitHub-style grid: one row per weekday (Sunday first),
/// one column per week.
pub fn render_heatmap(cells: &[HeatmapCell]) -> String {
    const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

    let mut output = String::new();
    let Some(first) = cells.first() else {
        output.push_str("No activity data available.\n");
        return output;
    };

    // Pad the first column so each row lines up with its weekday.
    let lead = first.date.weekday().num_days_from_sunday() as usize;
    let columns = (lead + cells.len()).div_ceil(7);
    let mut grid = vec![vec![' '; columns]; 7];
    for (i, cell) in cells.iter().enumerate() {
        let slot = lead + i;
        grid[slot % 7][slot / 7] = cell.heat_char();
    }

    let total: u32 = cells.iter().map(|c| c.count).sum();
    let active_days = cells.iter().filter(|c| c.count > 0).count();
    output.push_str(&format!(
        "{} - {}: {} pomodoros on {} days\n",
        first.date,
        cells[cells.len() - 1].date,
        total,
        active_days
    ));

    for (day, row) in grid.iter().enumerate() {
        output.push_str(&format!("{:<4}", DAY_NAMES[day]));
        output.extend(row.iter());
        output.push('\n');
    }
    output.push_str("Legend: · (0) ░ (1-2) ▒ (3-4) ▓ (5-7) █ (8+)\n");
    output
}
