//! Run output: CSV rows and a convergence summary.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::DdaResult;
use crate::mechanics::{Adjustment, classify};
use crate::simulation::RoundRecord;

pub const CSV_HEADER: [&str; 8] = [
    "challenge_level",
    "difference",
    "difficulty",
    "random_value",
    "won",
    "old_estimated_level",
    "new_estimated_level",
    "temporary_levels",
];

/// `[a b c]`, the way the window is written into the last column.
pub fn render_levels(levels: &[i32]) -> String {
    let inner: Vec<String> = levels.iter().map(i32::to_string).collect();
    format!("[{}]", inner.join(" "))
}

/// One CSV line (no trailing newline) for a record.
pub fn csv_row(r: &RoundRecord) -> String {
    format!(
        "{},{},{:.2},{:.2},{},{:.2},{:.2},{}",
        r.challenge_level,
        r.difference,
        r.difficulty,
        r.random_value,
        r.won,
        r.estimated_level_before,
        r.estimated_level_after,
        render_levels(&r.temporary_levels),
    )
}

/// Header plus one line per record.
pub fn write_csv<W: Write>(records: &[RoundRecord], mut out: W) -> DdaResult<()> {
    writeln!(out, "{}", CSV_HEADER.join(","))?;
    for r in records {
        writeln!(out, "{}", csv_row(r))?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_csv_file(records: &[RoundRecord], path: &Path) -> DdaResult<()> {
    let file = File::create(path)?;
    write_csv(records, BufWriter::new(file))
}

/// How a run approached the actual level.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvergenceSummary {
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub hard_wins: usize,
    pub easy_losses: usize,
    pub final_estimate: Option<f64>,
    /// Mean of `estimated_level_after` over the last `tail` rounds (or all, if fewer).
    pub tail_mean: Option<f64>,
    /// `|tail_mean - actual_level|`.
    pub tail_error: Option<f64>,
    /// First round from which every later estimate stays within `tolerance`.
    pub settled_at: Option<usize>,
}

impl ConvergenceSummary {
    pub fn from_records(
        records: &[RoundRecord],
        actual_level: i32,
        tail: usize,
        tolerance: f64,
    ) -> Self {
        let wins = records.iter().filter(|r| r.won).count();
        let (mut hard_wins, mut easy_losses) = (0, 0);
        for r in records {
            match classify(r.challenge_level, r.estimated_level_before, r.won) {
                Adjustment::HardWin => hard_wins += 1,
                Adjustment::EasyLoss => easy_losses += 1,
                Adjustment::Expected => {}
            }
        }

        let tail_mean = tail_mean(records, tail);
        let actual = f64::from(actual_level);

        // Walk backwards while the estimate is inside the band.
        let settled_at = records
            .iter()
            .rposition(|r| (r.estimated_level_after - actual).abs() > tolerance)
            .map_or(Some(0), |i| (i + 1 < records.len()).then_some(i + 1))
            .filter(|_| !records.is_empty());

        Self {
            rounds: records.len(),
            wins,
            losses: records.len() - wins,
            hard_wins,
            easy_losses,
            final_estimate: records.last().map(|r| r.estimated_level_after),
            tail_mean,
            tail_error: tail_mean.map(|m| (m - actual).abs()),
            settled_at,
        }
    }

    /// Tail mean within `tolerance` of the actual level.
    pub fn converged(&self, tolerance: f64) -> bool {
        self.tail_error.is_some_and(|e| e <= tolerance)
    }

    pub fn win_rate(&self) -> Option<f64> {
        (self.rounds > 0).then(|| self.wins as f64 / self.rounds as f64)
    }
}

/// Mean of the last `tail` post-update estimates; `None` for no records or `tail == 0`.
pub fn tail_mean(records: &[RoundRecord], tail: usize) -> Option<f64> {
    let n = tail.min(records.len());
    if n == 0 {
        return None;
    }
    let sum: f64 = records[records.len() - n..]
        .iter()
        .map(|r| r.estimated_level_after)
        .sum();
    Some(sum / n as f64)
}
