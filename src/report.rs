//! This file provides statistical calculations and the summary output.

use std::time::Duration;

/// Aggregate statistics over one completed batch of runs.
#[derive(Debug, Eq, PartialEq)]
pub struct Report {
    /// Wall-clock time from the earliest start to the latest finish.
    ///
    /// Not the sum of durations; in parallel mode runs overlap.
    pub total_span: Duration,
    pub fastest: Duration,
    pub slowest: Duration,
    pub average: Duration,
    pub median: Duration,
    /// Count of runs that exited with a non-zero code.
    pub error_count: usize,
}

impl Report {
    /// Statistical calculation and construction.
    ///
    /// The records must be complete; call this only after every run has
    /// finished.
    pub fn from_records(records: &[crate::runner::RunRecord]) -> Self {
        debug_assert!(!records.is_empty());

        let mut durations: Vec<Duration> = records.iter().map(|r| r.duration).collect();
        durations.sort();
        let count = durations.len();

        let sum: Duration = durations.iter().sum();
        // Both middle elements when even, the same element twice when odd.
        let mid = count / 2;
        let median = (durations[mid] + durations[count - 1 - mid]) / 2;

        let min_start = records.iter().filter_map(|r| r.started).min();
        let max_finish = records.iter().filter_map(|r| r.finished).max();
        let total_span = match (min_start, max_finish) {
            (Some(start), Some(finish)) => finish - start,
            _ => Duration::ZERO,
        };

        Self {
            total_span,
            fastest: durations[0],
            slowest: durations[count - 1],
            average: sum / count as u32,
            median,
            error_count: records.iter().filter(|r| r.is_error()).count(),
        }
    }

    /// Print the human-readable summary block.
    pub fn print(&self) {
        println!("Total time spent ........... {}", format_duration(self.total_span));
        println!("Fastest iteration .......... {}", format_duration(self.fastest));
        println!("Slowest iteration .......... {}", format_duration(self.slowest));
        println!("Average iteration .......... {}", format_duration(self.average));
        println!("Median iteration ........... {}", format_duration(self.median));
        if self.error_count > 0 {
            println!(
                "Attention! {} iteration(s) finished with non-zero exit code!",
                self.error_count
            );
        }
    }
}

/// Format a duration with a magnitude-dependent unit.
pub fn format_duration(duration: Duration) -> String {
    let val = duration.as_secs_f64();
    if val < 1.0 {
        format!("{} ms", round_precision(val * 1000.0, 3))
    } else if val < 60.0 {
        format!("{} sec", round_precision(val, 3))
    } else if val < 60.0 * 60.0 {
        let min = (val / 60.0).floor();
        format!("{:02}:{} sec", min, round_precision(val % 60.0, 3))
    } else {
        let hour = (val / 60.0 / 60.0).floor();
        let min = ((val - hour * 60.0 * 60.0) / 60.0).floor();
        format!(
            "{:02}:{:02}:{} sec",
            hour,
            min,
            round_precision(val % 60.0, 3)
        )
    }
}

fn round_precision(val: f64, precision: i32) -> f64 {
    let rank = 10f64.powi(precision);
    (val * rank).round() / rank
}
