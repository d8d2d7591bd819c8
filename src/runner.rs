//! This file executes the configured command and records per-run timings.

use anyhow::Context;
use std::io::Write;

/// Exit status of one run.
///
/// `Pending` marks a slot whose run never happened; it is distinct from a
/// successful exit so an aborted batch cannot masquerade as a clean one.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum RunStatus {
    Pending,
    Exited(i32),
}

/// Timing record of one run, owned exclusively by that run until completion.
#[derive(Debug)]
pub struct RunRecord {
    pub index: usize,
    pub status: RunStatus,
    pub started: Option<std::time::Instant>,
    pub finished: Option<std::time::Instant>,
    pub duration: std::time::Duration,
}

impl RunRecord {
    fn new(index: usize) -> Self {
        Self {
            index,
            status: RunStatus::Pending,
            started: None,
            finished: None,
            duration: std::time::Duration::ZERO,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, RunStatus::Exited(code) if code != 0)
    }
}

/// Execute the command the configured number of times and return all records.
///
/// Returns only after every run has completed, so the records are safe to
/// aggregate. Child exit codes are data, not errors; only a failure to start
/// the shell itself propagates.
pub fn run(config: &crate::config::RunConfig) -> anyhow::Result<Vec<RunRecord>> {
    let mut records: Vec<RunRecord> = (0..config.runs).map(RunRecord::new).collect();

    println!(
        "Executing command '{}' {} times with {} sec pause in {} mode:",
        config.command, config.runs, config.pause_secs, config.mode
    );
    match config.mode {
        crate::config::Mode::Sequential => run_sequential(config, &mut records)?,
        crate::config::Mode::Parallel => run_parallel(config, &mut records)?,
    }

    Ok(records)
}

fn run_sequential(
    config: &crate::config::RunConfig,
    records: &mut [RunRecord],
) -> anyhow::Result<()> {
    let runs = records.len();
    for (i, record) in records.iter_mut().enumerate() {
        print!("starting iteration {}... ", i + 1);
        std::io::stdout().flush().context("Could not flush stdout.")?;
        run_once(&config.command, record)?;
        println!("done in {}", crate::report::format_duration(record.duration));
        if i + 1 < runs {
            // No pause after the last iteration.
            std::thread::sleep(std::time::Duration::from_secs(config.pause_secs));
        }
    }
    Ok(())
}

fn run_parallel(
    config: &crate::config::RunConfig,
    records: &mut [RunRecord],
) -> anyhow::Result<()> {
    let runs = records.len();
    let command = config.command.as_str();
    std::thread::scope(|scope| -> anyhow::Result<()> {
        let mut handles = Vec::with_capacity(runs);
        for (i, record) in records.iter_mut().enumerate() {
            print!("starting iteration {}... ", i + 1);
            std::io::stdout().flush().context("Could not flush stdout.")?;
            // Each thread owns exactly one record slot, so no locking is
            // needed; joining below is the only synchronization point.
            handles.push(scope.spawn(move || run_once(command, record)));
            println!("started");
            if i + 1 < runs {
                std::thread::sleep(std::time::Duration::from_secs(config.pause_secs));
            }
        }
        print!("Waiting for threads to finish... ");
        std::io::stdout().flush().context("Could not flush stdout.")?;
        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
        println!("done");
        Ok(())
    })
}

/// Run the command once through the shell and fill the record.
///
/// Stdout and stderr of the child are discarded to prevent memory overrun in
/// case of huge output and to stop console output completely.
fn run_once(command: &str, record: &mut RunRecord) -> anyhow::Result<()> {
    let started = std::time::Instant::now();
    let status = std::process::Command::new("sh")
        .args(["-c", command])
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .with_context(|| format!("Could not start `sh -c {}`", command))?;
    let finished = std::time::Instant::now();
    // A signal-terminated child has no exit code; count it as a failure.
    record.status = RunStatus::Exited(status.code().unwrap_or(-1));
    record.started = Some(started);
    record.finished = Some(finished);
    record.duration = finished - started;
    Ok(())
}
