mod common;
use common::sptest;

use predicates::prelude::PredicateBooleanExt as _;

#[test]
fn help_is_displayed() {
    sptest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("USAGE:"));
}

#[test]
fn sequential_run_reports_summary() {
    sptest()
        .args(["-c", "echo dummy benchmark", "-n", "2", "-w", "0"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains(
                "Executing command 'echo dummy benchmark' 2 times with 0 sec pause in sequential mode:",
            )
            .and(predicates::str::contains("starting iteration 2... done in"))
            .and(predicates::str::contains("Total time spent"))
            .and(predicates::str::contains("Median iteration"))
            .and(predicates::str::contains("Attention!").not()),
        );
}

#[test]
fn one_run_is_supported() {
    sptest()
        .args(["-c", "echo dummy benchmark", "-n", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("starting iteration 1... done in"));
}

#[test]
fn parallel_run_is_supported() {
    sptest()
        .args(["-p", "-c", "echo dummy benchmark", "-n", "3", "-w", "0"])
        .assert()
        .success()
        .stdout(
            predicates::str::contains("in parallel mode:")
                .and(predicates::str::contains("starting iteration 3... started"))
                .and(predicates::str::contains(
                    "Waiting for threads to finish... done",
                )),
        );
}

#[test]
fn failing_command_is_counted_not_fatal() {
    sptest()
        .args(["-c", "false", "-n", "3", "-w", "0"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Attention! 3 iteration(s) finished with non-zero exit code!",
        ));
}

#[test]
fn no_arguments_is_a_usage_error() {
    sptest()
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("Command to run is not provided."));
}

#[test]
fn zero_times_is_a_usage_error() {
    sptest()
        .args(["-c", "echo dummy", "-n", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn negative_wait_is_a_usage_error() {
    sptest()
        .args(["-c", "echo dummy", "-w", "-1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("out of range"));
}

#[test]
fn non_integer_times_is_a_usage_error() {
    sptest()
        .args(["-c", "echo dummy", "-n", "abc"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_file_is_a_usage_error() {
    sptest()
        .arg("this_will_never_exist.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("not found"));
}

#[test]
fn malformed_json_is_a_usage_error() {
    sptest()
        .arg("bad.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicates::str::contains("Error while parsing JSON data"));
}

#[test]
fn json_file_run_is_supported() {
    sptest()
        .arg("echo.json")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Executing command 'echo from json' 2 times with 0 sec pause in sequential mode:",
        ));
}

#[test]
fn json_parallel_key_turns_parallel_mode_on() {
    sptest()
        .arg("parallel.json")
        .assert()
        .success()
        .stdout(predicates::str::contains("in parallel mode:"));
}

#[test]
fn json_file_overrides_command_line() {
    // The file wins entirely: its command and pause are used, and runs falls
    // back to the default 8 because the file does not set TIMES.
    sptest()
        .args(["-c", "echo a", "-n", "3", "override.json"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Executing command 'echo b' 8 times with 1 sec pause in sequential mode:",
        ));
}
