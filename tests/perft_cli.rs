//! Runs the `perft` binary and checks the totals it reports.

use std::process::Command;

fn run_perft(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_perft"))
        .args(args)
        .output()
        .expect("perft binary runs");
    assert!(output.status.success(), "perft {args:?} failed");
    String::from_utf8(output.stdout).expect("utf-8 output")
}

fn reported_nodes(stdout: &str) -> u64 {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix("nodes: "))
        .and_then(|n| n.parse().ok())
        .expect("nodes line")
}

#[test]
fn test_divide_at_depth_zero_counts_the_root() {
    assert_eq!(reported_nodes(&run_perft(&["--depth", "0"])), 1);
    assert_eq!(reported_nodes(&run_perft(&["--depth", "0", "--divide"])), 1);
}

#[test]
fn test_divide_total_matches_plain_count() {
    let plain = run_perft(&["--depth", "2"]);
    let divided = run_perft(&["--depth", "2", "--divide"]);
    assert_eq!(reported_nodes(&plain), 400);
    assert_eq!(reported_nodes(&divided), 400);
    assert!(divided.contains("moves: 20"));
}

#[test]
fn test_moves_are_played_before_counting() {
    let stdout = run_perft(&["--depth", "1", "--moves", "e2e4", "e7e5"]);
    assert_eq!(reported_nodes(&stdout), 29);
}
