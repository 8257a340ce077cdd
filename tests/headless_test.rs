//! Headless runs through the facade crate: JSON lines and determinism.

use tui_snake::core::GameSnapshot;
use tui_snake::engine::{FoodStrategy, SnakeConfig};
use tui_snake::headless::{parse_script, run_headless, HeadlessArgs};
use tui_snake::types::{Direction, Point, Status};

fn config(seed: u64) -> SnakeConfig {
    SnakeConfig {
        seed: Some(seed),
        ..SnakeConfig::default()
    }
}

fn ticks(ticks: u32) -> HeadlessArgs {
    HeadlessArgs {
        ticks,
        script: Vec::new(),
    }
}

fn run(config: &SnakeConfig, args: &HeadlessArgs) -> Vec<GameSnapshot> {
    let mut out = Vec::new();
    run_headless(config, args, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn headless_prints_parseable_snapshots() {
    let snaps = run(&config(5), &ticks(3));
    assert_eq!(snaps.len(), 4);

    let first = &snaps[0];
    assert_eq!(first.status, Status::Running);
    assert_eq!(first.tick_id, 0);
    assert_eq!(first.direction, Direction::Right);
    assert_eq!(first.seed, 5);

    let last = &snaps[3];
    assert_eq!(last.tick_id, 3);
    assert_eq!(last.head(), Some(Point::new(8, 10)));
}

#[test]
fn headless_is_deterministic_per_seed() {
    let a = run(&config(42), &ticks(30));
    let b = run(&config(42), &ticks(30));
    assert_eq!(a, b);

    let free = SnakeConfig {
        food_strategy: FoodStrategy::FreeCells,
        ..config(42)
    };
    assert_eq!(run(&free, &ticks(30)), run(&free, &ticks(30)));
}

#[test]
fn headless_json_uses_snake_case_names() {
    let mut out = Vec::new();
    run_headless(&config(1), &ticks(0), &mut out).unwrap();
    let line = String::from_utf8(out).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

    assert_eq!(value["status"], "running");
    assert_eq!(value["direction"], "right");
    assert_eq!(value["snake"][0]["x"], 5);
    assert_eq!(value["snake"][0]["y"], 10);
}

#[test]
fn headless_script_is_replayed_exactly() {
    let args = HeadlessArgs {
        ticks: 6,
        script: parse_script("up,,left,,down").unwrap(),
    };
    let snaps = run(&config(9), &args);
    assert_eq!(snaps.len(), 7);
    assert_eq!(snaps, run(&config(9), &args));

    let heads: Vec<Point> = snaps.iter().filter_map(|s| s.head()).collect();
    assert_eq!(
        heads,
        vec![
            Point::new(5, 10),
            Point::new(5, 9),
            Point::new(5, 8),
            Point::new(4, 8),
            Point::new(3, 8),
            Point::new(3, 9),
            Point::new(3, 10),
        ]
    );
}
