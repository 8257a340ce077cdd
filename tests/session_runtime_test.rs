//! Driver timing under tokio's paused clock.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time;

use tui_snake::core::{GameSnapshot, GameState};
use tui_snake::engine::{run_session, GameSession};
use tui_snake::types::{Direction, GameCommand, Point, Status};

const PERIOD: Duration = Duration::from_millis(130);

fn session() -> GameSession {
    GameSession::from_state(GameState::with_layout(
        8,
        vec![Point::new(5, 10), Point::new(4, 10), Point::new(3, 10)],
        Direction::Right,
        Point::new(0, 0),
    ))
}

#[tokio::test(start_paused = true)]
async fn toggle_pause_gates_the_tick_source() {
    let (tx, rx) = mpsc::channel(8);
    let (snap_tx, snap_rx) = watch::channel(GameSnapshot::default());
    let task = tokio::spawn(run_session(session(), rx, snap_tx, PERIOD));

    tx.send(GameCommand::TogglePause).await.unwrap();
    time::sleep(PERIOD * 2 + Duration::from_millis(5)).await;
    assert_eq!(snap_rx.borrow().tick_id, 2);

    tx.send(GameCommand::TogglePause).await.unwrap();
    time::sleep(PERIOD * 4).await;
    assert_eq!(snap_rx.borrow().status, Status::Paused);
    assert_eq!(snap_rx.borrow().tick_id, 2);

    drop(tx);
    let session = task.await.unwrap();
    assert_eq!(session.state().head(), Point::new(7, 10));
}

#[tokio::test(start_paused = true)]
async fn turn_applies_on_next_tick() {
    let (tx, rx) = mpsc::channel(8);
    let (snap_tx, snap_rx) = watch::channel(GameSnapshot::default());
    let task = tokio::spawn(run_session(session(), rx, snap_tx, PERIOD));

    tx.send(GameCommand::Start).await.unwrap();
    tx.send(GameCommand::SetDirection(Direction::Down)).await.unwrap();
    // Reversal against the applied heading is dropped.
    tx.send(GameCommand::SetDirection(Direction::Left)).await.unwrap();

    time::sleep(PERIOD + Duration::from_millis(5)).await;
    let snap = snap_rx.borrow().clone();
    assert_eq!(snap.direction, Direction::Down);
    assert_eq!(snap.head(), Some(Point::new(5, 11)));

    tx.send(GameCommand::Quit).await.unwrap();
    task.await.unwrap();
}
