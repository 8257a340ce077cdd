use tui_snake::core::GameState;
use tui_snake::term::{AnchorY, GameView, Viewport};
use tui_snake::types::{Direction, Point, Status};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 20 cells * 2 columns + border => 42 wide, 20 rows + border => 22 tall.
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_segment_as_two_chars_wide() {
    let state = GameState::with_layout(
        1,
        vec![Point::new(0, 19), Point::new(1, 19)],
        Direction::Left,
        Point::new(10, 0),
    );
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(42, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 4, y0).unwrap().ch, '·');
}

#[test]
fn term_view_head_is_styled_apart_from_body() {
    let state = GameState::with_layout(
        1,
        vec![Point::new(1, 0), Point::new(0, 0)],
        Direction::Right,
        Point::new(10, 10),
    );
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(42, 22));

    let head = fb.get(1 + 2, 1).unwrap();
    let body = fb.get(1, 1).unwrap();
    assert_eq!(head.ch, body.ch);
    assert_ne!(head.style, body.style);
}

#[test]
fn term_view_draws_food() {
    let state = GameState::with_layout(
        1,
        vec![Point::new(5, 10)],
        Direction::Right,
        Point::new(3, 4),
    );
    let fb = GameView::default().render(&state.snapshot(), Viewport::new(42, 22));
    assert_eq!(fb.get(1 + 3 * 2, 1 + 4).unwrap().ch, '●');
}

#[test]
fn term_view_overlays_follow_status() {
    let view = GameView::default();
    let vp = Viewport::new(42, 22);
    let mut snap = GameState::new(1).snapshot();

    assert!(view.render(&snap, vp).text().contains("PRESS SPACE"));

    snap.status = Status::Paused;
    assert!(view.render(&snap, vp).text().contains("PAUSED"));

    snap.status = Status::GameOver;
    let text = view.render(&snap, vp).text();
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("R TO RESTART"));
}

#[test]
fn term_view_side_panel_shows_score_when_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 12;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(80, 24));
    let text = fb.text();
    assert!(text.contains("SCORE"));
    assert!(text.contains("12"));
    assert!(text.contains("LENGTH"));

    // Too narrow: the board still renders, the panel is dropped.
    let narrow = GameView::default().render(&snap, Viewport::new(42, 22));
    assert!(!narrow.text().contains("SCORE"));
}

#[test]
fn term_view_anchor_top_starts_at_row_zero() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(42, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
