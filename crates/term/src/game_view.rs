//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Point, Status, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const SCREEN_BG: Rgb = Rgb::hex(0x101010);
const BOARD_BG: Rgb = Rgb::hex(0x151515);
const GRID_DOT: Rgb = Rgb::hex(0x202020);
const FOOD: Rgb = Rgb::hex(0xE53935);
const HEAD: Rgb = Rgb::hex(0x66BB6A);
const BODY: Rgb = Rgb::hex(0x43A047);

/// A lightweight terminal renderer for the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps grid cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + 2, n * self.cell_h + 2)
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is only reallocated when
    /// the viewport size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::new(Rgb::new(120, 120, 120), SCREEN_BG);
        let empty = CellStyle::new(GRID_DOT, BOARD_BG);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.fill_cell(fb, start_x, start_y, Point::new(x, y), '·', empty);
            }
        }

        self.fill_cell(
            fb,
            start_x,
            start_y,
            snap.food,
            '●',
            CellStyle::new(FOOD, BOARD_BG).bold(),
        );

        // Tail first so the head wins if segments overlap.
        let body = CellStyle::new(BODY, BOARD_BG);
        for &segment in snap.snake.iter().skip(1).rev() {
            self.fill_cell(fb, start_x, start_y, segment, '█', body);
        }
        if let Some(head) = snap.head() {
            let head_style = CellStyle::new(HEAD, BOARD_BG).bold();
            self.fill_cell(fb, start_x, start_y, head, '█', head_style);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        match snap.status {
            Status::Idle => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["PRESS SPACE"])
            }
            Status::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, &["PAUSED"])
            }
            Status::GameOver => {
                let score = format!("SCORE {}", snap.score);
                self.draw_overlay_text(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &["GAME OVER", &score, "R TO RESTART"],
                )
            }
            Status::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Point,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..GRID_SIZE).contains(&cell.x) || !(0..GRID_SIZE).contains(&cell.y) {
            return;
        }
        let px = start_x + 1 + cell.x as u16 * self.cell_w;
        let py = start_y + 1 + cell.y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "LENGTH", label);
        fb.put_u32(panel_x, y + 1, snap.snake.len() as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "STATUS", label);
        fb.put_str(panel_x, y + 1, status_label(snap.status), value);
        y += 3;

        for line in [
            "arrows/wasd  steer",
            "drag         steer",
            "space        start/pause",
            "r            restart",
            "q            quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), text, style);
        }
    }
}

fn status_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "READY",
        Status::Running => "RUNNING",
        Status::Paused => "PAUSED",
        Status::GameOver => "GAME OVER",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn frame_size_includes_border() {
        assert_eq!(GameView::default().frame_size(), (42, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (22, 22));
    }

    #[test]
    fn running_board_has_no_overlay() {
        let mut state = GameState::new(1);
        state.start();
        let fb = GameView::default().render(&state.snapshot(), Viewport::new(42, 22));
        assert!(!fb.text().contains("PAUSED"));
        assert!(!fb.text().contains("PRESS SPACE"));
    }

    #[test]
    fn game_over_overlay_shows_final_score() {
        let mut snap = GameState::new(1).snapshot();
        snap.status = Status::GameOver;
        snap.score = 7;
        let fb = GameView::default().render(&snap, Viewport::new(42, 22));
        let text = fb.text();
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("SCORE 7"));
    }

    #[test]
    fn off_grid_cells_are_skipped() {
        let mut snap = GameState::new(1).snapshot();
        snap.food = Point::new(-1, 40);
        // Must not panic or draw outside the board.
        let fb = GameView::default().render(&snap, Viewport::new(42, 22));
        assert!(!fb.text().contains('●'));
    }
}
