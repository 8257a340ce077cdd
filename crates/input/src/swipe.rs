//! Swipe decoding - turns pointer drags into direction requests.
//!
//! The decoder measures travel from the last anchor point. Once the travel along
//! either axis exceeds the threshold it emits the direction of the dominant axis and
//! re-anchors at the current pointer position, so one long drag can steer several
//! times. The decoder does not gate reversals; the session does.

use crate::types::{Direction, SWIPE_THRESHOLD};

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeDecoder {
    threshold: f32,
    anchor: Option<(f32, f32)>,
}

impl Default for SwipeDecoder {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD)
    }
}

impl SwipeDecoder {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            anchor: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.anchor.is_some()
    }

    /// Pointer went down: start a new drag.
    pub fn press(&mut self, x: f32, y: f32) {
        self.anchor = Some((x, y));
    }

    /// Pointer moved while down.
    ///
    /// Returns a direction once the accumulated travel passes the threshold. A move
    /// without a preceding press starts tracking from this position.
    pub fn drag(&mut self, x: f32, y: f32) -> Option<Direction> {
        let Some((ax, ay)) = self.anchor else {
            self.anchor = Some((x, y));
            return None;
        };

        let dx = x - ax;
        let dy = y - ay;
        if dx.abs() <= self.threshold && dy.abs() <= self.threshold {
            return None;
        }

        self.anchor = Some((x, y));
        dominant_direction(dx, dy)
    }

    /// Pointer released: forget the anchor.
    pub fn release(&mut self) {
        self.anchor = None;
    }
}

/// Direction of the dominant axis; `None` on an exact diagonal.
///
/// Screen coordinates: positive `y` points down.
pub fn dominant_direction(dx: f32, dy: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else if dy.abs() > dx.abs() {
        Some(if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        })
    } else {
        None
    }
}
