//! Direction gate - rejects 180° reversals

use crate::types::Direction;

/// Resolve a direction request against the current heading.
///
/// Returns `requested` unless it is the exact opposite of `current`, in which case
/// `current` is returned unchanged. Rejection is silent.
///
/// # Examples
///
/// ```
/// use tui_snake_core::gate::gate;
/// use tui_snake_core::types::Direction;
///
/// assert_eq!(gate(Direction::Right, Direction::Up), Direction::Up);
/// assert_eq!(gate(Direction::Right, Direction::Left), Direction::Right);
/// ```
pub fn gate(current: Direction, requested: Direction) -> Direction {
    if requested == current.opposite() {
        current
    } else {
        requested
    }
}
