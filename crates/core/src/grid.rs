//! Grid arithmetic - toroidal coordinate math
//!
//! Every coordinate is reduced into `[0, size)` with Euclidean remainder, so stepping
//! off one edge re-enters from the opposite one. There is no wall concept.

use crate::types::{Direction, Point};

/// Reduce `v` into `[0, size)`.
#[inline]
pub fn wrap(v: i32, size: i32) -> i32 {
    v.rem_euclid(size)
}

/// The cell one step from `p` in `dir` on a `size x size` torus.
///
/// # Examples
///
/// ```
/// use tui_snake_core::grid::step;
/// use tui_snake_core::types::{Direction, Point};
///
/// assert_eq!(step(Point::new(5, 10), Direction::Right, 20), Point::new(6, 10));
/// assert_eq!(step(Point::new(0, 10), Direction::Left, 20), Point::new(19, 10));
/// assert_eq!(step(Point::new(3, 19), Direction::Down, 20), Point::new(3, 0));
/// ```
#[inline]
pub fn step(p: Point, dir: Direction, size: i32) -> Point {
    let (dx, dy) = dir.delta();
    Point::new(wrap(p.x + dx, size), wrap(p.y + dy, size))
}

/// Whether both coordinates lie in `[0, size)`.
#[inline]
pub fn in_bounds(p: Point, size: i32) -> bool {
    (0..size).contains(&p.x) && (0..size).contains(&p.y)
}

/// Iterate every cell of a `size x size` grid in row-major order.
pub fn cells(size: i32) -> impl Iterator<Item = Point> {
    (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    #[test]
    fn wrap_handles_negative_values() {
        assert_eq!(wrap(-1, 20), 19);
        assert_eq!(wrap(-21, 20), 19);
        assert_eq!(wrap(20, 20), 0);
        assert_eq!(wrap(7, 20), 7);
    }

    #[test]
    fn step_wraps_every_edge() {
        let n = GRID_SIZE;
        assert_eq!(step(Point::new(0, 4), Direction::Left, n), Point::new(n - 1, 4));
        assert_eq!(step(Point::new(n - 1, 4), Direction::Right, n), Point::new(0, 4));
        assert_eq!(step(Point::new(4, 0), Direction::Up, n), Point::new(4, n - 1));
        assert_eq!(step(Point::new(4, n - 1), Direction::Down, n), Point::new(4, 0));
    }

    #[test]
    fn step_stays_in_bounds_from_every_cell() {
        for p in cells(GRID_SIZE) {
            for dir in Direction::ALL {
                assert!(in_bounds(step(p, dir, GRID_SIZE), GRID_SIZE));
            }
        }
    }

    #[test]
    fn full_lap_returns_to_start() {
        let start = Point::new(7, 3);
        let mut p = start;
        for _ in 0..GRID_SIZE {
            p = step(p, Direction::Up, GRID_SIZE);
        }
        assert_eq!(p, start);
    }

    #[test]
    fn cells_covers_the_grid_once() {
        let all: Vec<Point> = cells(4).collect();
        assert_eq!(all.len(), 16);
        assert_eq!(all[0], Point::new(0, 0));
        assert_eq!(all[5], Point::new(1, 1));
    }
}
