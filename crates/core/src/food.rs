//! Food placement - random unoccupied cell selection
//!
//! Two strategies pick a cell uniformly among the cells not covered by the snake:
//!
//! - [`FoodStrategy::Rejection`]: draw random cells until one is free. Cheap on a
//!   sparse grid. The expected number of draws grows without bound as the body
//!   approaches `size * size` cells, and it never returns on a full grid. With a
//!   20 x 20 grid and realistic snake lengths this is accepted, not guarded.
//! - [`FoodStrategy::FreeCells`]: enumerate the free cells and sample one index.
//!   Bounded time, and reports a full grid as `None`.

use rand::Rng;

use crate::grid;
use crate::types::Point;

/// How the next food cell is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodStrategy {
    #[default]
    Rejection,
    FreeCells,
}

impl FoodStrategy {
    /// Parse strategy name ("rejection" or "free-cells", case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rejection" => Some(FoodStrategy::Rejection),
            "free-cells" | "free_cells" | "freecells" => Some(FoodStrategy::FreeCells),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStrategy::Rejection => "rejection",
            FoodStrategy::FreeCells => "free-cells",
        }
    }

    /// Pick a free cell with this strategy.
    ///
    /// `Rejection` always returns `Some` (or never returns on a full grid).
    pub fn place<R: Rng>(&self, rng: &mut R, size: i32, body: &[Point]) -> Option<Point> {
        match self {
            FoodStrategy::Rejection => Some(place_food(rng, size, body)),
            FoodStrategy::FreeCells => place_food_in_free_cells(rng, size, body),
        }
    }
}

/// Rejection sampling: draw uniformly from the grid until the cell is off the body.
///
/// Precondition: at least one cell is free. Otherwise this loops forever.
pub fn place_food<R: Rng>(rng: &mut R, size: i32, body: &[Point]) -> Point {
    loop {
        let p = Point::new(rng.random_range(0..size), rng.random_range(0..size));
        if !body.contains(&p) {
            return p;
        }
    }
}

/// Sample an index from the explicit list of free cells.
pub fn place_food_in_free_cells<R: Rng>(
    rng: &mut R,
    size: i32,
    body: &[Point],
) -> Option<Point> {
    let free: Vec<Point> = grid::cells(size).filter(|p| !body.contains(p)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
