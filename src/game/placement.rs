//! Random placement of food and obstacles on free cells
use super::grid::{Grid, Point};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Pick a cell not in `occupied`, uniformly at random.
///
/// # Errors
///
/// Returns `Err` if every cell of the grid is occupied.
pub(crate) fn place_food<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    occupied: &HashSet<Point>,
) -> Result<Point, OutOfSpaceError> {
    if occupancy(grid, occupied) >= grid.cell_count() {
        return Err(OutOfSpaceError);
    }
    loop {
        let p = grid.random_cell(rng);
        if !occupied.contains(&p) {
            return Ok(p);
        }
    }
}

/// Pick `count` distinct cells, none of them in `occupied`.
///
/// # Errors
///
/// Returns `Err` if the grid runs out of free cells before `count` have been
/// placed.
pub(crate) fn place_obstacles<R: Rng + ?Sized>(
    rng: &mut R,
    grid: Grid,
    count: usize,
    occupied: &HashSet<Point>,
) -> Result<HashSet<Point>, OutOfSpaceError> {
    let mut excluded = occupied.clone();
    let mut obstacles = HashSet::with_capacity(count);
    while obstacles.len() < count {
        let p = place_food(rng, grid, &excluded)?;
        excluded.insert(p);
        obstacles.insert(p);
    }
    Ok(obstacles)
}

/// Number of distinct cells of `grid` that appear in `occupied`
fn occupancy(grid: Grid, occupied: &HashSet<Point>) -> usize {
    occupied.iter().filter(|&&p| grid.contains(p)).count()
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cells left on the grid")]
pub(crate) struct OutOfSpaceError;
