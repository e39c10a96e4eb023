//! Moderately useful functions

use crate::error::WalkError;
use crate::types::{DirectionCode, GRID_HEIGHT, GRID_WIDTH};

/// Where on the board the bishop stands, as far as its moves are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryClass {
    CornerNW,
    CornerNE,
    CornerSW,
    CornerSE,
    EdgeTop,
    EdgeBottom,
    EdgeLeft,
    EdgeRight,
    Interior,
}

impl BoundaryClass {
    /// `None` if the position is not on the board at all
    pub fn of(x: u32, y: u32) -> Option<Self> {
        let (max_x, max_y) = (GRID_WIDTH - 1, GRID_HEIGHT - 1);
        if x > max_x || y > max_y {
            return None;
        }

        let class = match (x, y) {
            (0, 0) => BoundaryClass::CornerNW,
            (x, 0) if x == max_x => BoundaryClass::CornerNE,
            (0, y) if y == max_y => BoundaryClass::CornerSW,
            (x, y) if x == max_x && y == max_y => BoundaryClass::CornerSE,
            (_, 0) => BoundaryClass::EdgeTop,
            (_, y) if y == max_y => BoundaryClass::EdgeBottom,
            (0, _) => BoundaryClass::EdgeLeft,
            (x, _) if x == max_x => BoundaryClass::EdgeRight,
            _ => BoundaryClass::Interior,
        };
        Some(class)
    }
}

/// Move the bishop one step from `(x, y)`.
///
/// Away from the walls every code is a diagonal move. A move that would
/// leave the board slides along the wall instead, or stays put in a corner.
pub fn bishop_step(x: u32, y: u32, direction: DirectionCode) -> Result<(u32, u32), WalkError> {
    use BoundaryClass::*;
    use DirectionCode::*;

    let class = BoundaryClass::of(x, y).ok_or(WalkError::IllegalBoardState { x, y })?;

    let new_pos = match (class, direction) {
        (CornerNW, NW) | (CornerNE, NE) | (CornerSW, SW) | (CornerSE, SE) => (x, y),

        (CornerNW, NE) | (EdgeTop, NE) | (CornerSW, SE) | (EdgeBottom, SE) => (x + 1, y),
        (CornerNE, NW) | (EdgeTop, NW) | (CornerSE, SW) | (EdgeBottom, SW) => (x - 1, y),
        (CornerNW, SW) | (EdgeLeft, SW) | (CornerNE, SE) | (EdgeRight, SE) => (x, y + 1),
        (CornerSW, NW) | (EdgeLeft, NW) | (CornerSE, NE) | (EdgeRight, NE) => (x, y - 1),

        (_, NW) => (x - 1, y - 1),
        (_, NE) => (x + 1, y - 1),
        (_, SW) => (x - 1, y + 1),
        (_, SE) => (x + 1, y + 1),
    };

    Ok(new_pos)
}

/// Clean up a fingerprint as typed by a user.
///
/// Accepts the `ssh-keygen -E md5` form, e.g. `MD5:16:27:ac:...`, as well as
/// a bare hex string. Whatever is left still has to be valid hex.
pub fn normalize_fingerprint(input: &str) -> String {
    let trimmed = input.trim();
    let without_prefix = match trimmed.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("md5:") => &trimmed[4..],
        _ => trimmed,
    };
    without_prefix.chars().filter(|c| *c != ':').collect()
}
