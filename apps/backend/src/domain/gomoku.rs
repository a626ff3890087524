//! Gomoku: 15×15 board, five in a row wins.
//!
//! Cells are stored row-major (`y * 15 + x`), matching the persisted
//! document layout.

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::domain::variant::{MoveContext, MoveEffect, MovePayload, VariantRules};
use crate::errors::DomainError;

pub const SIZE: i64 = 15;
pub const WIN_LENGTH: usize = 5;

/// The 4 direction pairs to scan: horizontal, vertical, both diagonals.
const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GomokuBoard {
    pub cells: Vec<Option<PlayerId>>,
}

impl GomokuBoard {
    pub fn empty() -> Self {
        Self {
            cells: vec![None; (SIZE * SIZE) as usize],
        }
    }

    fn cell(&self, x: i64, y: i64) -> Option<&str> {
        if !(0..SIZE).contains(&x) || !(0..SIZE).contains(&y) {
            return None;
        }
        self.cells[(y * SIZE + x) as usize].as_deref()
    }

    /// Longest run through `(x, y)` along `(dx, dy)`, counting the placed
    /// stone plus consecutive same-owner stones up to 4 steps each way.
    fn run_length(&self, x: i64, y: i64, dx: i64, dy: i64, player: &str) -> usize {
        let mut count = 1;
        for step in 1..WIN_LENGTH as i64 {
            if self.cell(x + dx * step, y + dy * step) != Some(player) {
                break;
            }
            count += 1;
        }
        for step in 1..WIN_LENGTH as i64 {
            if self.cell(x - dx * step, y - dy * step) != Some(player) {
                break;
            }
            count += 1;
        }
        count
    }
}

impl VariantRules for GomokuBoard {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        let MovePayload::Point([x, y]) = payload else {
            return Err(DomainError::invalid_move("gomoku expects an [x, y] pair"));
        };
        let (x, y) = (*x, *y);
        if !(0..SIZE).contains(&x) || !(0..SIZE).contains(&y) {
            return Err(DomainError::invalid_position(format!(
                "({x}, {y}) is outside the board"
            )));
        }
        let index = (y * SIZE + x) as usize;
        if self.cells[index].is_some() {
            return Err(DomainError::invalid_position(format!(
                "({x}, {y}) is occupied"
            )));
        }

        self.cells[index] = Some(ctx.mover.to_owned());

        if DIRECTIONS
            .iter()
            .any(|&(dx, dy)| self.run_length(x, y, dx, dy, ctx.mover) >= WIN_LENGTH)
        {
            return Ok(MoveEffect::won(ctx.mover.to_owned()));
        }
        if self.cells.iter().all(|c| c.is_some()) {
            return Ok(MoveEffect::draw());
        }
        Ok(MoveEffect::ongoing())
    }
}
