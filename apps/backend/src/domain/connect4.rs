//! Connect-four: 7 columns × 6 rows, four in a row wins.
//!
//! Columns are stored top-down (index 0 is the top row), so a drop
//! scans from the bottom for the first empty slot.

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::domain::variant::{MoveContext, MoveEffect, MovePayload, VariantRules};
use crate::errors::DomainError;

pub const COLUMNS: i64 = 7;
pub const ROWS: i64 = 6;
pub const WIN_LENGTH: usize = 4;

const DIRECTIONS: [(i64, i64); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connect4Board {
    pub columns: Vec<Vec<Option<PlayerId>>>,
}

impl Connect4Board {
    pub fn empty() -> Self {
        Self {
            columns: vec![vec![None; ROWS as usize]; COLUMNS as usize],
        }
    }

    fn slot(&self, col: i64, row: i64) -> Option<&str> {
        if !(0..COLUMNS).contains(&col) || !(0..ROWS).contains(&row) {
            return None;
        }
        self.columns[col as usize][row as usize].as_deref()
    }

    fn run_length(&self, col: i64, row: i64, dc: i64, dr: i64, player: &str) -> usize {
        let mut count = 1;
        for step in 1..WIN_LENGTH as i64 {
            if self.slot(col + dc * step, row + dr * step) != Some(player) {
                break;
            }
            count += 1;
        }
        for step in 1..WIN_LENGTH as i64 {
            if self.slot(col - dc * step, row - dr * step) != Some(player) {
                break;
            }
            count += 1;
        }
        count
    }

    fn is_full(&self) -> bool {
        self.columns
            .iter()
            .all(|col| col.iter().all(|c| c.is_some()))
    }
}

impl VariantRules for Connect4Board {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        let MovePayload::Cell(col) = payload else {
            return Err(DomainError::invalid_move(
                "connect4 expects a column number",
            ));
        };
        let col = *col;
        if !(0..COLUMNS).contains(&col) {
            return Err(DomainError::invalid_position(format!(
                "column {col} out of range"
            )));
        }
        // Lowest empty slot has the highest row index.
        let Some(row) = (0..ROWS)
            .rev()
            .find(|&row| self.columns[col as usize][row as usize].is_none())
        else {
            return Err(DomainError::ColumnFull);
        };

        self.columns[col as usize][row as usize] = Some(ctx.mover.to_owned());

        if DIRECTIONS
            .iter()
            .any(|&(dc, dr)| self.run_length(col, row, dc, dr, ctx.mover) >= WIN_LENGTH)
        {
            return Ok(MoveEffect::won(ctx.mover.to_owned()));
        }
        if self.is_full() {
            return Ok(MoveEffect::draw());
        }
        Ok(MoveEffect::ongoing())
    }
}
