//! Tic-tac-toe: nine cells, three in a row wins.

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::domain::variant::{MoveContext, MoveEffect, MovePayload, VariantRules};
use crate::errors::DomainError;

pub const CELLS: usize = 9;

/// The 8 canonical win lines: rows, columns, diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeBoard {
    pub cells: [Option<PlayerId>; CELLS],
}

impl TicTacToeBoard {
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|_| None),
        }
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    fn has_win(&self, player: &str) -> bool {
        WIN_LINES.iter().any(|line| {
            line.iter()
                .all(|&i| self.cells[i].as_deref() == Some(player))
        })
    }
}

impl VariantRules for TicTacToeBoard {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        let MovePayload::Cell(position) = payload else {
            return Err(DomainError::invalid_move(
                "tic-tac-toe expects a cell index",
            ));
        };
        let position = usize::try_from(*position)
            .ok()
            .filter(|&p| p < CELLS)
            .ok_or_else(|| DomainError::invalid_move(format!("cell {position} out of range")))?;
        if self.cells[position].is_some() {
            return Err(DomainError::invalid_move(format!(
                "cell {position} is occupied"
            )));
        }

        self.cells[position] = Some(ctx.mover.to_owned());

        if self.has_win(ctx.mover) {
            return Ok(MoveEffect::won(ctx.mover.to_owned()));
        }
        if self.is_full() {
            return Ok(MoveEffect::draw());
        }
        Ok(MoveEffect::ongoing())
    }
}
