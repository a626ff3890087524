//! The seam between the state machine and the per-variant rules.
//!
//! Each board payload implements [`VariantRules`]; the single dispatch
//! point is [`BoardState::apply_move`], selected by the `currentGame` tag.

use serde::{Deserialize, Serialize};

use crate::domain::chess::ChessMove;
use crate::domain::state::{BoardState, PlayerId};
use crate::errors::DomainError;

/// Variant-specific move payload, mirroring the wire shapes:
/// a cell index, an `[x, y]` pair, a line key, or a chess move.
///
/// Untagged: the JSON value's shape selects the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovePayload {
    Cell(i64),
    Point([i64; 2]),
    Line(String),
    Chess(ChessMove),
}

/// Who is moving, resolved against join order by the state machine.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub mover: &'a str,
    /// Index of the mover in `players` (join order).
    pub mover_index: usize,
    pub players: &'a [PlayerId],
}

/// Resolution of the board after an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Ongoing,
    Won(PlayerId),
    Draw,
}

/// What an accepted move did to the board, as far as the state machine
/// needs to know: the outcome scan result and whether the mover earned an
/// extra turn (dots-and-boxes box completion).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEffect {
    pub outcome: MoveOutcome,
    pub extra_turn: bool,
}

impl MoveEffect {
    pub fn ongoing() -> Self {
        Self {
            outcome: MoveOutcome::Ongoing,
            extra_turn: false,
        }
    }

    pub fn won(winner: PlayerId) -> Self {
        Self {
            outcome: MoveOutcome::Won(winner),
            extra_turn: false,
        }
    }

    pub fn draw() -> Self {
        Self {
            outcome: MoveOutcome::Draw,
            extra_turn: false,
        }
    }
}

/// Per-variant legality and outcome evaluation.
///
/// Implementations validate the payload against the current board, mutate
/// the board on success, and report the resulting [`MoveEffect`]. Shared
/// preconditions (terminal state, membership, turn ownership) are checked
/// by the state machine before dispatch and must not be re-implemented
/// here.
pub trait VariantRules {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError>;
}

impl BoardState {
    /// Dispatch a move to the active variant's rules.
    pub fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        match self {
            BoardState::TicTacToe(board) => board.apply_move(ctx, payload),
            BoardState::Gomoku(board) => board.apply_move(ctx, payload),
            BoardState::Dots(board) => board.apply_move(ctx, payload),
            BoardState::Connect4(board) => board.apply_move(ctx, payload),
            BoardState::Chess(board) => board.apply_move(ctx, payload),
        }
    }
}
