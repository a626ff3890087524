//! Pure game logic: session documents, per-variant rules, transitions.
//!
//! Nothing in this module performs IO; the service layer loads a
//! session, calls a transition, and persists the result.

pub mod chess;
pub mod connect4;
pub mod dots;
pub mod gomoku;
pub mod state;
pub mod tictactoe;
pub mod transition;
pub mod variant;

pub use state::{BoardState, GameKind, GameSession, GameStatus, PlayerId};
pub use variant::{MoveContext, MoveEffect, MoveOutcome, MovePayload, VariantRules};

#[cfg(test)]
mod tests_chess;
#[cfg(test)]
mod tests_connect4;
#[cfg(test)]
mod tests_gomoku;
#[cfg(test)]
mod tests_tictactoe;
#[cfg(test)]
mod tests_transition;
