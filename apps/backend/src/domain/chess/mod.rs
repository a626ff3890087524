//! Chess variant: full legality checking, castling, en passant,
//! promotion, and the standard draw rules.
//!
//! The server owns the position; clients submit only a from/to pair
//! (plus an optional promotion choice) and the board they render is
//! whatever comes back in the next state update.

pub mod board;
pub mod outcome;
pub mod rules;

use serde::{Deserialize, Serialize};

use crate::domain::variant::{MoveContext, MoveEffect, MovePayload, VariantRules};
use crate::errors::DomainError;

use board::{initial_grid, piece_at, set_piece, Color, Grid, Piece, PieceKind, Square};
use rules::RulesView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn initial() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub fn allows(&self, color: Color, king_side: bool) -> bool {
        match (color, king_side) {
            (Color::White, true) => self.white_king_side,
            (Color::White, false) => self.white_queen_side,
            (Color::Black, true) => self.black_king_side,
            (Color::Black, false) => self.black_queen_side,
        }
    }

    fn revoke_all(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// Drops the right tied to the rook on `square`, if any. Covers both
    /// the rook moving away and the rook being captured.
    fn revoke_for_rook_square(&mut self, square: Square) {
        match (square.row, square.col) {
            (7, 0) => self.white_queen_side = false,
            (7, 7) => self.white_king_side = false,
            (0, 0) => self.black_queen_side = false,
            (0, 7) => self.black_king_side = false,
            _ => {}
        }
    }

    /// FEN-style availability string, e.g. `"KQkq"` or `""`.
    pub fn fen(&self) -> String {
        let mut out = String::new();
        if self.white_king_side {
            out.push('K');
        }
        if self.white_queen_side {
            out.push('Q');
        }
        if self.black_king_side {
            out.push('k');
        }
        if self.black_queen_side {
            out.push('q');
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Promotion {
    #[serde(rename = "q")]
    Queen,
    #[serde(rename = "r")]
    Rook,
    #[serde(rename = "b")]
    Bishop,
    #[serde(rename = "n")]
    Knight,
}

impl Promotion {
    fn kind(self) -> PieceKind {
        match self {
            Promotion::Queen => PieceKind::Queen,
            Promotion::Rook => PieceKind::Rook,
            Promotion::Bishop => PieceKind::Bishop,
            Promotion::Knight => PieceKind::Knight,
        }
    }

    fn letter(self) -> char {
        match self {
            Promotion::Queen => 'q',
            Promotion::Rook => 'r',
            Promotion::Bishop => 'b',
            Promotion::Knight => 'n',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<Promotion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChessBoard {
    pub board: Grid,
    /// Position signatures after each played move, for repetition checks.
    pub history: Vec<String>,
    /// Played moves in coordinate notation (`"e2e4"`, `"e7e8q"`).
    pub moves: Vec<String>,
    pub turn: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl ChessBoard {
    pub fn initial() -> Self {
        Self {
            board: initial_grid(),
            history: Vec::new(),
            moves: Vec::new(),
            turn: Color::White,
            castling: CastlingRights::initial(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    fn view(&self) -> RulesView<'_> {
        RulesView {
            grid: &self.board,
            castling: &self.castling,
            en_passant: self.en_passant,
        }
    }

    fn signature(&self) -> String {
        board::signature(&self.board, self.turn, &self.castling.fen(), self.en_passant)
    }
}

impl VariantRules for ChessBoard {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        let MovePayload::Chess(mv) = payload else {
            return Err(DomainError::invalid_move(
                "chess expects a from/to move object",
            ));
        };
        // Seat 0 always plays white; seat 1 plays black.
        let color = match ctx.mover_index {
            0 => Color::White,
            1 => Color::Black,
            _ => {
                return Err(DomainError::invalid_move(
                    "chess supports exactly two players",
                ))
            }
        };
        if color != self.turn {
            return Err(DomainError::invalid_move("it is not this color's turn"));
        }
        if !self.view().is_legal(color, mv.from, mv.to) {
            return Err(DomainError::invalid_move(format!(
                "illegal move {}{}",
                mv.from, mv.to
            )));
        }
        let piece = piece_at(&self.board, mv.from)
            .ok_or_else(|| DomainError::invalid_move("no piece on the source square"))?;

        let is_en_passant = piece.kind == PieceKind::Pawn
            && self.en_passant == Some(mv.to)
            && mv.from.col != mv.to.col
            && piece_at(&self.board, mv.to).is_none();
        let is_capture = piece_at(&self.board, mv.to).is_some() || is_en_passant;

        // Captured rook on a corner revokes the opponent's right there.
        self.castling.revoke_for_rook_square(mv.to);
        match piece.kind {
            PieceKind::King => self.castling.revoke_all(color),
            PieceKind::Rook => self.castling.revoke_for_rook_square(mv.from),
            _ => {}
        }

        if is_en_passant {
            set_piece(&mut self.board, Square::new(mv.from.row, mv.to.col), None);
        }
        if piece.kind == PieceKind::King && (mv.to.col - mv.from.col).abs() == 2 {
            let (rook_from, rook_to) = if mv.to.col == 6 {
                (Square::new(mv.from.row, 7), Square::new(mv.from.row, 5))
            } else {
                (Square::new(mv.from.row, 0), Square::new(mv.from.row, 3))
            };
            let rook = piece_at(&self.board, rook_from);
            set_piece(&mut self.board, rook_from, None);
            set_piece(&mut self.board, rook_to, rook);
        }

        let promotion_row = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        let placed = if piece.kind == PieceKind::Pawn && mv.to.row == promotion_row {
            // Unspecified promotions default to a queen.
            let choice = mv.promotion.unwrap_or(Promotion::Queen);
            Piece::new(color, choice.kind())
        } else {
            piece
        };
        set_piece(&mut self.board, mv.from, None);
        set_piece(&mut self.board, mv.to, Some(placed));

        self.en_passant = if piece.kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2 {
            Some(Square::new((mv.from.row + mv.to.row) / 2, mv.from.col))
        } else {
            None
        };
        if piece.kind == PieceKind::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.turn = color.opponent();

        let mut notation = format!("{}{}", mv.from, mv.to);
        if placed.kind != piece.kind {
            notation.push(mv.promotion.unwrap_or(Promotion::Queen).letter());
        }
        self.moves.push(notation);
        let signature = self.signature();
        self.history.push(signature.clone());

        let opponent = self.turn;
        let view = self.view();
        if outcome::is_checkmate(&view, opponent) {
            return Ok(MoveEffect::won(ctx.mover.to_owned()));
        }
        if outcome::is_stalemate(&view, opponent)
            || outcome::insufficient_material(&self.board)
            || self.halfmove_clock >= 100
            || outcome::threefold_repetition(&self.history, &signature)
        {
            return Ok(MoveEffect::draw());
        }
        Ok(MoveEffect::ongoing())
    }
}
