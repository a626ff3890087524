//! Move legality: attack detection, check, castling, en passant.
//!
//! `RulesView` borrows the position pieces that legality depends on so
//! the same checks serve both move validation and outcome detection.

use super::board::{find_king, piece_at, Color, Grid, Piece, PieceKind, Square};
use super::CastlingRights;

pub struct RulesView<'a> {
    pub grid: &'a Grid,
    pub castling: &'a CastlingRights,
    pub en_passant: Option<Square>,
}

impl RulesView<'_> {
    /// Every square strictly between `from` and `to` is empty. Assumes the
    /// two squares share a rank, file, or diagonal.
    fn path_clear(&self, from: Square, to: Square) -> bool {
        let dr = (to.row - from.row).signum();
        let dc = (to.col - from.col).signum();
        let mut cursor = Square::new(from.row + dr, from.col + dc);
        while cursor != to {
            if piece_at(self.grid, cursor).is_some() {
                return false;
            }
            cursor = Square::new(cursor.row + dr, cursor.col + dc);
        }
        true
    }

    /// Whether `piece` standing on `from` attacks `to`. Pawn forward moves
    /// are not attacks; blocked sliders do not attack past the blocker.
    fn piece_attacks(&self, piece: Piece, from: Square, to: Square) -> bool {
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        if (dr, dc) == (0, 0) {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => {
                let dir = match piece.color {
                    Color::White => -1,
                    Color::Black => 1,
                };
                dr == dir && dc.abs() == 1
            }
            PieceKind::Knight => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
            PieceKind::Bishop => dr.abs() == dc.abs() && self.path_clear(from, to),
            PieceKind::Rook => (dr == 0 || dc == 0) && self.path_clear(from, to),
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && self.path_clear(from, to)
            }
            PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
        }
    }

    pub fn square_attacked(&self, square: Square, by: Color) -> bool {
        for row in 0..8 {
            for col in 0..8 {
                let from = Square::new(row, col);
                if let Some(piece) = piece_at(self.grid, from) {
                    if piece.color == by && self.piece_attacks(piece, from, square) {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn in_check(&self, color: Color) -> bool {
        match find_king(self.grid, color) {
            Some(king) => self.square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Movement-shape legality for a non-castling move, before check
    /// safety. The destination is known not to hold a same-color piece.
    fn pseudo_legal(&self, piece: Piece, from: Square, to: Square) -> bool {
        if piece.kind != PieceKind::Pawn {
            return self.piece_attacks(piece, from, to);
        }
        let dir = match piece.color {
            Color::White => -1,
            Color::Black => 1,
        };
        let start_row = match piece.color {
            Color::White => 6,
            Color::Black => 1,
        };
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        if dc == 0 {
            // Pushes require empty squares.
            if piece_at(self.grid, to).is_some() {
                return false;
            }
            if dr == dir {
                return true;
            }
            let step = Square::new(from.row + dir, from.col);
            return dr == 2 * dir && from.row == start_row && piece_at(self.grid, step).is_none();
        }
        if dc.abs() == 1 && dr == dir {
            return match piece_at(self.grid, to) {
                Some(target) => target.color != piece.color,
                None => self.en_passant == Some(to),
            };
        }
        false
    }

    /// Applies the move to a scratch grid (including the en-passant
    /// capture) and reports whether the mover's king is left attacked.
    pub fn would_leave_in_check(&self, piece: Piece, from: Square, to: Square) -> bool {
        let mut scratch = *self.grid;
        if piece.kind == PieceKind::Pawn
            && self.en_passant == Some(to)
            && piece_at(&scratch, to).is_none()
        {
            scratch[from.row as usize][to.col as usize] = None;
        }
        scratch[to.row as usize][to.col as usize] = Some(piece);
        scratch[from.row as usize][from.col as usize] = None;
        let after = RulesView {
            grid: &scratch,
            castling: self.castling,
            en_passant: None,
        };
        after.in_check(piece.color)
    }

    /// Castling legality: rights intact, rook present, path empty, and
    /// the king neither in check nor crossing an attacked square.
    pub fn can_castle(&self, color: Color, king_side: bool) -> bool {
        if !self.castling.allows(color, king_side) {
            return false;
        }
        let home_row = match color {
            Color::White => 7,
            Color::Black => 0,
        };
        let rook_col = if king_side { 7 } else { 0 };
        if piece_at(self.grid, Square::new(home_row, 4))
            != Some(Piece::new(color, PieceKind::King))
            || piece_at(self.grid, Square::new(home_row, rook_col))
                != Some(Piece::new(color, PieceKind::Rook))
        {
            return false;
        }
        let between: &[i64] = if king_side { &[5, 6] } else { &[1, 2, 3] };
        if between
            .iter()
            .any(|&col| piece_at(self.grid, Square::new(home_row, col)).is_some())
        {
            return false;
        }
        let crossed: &[i64] = if king_side { &[4, 5, 6] } else { &[4, 3, 2] };
        let enemy = color.opponent();
        !crossed
            .iter()
            .any(|&col| self.square_attacked(Square::new(home_row, col), enemy))
    }

    /// Full legality for `color` moving `from` → `to`. Castling is the
    /// two-column king move; everything else goes through shape and
    /// check-safety validation.
    pub fn is_legal(&self, color: Color, from: Square, to: Square) -> bool {
        if !from.on_board() || !to.on_board() || from == to {
            return false;
        }
        let Some(piece) = piece_at(self.grid, from) else {
            return false;
        };
        if piece.color != color {
            return false;
        }
        if let Some(target) = piece_at(self.grid, to) {
            if target.color == color {
                return false;
            }
        }
        if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let home_row = match color {
                Color::White => 7,
                Color::Black => 0,
            };
            return from == Square::new(home_row, 4)
                && to.row == home_row
                && self.can_castle(color, to.col == 6);
        }
        self.pseudo_legal(piece, from, to) && !self.would_leave_in_check(piece, from, to)
    }

    pub fn has_any_legal_move(&self, color: Color) -> bool {
        for from_row in 0..8 {
            for from_col in 0..8 {
                let from = Square::new(from_row, from_col);
                match piece_at(self.grid, from) {
                    Some(piece) if piece.color == color => {}
                    _ => continue,
                }
                for to_row in 0..8 {
                    for to_col in 0..8 {
                        if self.is_legal(color, from, Square::new(to_row, to_col)) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }
}
