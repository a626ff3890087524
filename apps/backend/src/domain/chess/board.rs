//! Chess board primitives: colors, pieces, squares, the 8×8 grid.
//!
//! The grid is stored with row 0 as rank 8 (black's back rank) and
//! column 0 as file a. Pieces serialize as one-character FEN codes
//! (uppercase white, lowercase black) and squares as algebraic names.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn code(self) -> char {
        let c = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match code.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(Self { color, kind })
    }
}

impl Serialize for Piece {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code().to_string())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => {
                Piece::from_code(code).ok_or_else(|| D::Error::custom("unknown piece code"))
            }
            _ => Err(D::Error::custom("piece code must be a single character")),
        }
    }
}

pub type Grid = [[Option<Piece>; 8]; 8];

/// A board square. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: i64,
    pub col: i64,
}

impl Square {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    pub fn on_board(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }

    /// Parses algebraic notation like `"e4"`.
    pub fn parse(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = (bytes[0] as i64) - ('a' as i64);
        let rank = (bytes[1] as i64) - ('1' as i64);
        let square = Self::new(7 - rank, col);
        square.on_board().then_some(square)
    }

    pub fn notation(self) -> String {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + (7 - self.row) as u8) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.notation())
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Square::parse(&raw).ok_or_else(|| D::Error::custom("invalid square name"))
    }
}

pub fn piece_at(grid: &Grid, square: Square) -> Option<Piece> {
    if !square.on_board() {
        return None;
    }
    grid[square.row as usize][square.col as usize]
}

pub fn set_piece(grid: &mut Grid, square: Square, piece: Option<Piece>) {
    grid[square.row as usize][square.col as usize] = piece;
}

pub fn find_king(grid: &Grid, color: Color) -> Option<Square> {
    for row in 0..8 {
        for col in 0..8 {
            if grid[row][col] == Some(Piece::new(color, PieceKind::King)) {
                return Some(Square::new(row as i64, col as i64));
            }
        }
    }
    None
}

pub fn initial_grid() -> Grid {
    use Color::{Black, White};
    use PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

    let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
    let mut grid: Grid = [[None; 8]; 8];
    for (col, &kind) in back.iter().enumerate() {
        grid[0][col] = Some(Piece::new(Black, kind));
        grid[7][col] = Some(Piece::new(White, kind));
    }
    for col in 0..8 {
        grid[1][col] = Some(Piece::new(Black, Pawn));
        grid[6][col] = Some(Piece::new(White, Pawn));
    }
    grid
}

/// Position signature used for repetition detection: FEN piece placement
/// plus side to move, castling availability, and en-passant target.
pub fn signature(
    grid: &Grid,
    turn: Color,
    castling: &str,
    en_passant: Option<Square>,
) -> String {
    let mut placement = String::new();
    for (row_index, row) in grid.iter().enumerate() {
        if row_index > 0 {
            placement.push('/');
        }
        let mut empty = 0;
        for piece in row {
            match piece {
                Some(piece) => {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.code());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            placement.push_str(&empty.to_string());
        }
    }
    let side = match turn {
        Color::White => 'w',
        Color::Black => 'b',
    };
    let castling = if castling.is_empty() { "-" } else { castling };
    let target = en_passant.map_or_else(|| "-".to_owned(), |sq| sq.notation());
    format!("{placement} {side} {castling} {target}")
}
