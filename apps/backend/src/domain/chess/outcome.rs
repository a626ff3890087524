//! Game-ending detection: mate, stalemate, and the draw rules.

use super::board::{Color, Grid, PieceKind, Square};
use super::rules::RulesView;

pub fn is_checkmate(view: &RulesView<'_>, color: Color) -> bool {
    view.in_check(color) && !view.has_any_legal_move(color)
}

pub fn is_stalemate(view: &RulesView<'_>, color: Color) -> bool {
    !view.in_check(color) && !view.has_any_legal_move(color)
}

/// Neither side can force mate: bare kings, king + single minor piece,
/// or king + bishop versus king + bishop on the same square color.
pub fn insufficient_material(grid: &Grid) -> bool {
    let mut minors: Vec<(PieceKind, Color, Square)> = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let Some(piece) = grid[row as usize][col as usize] else {
                continue;
            };
            match piece.kind {
                PieceKind::King => {}
                PieceKind::Bishop | PieceKind::Knight => {
                    minors.push((piece.kind, piece.color, Square::new(row, col)));
                }
                _ => return false,
            }
        }
    }
    match minors.as_slice() {
        [] | [_] => true,
        [(PieceKind::Bishop, c1, s1), (PieceKind::Bishop, c2, s2)] => {
            c1 != c2 && (s1.row + s1.col) % 2 == (s2.row + s2.col) % 2
        }
        _ => false,
    }
}

/// The current position has now occurred three times. `history` holds
/// the signature after every move played so far, including this one.
pub fn threefold_repetition(history: &[String], current: &str) -> bool {
    history.iter().filter(|sig| *sig == current).count() >= 3
}
