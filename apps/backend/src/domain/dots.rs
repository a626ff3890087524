//! Dots and boxes on a `grid_size` × `grid_size` lattice of dots.
//!
//! Lines are stored as canonical `"x1,y1,x2,y2"` keys with the
//! lexicographically smaller endpoint first. Completing a box grants
//! the mover an extra turn; the game ends when all `(grid_size - 1)²`
//! boxes are claimed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;
use crate::domain::variant::{MoveContext, MoveEffect, MovePayload, VariantRules};
use crate::errors::DomainError;

pub const DEFAULT_GRID_SIZE: i64 = 5;

fn default_grid_size() -> i64 {
    DEFAULT_GRID_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DotsBoard {
    pub lines: Vec<String>,
    pub boxes: BTreeMap<String, PlayerId>,
    #[serde(rename = "gridSize", default = "default_grid_size")]
    pub grid_size: i64,
}

/// A drawn line between two adjacent dots, endpoints ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Line {
    /// Parses and canonicalizes a `"x1,y1,x2,y2"` key. Endpoints must be
    /// distinct dots one unit apart, inside the grid; the smaller endpoint
    /// (compared as an `(x, y)` pair) comes first.
    pub fn parse(key: &str, grid_size: i64) -> Result<Self, DomainError> {
        let parts: Vec<i64> = key
            .split(',')
            .map(|p| p.trim().parse::<i64>())
            .collect::<Result<_, _>>()
            .map_err(|_| DomainError::invalid_move(format!("malformed line key '{key}'")))?;
        let [x1, y1, x2, y2] = parts[..] else {
            return Err(DomainError::invalid_move(format!(
                "malformed line key '{key}'"
            )));
        };
        let ((x1, y1), (x2, y2)) = if (x1, y1) <= (x2, y2) {
            ((x1, y1), (x2, y2))
        } else {
            ((x2, y2), (x1, y1))
        };
        let in_grid = |x: i64, y: i64| (0..grid_size).contains(&x) && (0..grid_size).contains(&y);
        if !in_grid(x1, y1) || !in_grid(x2, y2) {
            return Err(DomainError::invalid_move(format!(
                "line '{key}' is outside the grid"
            )));
        }
        let unit = ((x2 - x1).abs(), (y2 - y1).abs());
        if unit != (1, 0) && unit != (0, 1) {
            return Err(DomainError::invalid_move(format!(
                "line '{key}' does not join adjacent dots"
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    pub fn key(&self) -> String {
        format!("{},{},{},{}", self.x1, self.y1, self.x2, self.y2)
    }
}

fn line_key(x1: i64, y1: i64, x2: i64, y2: i64) -> String {
    if (x1, y1) <= (x2, y2) {
        format!("{x1},{y1},{x2},{y2}")
    } else {
        format!("{x2},{y2},{x1},{y1}")
    }
}

impl DotsBoard {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            boxes: BTreeMap::new(),
            grid_size: DEFAULT_GRID_SIZE,
        }
    }

    pub fn total_boxes(&self) -> usize {
        let edge = (self.grid_size - 1).max(0) as usize;
        edge * edge
    }

    fn has_line(&self, key: &str) -> bool {
        self.lines.iter().any(|l| l == key)
    }

    /// The four edges of the box whose top-left dot is `(bx, by)`.
    fn box_edges(bx: i64, by: i64) -> [String; 4] {
        [
            line_key(bx, by, bx + 1, by),         // top
            line_key(bx, by + 1, bx + 1, by + 1), // bottom
            line_key(bx, by, bx, by + 1),         // left
            line_key(bx + 1, by, bx + 1, by + 1), // right
        ]
    }

    /// Claims any boxes completed by the line just drawn; returns how many.
    fn claim_completed_boxes(&mut self, line: &Line, owner: &str) -> usize {
        let mut claimed = 0;
        let candidates: [(i64, i64); 2] = if line.y1 == line.y2 {
            // Horizontal line: boxes above and below.
            [(line.x1, line.y1 - 1), (line.x1, line.y1)]
        } else {
            // Vertical line: boxes left and right.
            [(line.x1 - 1, line.y1), (line.x1, line.y1)]
        };
        for (bx, by) in candidates {
            if bx < 0 || by < 0 || bx >= self.grid_size - 1 || by >= self.grid_size - 1 {
                continue;
            }
            let box_key = format!("{bx},{by}");
            if self.boxes.contains_key(&box_key) {
                continue;
            }
            if Self::box_edges(bx, by).iter().all(|e| self.has_line(e)) {
                self.boxes.insert(box_key, owner.to_owned());
                claimed += 1;
            }
        }
        claimed
    }

    /// Winner by box count; ties go to the earliest tied player in join
    /// order. `max_by_key` keeps the last maximum, so scan in reverse.
    fn winner(&self, players: &[PlayerId]) -> Option<PlayerId> {
        players
            .iter()
            .rev()
            .max_by_key(|p| self.boxes.values().filter(|owner| owner == p).count())
            .cloned()
    }
}

impl VariantRules for DotsBoard {
    fn apply_move(
        &mut self,
        ctx: &MoveContext<'_>,
        payload: &MovePayload,
    ) -> Result<MoveEffect, DomainError> {
        let MovePayload::Line(raw) = payload else {
            return Err(DomainError::invalid_move("dots expects a line key string"));
        };
        let line = Line::parse(raw, self.grid_size)?;
        let key = line.key();
        if self.has_line(&key) {
            return Err(DomainError::LineAlreadyExists);
        }

        self.lines.push(key);
        let claimed = self.claim_completed_boxes(&line, ctx.mover);

        if self.boxes.len() >= self.total_boxes() {
            return Ok(match self.winner(ctx.players) {
                Some(player) => MoveEffect::won(player),
                None => MoveEffect::draw(),
            });
        }
        let mut effect = MoveEffect::ongoing();
        effect.extra_turn = claimed > 0;
        Ok(effect)
    }
}
