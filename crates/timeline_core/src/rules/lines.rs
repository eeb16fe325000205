//! Candidate winning lines for an N×N board.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which row, column or diagonal a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum LineKind {
    /// Row `r`, left to right.
    #[display("row {_0}")]
    Row(usize),
    /// Column `c`, top to bottom.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A line of exactly N cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: Vec<usize>,
}

impl WinningLine {
    fn new(kind: LineKind, cells: Vec<usize>) -> Self {
        Self { kind, cells }
    }

    /// Returns the line's orientation.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Returns the cell indices in scan order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Generates every candidate line of an `n`×`n` board.
///
/// Order is fixed: rows, then columns, then the main diagonal, then the
/// anti-diagonal, for `2n + 2` lines in total. A zero-sized board has none.
#[instrument]
pub fn winning_lines(n: usize) -> Vec<WinningLine> {
    if n == 0 {
        return Vec::new();
    }

    let rows = (0..n).map(|r| WinningLine::new(LineKind::Row(r), (0..n).map(|c| r * n + c).collect()));
    let columns =
        (0..n).map(|c| WinningLine::new(LineKind::Column(c), (0..n).map(|r| r * n + c).collect()));
    let main = WinningLine::new(LineKind::MainDiagonal, (0..n).map(|i| i * n + i).collect());
    let anti = WinningLine::new(
        LineKind::AntiDiagonal,
        (0..n).map(|i| (i + 1) * n - (i + 1)).collect(),
    );

    rows.chain(columns).chain([main, anti]).collect()
}
