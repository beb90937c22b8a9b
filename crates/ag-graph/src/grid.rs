//! Sparse, auto-growing 2-D grid of item references.

use ag_core::{CoreError, CoreResult, ItemId};
use ag_lex::Position;

/// Row-major grid mapping cells to the item occupying them.
///
/// Rows grow independently: a row is only as wide as the rightmost cell
/// written to it. Reads outside the written area, including negative
/// coordinates, are empty.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<Option<ItemId>>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows written so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of `row`, or 0 if it was never written.
    pub fn row_width(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Write `item` into columns `[col, col + width)` of `position.row`.
    ///
    /// `None` marks the cells as explicitly empty (spaces). Writing an item
    /// over a cell another item already holds is an invariant violation.
    pub fn insert(
        &mut self,
        position: Position,
        width: usize,
        item: Option<ItemId>,
    ) -> CoreResult<()> {
        let Position { row, col } = position;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }

        let cells = &mut self.rows[row];
        let end = col + width;
        if cells.len() < end {
            cells.resize(end, None);
        }

        for cell in &mut cells[col..end] {
            if cell.is_some() && item.is_some() {
                return Err(CoreError::Invariant {
                    what: "grid cell already occupied",
                });
            }
            *cell = item;
        }
        Ok(())
    }

    /// Occupant at signed coordinates; never wraps around.
    pub fn get(&self, row: isize, col: isize) -> Option<ItemId> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.rows.get(row)?.get(col).copied().flatten()
    }

    /// Distinct occupants bordering a horizontal run of `length` cells.
    ///
    /// Scans the row above and the row below from `col - 1` through
    /// `col + length`, then the cells directly left and right on the same
    /// row. Results keep first-seen order.
    pub fn neighbors(&self, row: usize, col: usize, length: usize) -> Vec<ItemId> {
        let (r, c, len) = (row as isize, col as isize, length as isize);
        let span = c - 1..=c + len;

        let above = span.clone().map(|x| (r - 1, x));
        let below = span.map(|x| (r + 1, x));
        let sides = [(r, c - 1), (r, c + len)];

        let mut found = Vec::new();
        for (rr, cc) in above.chain(below).chain(sides) {
            if let Some(id) = self.get(rr, cc) {
                if !found.contains(&id) {
                    found.push(id);
                }
            }
        }
        found
    }
}
