//! Grid geometry: cell states, coordinates, footprints and bag layouts.

use std::fmt;

/// State of one bag cell.
///
/// The raw values mirror the design data (`-1`, `0`, `1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum CellState {
    /// Not part of the bag shape; never participates in placement.
    Blocked = -1,
    Empty = 0,
    Occupied = 1,
}

impl CellState {
    /// Decodes a raw cell value. Unknown values yield `None`.
    pub const fn from_raw(raw: i8) -> Option<Self> {
        match raw {
            -1 => Some(Self::Blocked),
            0 => Some(Self::Empty),
            1 => Some(Self::Occupied),
            _ => None,
        }
    }

    pub const fn raw(self) -> i8 {
        self as i8
    }
}

/// Grid coordinate. Ordering is row-major, matching the free-region scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Width x height rectangle of cells occupied by one stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const UNIT: Self = Self::new(1, 1);

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub const fn area(self) -> usize {
        self.width * self.height
    }

    pub const fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// All cells covered when the footprint's top-left sits on `anchor`.
    pub fn cells(self, anchor: Slot) -> impl Iterator<Item = Slot> {
        let rows = anchor.row..anchor.row.saturating_add(self.height);
        rows.flat_map(move |row| {
            (anchor.col..anchor.col.saturating_add(self.width)).map(move |col| Slot::new(row, col))
        })
    }
}

/// Shape of a bag: dimensions plus the cells cut out of the rectangle.
///
/// Selected by `kind` when a bag is constructed; fixed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BagLayout {
    pub kind: String,
    pub rows: usize,
    pub cols: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: Vec<Slot>,
}

impl BagLayout {
    /// A plain rectangular bag with no blocked cells.
    pub fn rectangle(kind: impl Into<String>, rows: usize, cols: usize) -> Self {
        Self {
            kind: kind.into(),
            rows,
            cols,
            blocked: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_blocked(mut self, blocked: impl IntoIterator<Item = Slot>) -> Self {
        self.blocked.extend(blocked);
        self
    }

    /// Number of cells that can hold items.
    pub fn usable_cells(&self) -> usize {
        let mut blocked: Vec<Slot> = self
            .blocked
            .iter()
            .copied()
            .filter(|slot| slot.row < self.rows && slot.col < self.cols)
            .collect();
        blocked.sort_unstable();
        blocked.dedup();
        self.rows * self.cols - blocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trip_and_unknown_values() {
        for state in [CellState::Blocked, CellState::Empty, CellState::Occupied] {
            assert_eq!(CellState::from_raw(state.raw()), Some(state));
        }
        assert_eq!(CellState::from_raw(2), None);
        assert_eq!(CellState::from_raw(-7), None);
    }

    #[test]
    fn footprint_cells_are_row_major() {
        let cells: Vec<Slot> = Footprint::new(2, 2).cells(Slot::new(1, 3)).collect();
        assert_eq!(
            cells,
            vec![
                Slot::new(1, 3),
                Slot::new(1, 4),
                Slot::new(2, 3),
                Slot::new(2, 4)
            ]
        );
    }

    #[test]
    fn usable_cells_ignores_duplicates_and_out_of_range() {
        let layout = BagLayout::rectangle("pouch", 2, 3).with_blocked([
            Slot::new(0, 0),
            Slot::new(0, 0),
            Slot::new(5, 5),
        ]);
        assert_eq!(layout.usable_cells(), 5);
    }
}
