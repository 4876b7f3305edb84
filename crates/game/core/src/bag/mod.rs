//! Grid inventory bag.
//!
//! A bag is a fixed `rows x cols` grid, possibly with blocked cells cutting it
//! into an irregular shape. Each item stack occupies a rectangular footprint
//! and is keyed by its *anchor*, the footprint's top-left cell.
//!
//! Three structures are kept in lock-step:
//!
//! - `cells`: per-cell [`CellState`]
//! - `slot_owner`: occupied cell -> anchor of the stack covering it
//! - `items`: anchor -> [`BagStack`]
//!
//! Every public mutator either fails without touching any of them or leaves
//! them consistent before returning (see [`GridBag::validate`]).
mod error;
mod grid;

use std::collections::BTreeMap;

pub use error::BagError;
pub use grid::{BagLayout, CellState, Footprint, Slot};

use crate::env::ItemDefinition;
use crate::types::ItemHandle;

/// One stack stored in the bag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BagStack {
    pub item: ItemDefinition,
    pub quantity: u16,
    /// Footprint captured at insertion time.
    pub footprint: Footprint,
    sequence: u64,
}

impl BagStack {
    pub fn is_full(&self) -> bool {
        self.quantity >= self.item.max_stack
    }

    /// Insertion order among all stacks ever placed in this bag.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Spatial inventory over an irregular grid.
#[derive(Clone, Debug)]
pub struct GridBag {
    kind: String,
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
    slot_owner: BTreeMap<Slot, Slot>,
    items: BTreeMap<Slot, BagStack>,
    next_sequence: u64,
    revision: u64,
}

impl GridBag {
    /// Builds an empty bag in the given shape. Blocked cells outside the
    /// grid are ignored.
    pub fn new(layout: &BagLayout) -> Self {
        let mut cells = vec![CellState::Empty; layout.rows * layout.cols];
        for slot in &layout.blocked {
            if slot.row < layout.rows && slot.col < layout.cols {
                cells[slot.row * layout.cols + slot.col] = CellState::Blocked;
            }
        }

        Self {
            kind: layout.kind.clone(),
            rows: layout.rows,
            cols: layout.cols,
            cells,
            slot_owner: BTreeMap::new(),
            items: BTreeMap::new(),
            next_sequence: 0,
            revision: 0,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Bumped once per successful mutation; observers compare it to detect change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, slot: Slot) -> bool {
        slot.row < self.rows && slot.col < self.cols
    }

    pub fn cell(&self, slot: Slot) -> Option<CellState> {
        self.index(slot).map(|index| self.cells[index])
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|state| **state == CellState::Occupied)
            .count()
    }

    /// Stack anchored exactly at `anchor`.
    pub fn stack(&self, anchor: Slot) -> Option<&BagStack> {
        self.items.get(&anchor)
    }

    /// Resolves any cell of a footprint to its anchor and stack.
    pub fn item_at(&self, cell: Slot) -> Option<(Slot, &BagStack)> {
        let anchor = *self.slot_owner.get(&cell)?;
        self.items.get(&anchor).map(|stack| (anchor, stack))
    }

    /// All stacks in anchor (row-major) order.
    pub fn stacks(&self) -> impl Iterator<Item = (Slot, &BagStack)> {
        self.items.iter().map(|(anchor, stack)| (*anchor, stack))
    }

    /// Total quantity of `handle` across all stacks.
    pub fn count_of(&self, handle: ItemHandle) -> u32 {
        self.items
            .values()
            .filter(|stack| stack.item.handle == handle)
            .map(|stack| u32::from(stack.quantity))
            .sum()
    }

    // ========================================================================
    // Region queries
    // ========================================================================

    /// First anchor, scanning rows top to bottom and columns left to right
    /// within each row, whose `width x height` rectangle is in bounds and
    /// entirely empty.
    pub fn find_free_region(&self, width: usize, height: usize) -> Option<Slot> {
        let footprint = Footprint::new(width, height);
        if !footprint.is_valid() || width > self.cols || height > self.rows {
            return None;
        }

        (0..=self.rows - height)
            .flat_map(|row| (0..=self.cols - width).map(move |col| Slot::new(row, col)))
            .find(|anchor| self.is_footprint_empty(*anchor, footprint))
    }

    /// `true` iff every cell of the rectangle is in bounds and `Empty`.
    /// Blocked cells count as not empty.
    pub fn is_region_empty(&self, anchor: Slot, width: usize, height: usize) -> bool {
        self.is_footprint_empty(anchor, Footprint::new(width, height))
    }

    fn is_footprint_empty(&self, anchor: Slot, footprint: Footprint) -> bool {
        self.fits(anchor, footprint)
            && footprint
                .cells(anchor)
                .all(|cell| self.cell(cell) == Some(CellState::Empty))
    }

    /// Bulk-writes cell states for a rectangle.
    ///
    /// Writing `Occupied` registers each cell as owned by `anchor`; writing
    /// `Empty` removes the registration. Blocked cells inside the rectangle are
    /// left alone, cells outside the grid are skipped, and a `Blocked` request
    /// is a no-op because the bag shape is fixed after construction.
    pub(crate) fn set_region_state(
        &mut self,
        anchor: Slot,
        width: usize,
        height: usize,
        state: CellState,
    ) {
        if state == CellState::Blocked {
            tracing::trace!(%anchor, "ignoring Blocked region write");
            return;
        }

        for cell in Footprint::new(width, height).cells(anchor) {
            let Some(index) = self.index(cell) else {
                continue;
            };
            if self.cells[index] == CellState::Blocked {
                continue;
            }
            self.cells[index] = state;
            match state {
                CellState::Occupied => {
                    self.slot_owner.insert(cell, anchor);
                }
                CellState::Empty => {
                    self.slot_owner.remove(&cell);
                }
                CellState::Blocked => {}
            }
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Places up to `quantity` of `item` and returns how many were placed.
    ///
    /// Partial stacks of the same item are topped up first, oldest first. The
    /// remainder goes into new stacks (each capped at `max_stack`) at the
    /// first free regions. Whatever could not be placed is the caller's.
    pub fn add_item(&mut self, item: &ItemDefinition, quantity: u16) -> u16 {
        let footprint = item.footprint();
        if quantity == 0 || item.max_stack == 0 || !footprint.is_valid() {
            return 0;
        }

        let mut remaining = quantity;

        let mut partial: Vec<(u64, Slot)> = self
            .items
            .iter()
            .filter(|(_, stack)| stack.item.handle == item.handle && !stack.is_full())
            .map(|(anchor, stack)| (stack.sequence, *anchor))
            .collect();
        partial.sort_unstable();

        for (_, anchor) in partial {
            if remaining == 0 {
                break;
            }
            if let Some(stack) = self.items.get_mut(&anchor) {
                let room = stack.item.max_stack - stack.quantity;
                let moved = room.min(remaining);
                stack.quantity += moved;
                remaining -= moved;
            }
        }

        while remaining > 0 {
            let Some(anchor) = self.find_free_region(footprint.width, footprint.height) else {
                break;
            };
            let placed = remaining.min(item.max_stack);
            self.insert_stack(anchor, item, placed);
            remaining -= placed;
        }

        let added = quantity - remaining;
        if added > 0 {
            self.notify();
        }
        if remaining > 0 {
            tracing::debug!(item = %item.handle, added, overflow = remaining, "bag full");
        }
        added
    }

    /// Places a new stack at a known anchor, as when restoring a layout.
    ///
    /// Never merges with an existing stack. The footprint must fit on empty
    /// cells and the quantity must be within `1..=max_stack`.
    pub fn add_item_at(
        &mut self,
        item: &ItemDefinition,
        quantity: u16,
        anchor: Slot,
    ) -> Result<(), BagError> {
        let footprint = item.footprint();
        if !self.contains(anchor) {
            return Err(BagError::OutOfBounds(anchor));
        }
        if !footprint.is_valid() {
            return Err(BagError::InvalidFootprint);
        }
        if quantity == 0 {
            return Err(BagError::ZeroQuantity);
        }
        if quantity > item.max_stack {
            return Err(BagError::ExceedsStackLimit {
                quantity,
                max_stack: item.max_stack,
            });
        }
        if self.items.contains_key(&anchor) {
            return Err(BagError::AnchorOccupied(anchor));
        }
        if !self.is_footprint_empty(anchor, footprint) {
            return Err(BagError::RegionUnavailable(anchor));
        }

        self.insert_stack(anchor, item, quantity);
        self.notify();
        Ok(())
    }

    /// Takes `quantity` from the stack at `anchor`, freeing its region when
    /// the stack empties.
    pub fn remove_item_at(&mut self, quantity: u16, anchor: Slot) -> Result<(), BagError> {
        if !self.contains(anchor) {
            return Err(BagError::OutOfBounds(anchor));
        }
        if quantity == 0 {
            return Err(BagError::ZeroQuantity);
        }
        let stack = self
            .items
            .get_mut(&anchor)
            .ok_or(BagError::NoItemAt(anchor))?;
        if quantity > stack.quantity {
            return Err(BagError::InsufficientQuantity {
                requested: u32::from(quantity),
                available: u32::from(stack.quantity),
            });
        }

        stack.quantity -= quantity;
        if stack.quantity == 0 {
            self.remove_stack(anchor);
        }
        self.notify();
        Ok(())
    }

    /// Consumes `quantity` of `handle` across stacks, oldest stack first.
    ///
    /// All-or-nothing: fails without change when the bag holds less.
    pub fn remove_item(&mut self, handle: ItemHandle, quantity: u32) -> Result<(), BagError> {
        if quantity == 0 {
            return Err(BagError::ZeroQuantity);
        }
        let available = self.count_of(handle);
        if available < quantity {
            return Err(BagError::InsufficientQuantity {
                requested: quantity,
                available,
            });
        }

        let mut stacks: Vec<(u64, Slot)> = self
            .items
            .iter()
            .filter(|(_, stack)| stack.item.handle == handle)
            .map(|(anchor, stack)| (stack.sequence, *anchor))
            .collect();
        stacks.sort_unstable();

        let mut remaining = quantity;
        for (_, anchor) in stacks {
            if remaining == 0 {
                break;
            }
            let Some(stack) = self.items.get_mut(&anchor) else {
                continue;
            };
            let taken = u16::try_from(remaining).map_or(stack.quantity, |r| r.min(stack.quantity));
            stack.quantity -= taken;
            remaining -= u32::from(taken);
            if stack.quantity == 0 {
                self.remove_stack(anchor);
            }
        }

        self.notify();
        Ok(())
    }

    /// Moves the stack anchored at `from` so that it is anchored at `to`.
    ///
    /// The source footprint is released before the destination is checked,
    /// so a stack may slide onto cells it currently covers. On any conflict
    /// the source is restored and the bag is unchanged.
    pub fn shift_item(&mut self, from: Slot, to: Slot) -> Result<(), BagError> {
        if !self.contains(from) {
            return Err(BagError::OutOfBounds(from));
        }
        if !self.contains(to) {
            return Err(BagError::OutOfBounds(to));
        }
        if self.items.contains_key(&to) {
            return Err(BagError::AnchorOccupied(to));
        }
        let Some(stack) = self.items.remove(&from) else {
            return Err(BagError::NoItemAt(from));
        };

        let footprint = stack.footprint;
        self.set_region_state(from, footprint.width, footprint.height, CellState::Empty);

        if !self.is_footprint_empty(to, footprint) {
            self.set_region_state(from, footprint.width, footprint.height, CellState::Occupied);
            self.items.insert(from, stack);
            return Err(BagError::RegionUnavailable(to));
        }

        self.set_region_state(to, footprint.width, footprint.height, CellState::Occupied);
        self.items.insert(to, stack);
        self.notify();
        Ok(())
    }

    // ========================================================================
    // Consistency
    // ========================================================================

    /// Checks the cell/owner/stack bookkeeping.
    pub fn validate(&self) -> Result<(), BagError> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let slot = Slot::new(row, col);
                let occupied = self.cell(slot) == Some(CellState::Occupied);
                if occupied != self.slot_owner.contains_key(&slot) {
                    return Err(BagError::Corrupted("cell state disagrees with slot owner"));
                }
            }
        }

        for (cell, anchor) in &self.slot_owner {
            let stack = self
                .items
                .get(anchor)
                .ok_or(BagError::Corrupted("slot owner points at a missing stack"))?;
            let inside = cell.row >= anchor.row
                && cell.row < anchor.row + stack.footprint.height
                && cell.col >= anchor.col
                && cell.col < anchor.col + stack.footprint.width;
            if !inside {
                return Err(BagError::Corrupted("owned cell outside its stack footprint"));
            }
        }

        for (anchor, stack) in &self.items {
            if stack.quantity == 0 {
                return Err(BagError::Corrupted("empty stack kept in bag"));
            }
            if stack
                .footprint
                .cells(*anchor)
                .any(|cell| self.slot_owner.get(&cell) != Some(anchor))
            {
                return Err(BagError::Corrupted("stack footprint not fully owned"));
            }
        }

        let area: usize = self.items.values().map(|stack| stack.footprint.area()).sum();
        if area != self.occupied_cells() {
            return Err(BagError::Corrupted("footprint area differs from occupied cells"));
        }
        Ok(())
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn index(&self, slot: Slot) -> Option<usize> {
        self.contains(slot).then(|| slot.row * self.cols + slot.col)
    }

    fn fits(&self, anchor: Slot, footprint: Footprint) -> bool {
        footprint.is_valid()
            && self.contains(anchor)
            && footprint.height <= self.rows - anchor.row
            && footprint.width <= self.cols - anchor.col
    }

    fn insert_stack(&mut self, anchor: Slot, item: &ItemDefinition, quantity: u16) {
        let footprint = item.footprint();
        self.set_region_state(anchor, footprint.width, footprint.height, CellState::Occupied);
        self.items.insert(
            anchor,
            BagStack {
                item: item.clone(),
                quantity,
                footprint,
                sequence: self.next_sequence,
            },
        );
        self.next_sequence += 1;
    }

    fn remove_stack(&mut self, anchor: Slot) {
        if let Some(stack) = self.items.remove(&anchor) {
            let footprint = stack.footprint;
            self.set_region_state(anchor, footprint.width, footprint.height, CellState::Empty);
        }
    }

    fn notify(&mut self) {
        self.revision += 1;
        debug_assert!(self.validate().is_ok(), "bag invariant broken");
        tracing::trace!(kind = %self.kind, revision = self.revision, "bag changed");
    }
}
