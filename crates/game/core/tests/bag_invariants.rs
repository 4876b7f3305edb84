//! Randomised operation sequences against the bag bookkeeping.

use game_core::{
    BagLayout, CellState, GridBag, ItemCategory, ItemDefinition, ItemHandle, PcgRng, RngOracle,
    Slot,
};

fn catalog() -> Vec<ItemDefinition> {
    vec![
        ItemDefinition::new(ItemHandle(1), "Ore", ItemCategory::Material, 1, 1, 10),
        ItemDefinition::new(ItemHandle(2), "Plank", ItemCategory::Material, 2, 1, 5),
        ItemDefinition::new(ItemHandle(3), "Shield", ItemCategory::Equipment, 2, 2, 1),
        ItemDefinition::new(ItemHandle(4), "Spear", ItemCategory::Equipment, 1, 3, 1),
    ]
}

struct Dice {
    rng: PcgRng,
    state: u64,
}

impl Dice {
    fn new(seed: u64) -> Self {
        Self { rng: PcgRng, state: seed }
    }

    fn below(&mut self, n: usize) -> usize {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        self.rng.next_u32(self.state) as usize % n
    }

    /// A coordinate that is usually near the grid and sometimes far past it.
    fn coordinate(&mut self, near: usize) -> usize {
        match self.below(8) {
            0 => usize::MAX - self.below(4),
            1 => usize::MAX / 2 + self.below(4),
            _ => self.below(near),
        }
    }
}

fn assert_invariants(bag: &GridBag) {
    bag.validate().expect("bag bookkeeping is consistent");

    let mut occupied = 0;
    for row in 0..bag.rows() {
        for col in 0..bag.cols() {
            let slot = Slot::new(row, col);
            let owned = bag.item_at(slot).is_some();
            let state = bag.cell(slot).expect("in bounds");
            assert_eq!(state == CellState::Occupied, owned, "cell {slot}");
            if owned {
                occupied += 1;
            }
        }
    }
    let area: usize = bag.stacks().map(|(_, stack)| stack.footprint.area()).sum();
    assert_eq!(area, occupied);
}

#[test]
fn every_operation_preserves_bookkeeping() {
    let items = catalog();

    for seed in 0..16 {
        let layout = BagLayout::rectangle("irregular", 5, 6).with_blocked([
            Slot::new(0, 0),
            Slot::new(4, 5),
            Slot::new(2, 3),
        ]);
        let mut bag = GridBag::new(&layout);
        let mut dice = Dice::new(seed);

        for _ in 0..200 {
            let anchor = Slot::new(dice.coordinate(6), dice.coordinate(7));
            match dice.below(6) {
                0 | 1 => {
                    let item = &items[dice.below(items.len())];
                    let quantity = dice.below(12) as u16 + 1;
                    let added = bag.add_item(item, quantity);
                    assert!(added <= quantity);
                }
                2 => {
                    let item = &items[dice.below(items.len())];
                    let _ = bag.add_item_at(item, 1, anchor);
                }
                3 => {
                    let quantity = dice.below(4) as u16;
                    let _ = bag.remove_item_at(quantity, anchor);
                }
                4 => {
                    let from = bag.stacks().map(|(slot, _)| slot).next().unwrap_or(anchor);
                    let _ = bag.shift_item(from, anchor);
                }
                _ => {
                    let width = dice.coordinate(4) | 1;
                    let height = dice.coordinate(4) | 1;
                    let outside = anchor.row >= bag.rows()
                        || anchor.col >= bag.cols()
                        || width > bag.cols() - anchor.col.min(bag.cols())
                        || height > bag.rows() - anchor.row.min(bag.rows());
                    if outside {
                        assert!(!bag.is_region_empty(anchor, width, height));
                    }
                    if width > bag.cols() || height > bag.rows() {
                        assert_eq!(bag.find_free_region(width, height), None);
                    }
                    if let Some(slot) = bag.find_free_region(width, height) {
                        assert!(bag.is_region_empty(slot, width, height));
                    }
                }
            }
            assert_invariants(&bag);
        }
    }
}

#[test]
fn rejected_operations_leave_bag_untouched() {
    let items = catalog();
    let mut bag = GridBag::new(&BagLayout::rectangle("pack", 4, 4));
    bag.add_item(&items[2], 1);
    bag.add_item(&items[0], 7);
    let snapshot: Vec<_> = bag
        .stacks()
        .map(|(slot, stack)| (slot, stack.item.handle, stack.quantity))
        .collect();
    let revision = bag.revision();

    assert!(bag.shift_item(Slot::new(0, 0), Slot::new(0, 2)).is_err());
    assert!(bag.remove_item_at(8, Slot::new(0, 2)).is_err());
    assert!(bag.add_item_at(&items[3], 1, Slot::new(2, 0)).is_err());
    assert!(bag.remove_item(ItemHandle(4), 1).is_err());

    let after: Vec<_> = bag
        .stacks()
        .map(|(slot, stack)| (slot, stack.item.handle, stack.quantity))
        .collect();
    assert_eq!(snapshot, after);
    assert_eq!(bag.revision(), revision);
    assert_invariants(&bag);
}
