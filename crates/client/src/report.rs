//! Plain-text summaries printed when the demo ends.

use std::fmt::Write;

use game_core::{CellState, GridBag, Slot};
use runtime::Session;

/// The bag as a character grid (`#` blocked, `.` empty, one letter per
/// item) followed by its stacks.
pub fn bag(session: &Session) -> String {
    render_bag(session.bag())
}

fn render_bag(bag: &GridBag) -> String {
    let mut out = format!("bag '{}' ({}x{})\n", bag.kind(), bag.rows(), bag.cols());
    for row in 0..bag.rows() {
        for col in 0..bag.cols() {
            let slot = Slot::new(row, col);
            let glyph = match bag.cell(slot) {
                Some(CellState::Blocked) | None => '#',
                Some(CellState::Empty) => '.',
                Some(CellState::Occupied) => bag
                    .item_at(slot)
                    .and_then(|(_, stack)| stack.item.name.chars().next())
                    .unwrap_or('?'),
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    for (anchor, stack) in bag.stacks() {
        let _ = writeln!(out, "  {anchor} {} x{}", stack.item.name, stack.quantity);
    }
    out
}

/// One line per learned skill: rank, experience and cooldown.
pub fn skills(session: &Session) -> String {
    let book = &session.player().context().skills;
    let mut out = format!("skills (AP {})\n", book.ability_points());
    for skill in book.iter() {
        let _ = writeln!(
            out,
            "  {:<10} rank {:<6} exp {}/{}",
            skill.name(),
            skill.rank(),
            skill.exp(),
            skill.profile().exp_threshold
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use game_core::{BagLayout, ItemCategory, ItemDefinition, ItemHandle};

    use super::*;

    #[test]
    fn grid_marks_blocked_empty_and_items() {
        let layout = BagLayout::rectangle("pouch", 2, 3).with_blocked([Slot::new(0, 2)]);
        let mut bag = GridBag::new(&layout);
        let log = ItemDefinition::new(ItemHandle(4), "Log", ItemCategory::Material, 1, 2, 1);
        assert_eq!(bag.add_item(&log, 1), 1);

        let text = render_bag(&bag);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("bag 'pouch' (2x3)"));
        assert_eq!(lines.next(), Some("L.#"));
        assert_eq!(lines.next(), Some("L.."));
        assert_eq!(lines.next(), Some("  (0, 0) Log x1"));
    }
}
