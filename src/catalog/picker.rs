// Controlled category selection - the admin form owns a fixed set of
// slots and this module keeps them consistent
use super::navigator::DRILL_LEVELS;
use super::tree::{options_at_level, CategoryId, CategoryNode};

/// Host-owned selection for the admin picker: one slot per drill level,
/// `None` marking an empty slot.
pub type CategorySlots = [Option<CategoryId>; DRILL_LEVELS];

pub const EMPTY_SLOTS: CategorySlots = [None; DRILL_LEVELS];

/// The contiguous filled prefix of the slots, as a selection path for
/// [`options_at_level`]. A hole ends the prefix - slots below a cleared
/// level never contribute.
pub fn slot_prefix(slots: &CategorySlots) -> Vec<CategoryId> {
    slots.iter().map_while(|slot| *slot).collect()
}

/// Options offered by the dropdown at `level` for the current slots.
pub fn slot_options<'a>(
    tree: &'a [CategoryNode],
    slots: &CategorySlots,
    level: usize,
) -> &'a [CategoryNode] {
    options_at_level(tree, &slot_prefix(slots), level)
}

/// Set the slot at `level` and clear every deeper slot - picking a new
/// second-level category invalidates whatever third-level pick was made
/// under the old one.
pub fn select_at(slots: &mut CategorySlots, level: usize, id: CategoryId) {
    if level >= DRILL_LEVELS {
        return;
    }
    slots[level] = Some(id);
    for slot in slots.iter_mut().skip(level + 1) {
        *slot = None;
    }
}

/// The deepest filled slot: the category the form will submit.
pub fn deepest(slots: &CategorySlots) -> Option<CategoryId> {
    slots.iter().rev().find_map(|slot| *slot)
}

/// Seed the slots from a known category id by resolving its path.
pub fn slots_from_path(path: &[CategoryId]) -> CategorySlots {
    let mut slots = EMPTY_SLOTS;
    for (level, id) in path.iter().take(DRILL_LEVELS).enumerate() {
        slots[level] = Some(*id);
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::super::tree::tests::sample_tree;
    use super::super::tree::tree_path;
    use super::*;

    #[test]
    fn selecting_clears_deeper_slots() {
        let mut slots = [Some(1), Some(2), Some(4)];
        select_at(&mut slots, 0, 6);
        assert_eq!(slots, [Some(6), None, None]);

        select_at(&mut slots, 1, 7);
        assert_eq!(slots, [Some(6), Some(7), None]);
    }

    #[test]
    fn prefix_stops_at_first_hole() {
        assert_eq!(slot_prefix(&[Some(1), None, Some(4)]), vec![1]);
        assert!(slot_prefix(&EMPTY_SLOTS).is_empty());
    }

    #[test]
    fn deepest_filled_slot_wins() {
        assert_eq!(deepest(&[Some(1), Some(2), None]), Some(2));
        assert_eq!(deepest(&[Some(1), None, None]), Some(1));
        assert_eq!(deepest(&EMPTY_SLOTS), None);
    }

    #[test]
    fn options_per_slot() {
        let tree = sample_tree();
        let slots = [Some(1), Some(2), None];
        let ids = |level| {
            slot_options(&tree, &slots, level)
                .iter()
                .map(|n| n.category_id)
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(0), vec![1, 6]);
        assert_eq!(ids(1), vec![2, 5]);
        assert_eq!(ids(2), vec![3, 4]);
    }

    #[test]
    fn third_dropdown_is_empty_until_second_is_picked() {
        let tree = sample_tree();
        let slots = [Some(1), None, None];
        assert!(slot_options(&tree, &slots, 2).is_empty());
    }

    #[test]
    fn seeding_from_resolved_path() {
        let tree = sample_tree();
        let slots = slots_from_path(&tree_path(&tree, 4));
        assert_eq!(slots, [Some(1), Some(2), Some(4)]);
        assert_eq!(deepest(&slots), Some(4));
    }
}
