//! Property tests for selection toggling.

use boxlens_dom::NodeId;
use boxlens_overlay::SelectionSet;
use quickcheck_macros::quickcheck;

fn selection_of(ids: &[u8]) -> SelectionSet {
    let mut selection = SelectionSet::new();
    for &id in ids {
        if !selection.contains(NodeId(usize::from(id))) {
            let _ = selection.toggle(NodeId(usize::from(id)));
        }
    }
    selection
}

/// Toggling the same node twice leaves the selection as it was.
#[quickcheck]
fn prop_double_toggle_is_identity(ids: Vec<u8>, node: u8) -> bool {
    let mut selection = selection_of(&ids);
    let before = selection.clone();
    let _ = selection.toggle(NodeId(usize::from(node)));
    let _ = selection.toggle(NodeId(usize::from(node)));

    // Order may change if the node was already selected: it moves to the end.
    let mut after_sorted = selection.as_slice().to_vec();
    let mut before_sorted = before.as_slice().to_vec();
    after_sorted.sort_by_key(|id| id.0);
    before_sorted.sort_by_key(|id| id.0);
    after_sorted == before_sorted && selection.len() == before.len()
}

/// Toggling a node that is not selected and then toggling it back restores
/// the exact order.
#[quickcheck]
fn prop_double_toggle_of_unselected_keeps_order(ids: Vec<u8>, node: u8) -> bool {
    let mut selection = selection_of(&ids);
    let node = NodeId(usize::from(node));
    if selection.contains(node) {
        return true;
    }
    let before = selection.clone();
    let _ = selection.toggle(node);
    let _ = selection.toggle(node);
    selection == before
}

/// A selection never holds the same node twice.
#[quickcheck]
fn prop_toggling_never_duplicates(toggles: Vec<u8>) -> bool {
    let mut selection = SelectionSet::new();
    for id in toggles {
        let _ = selection.toggle(NodeId(usize::from(id)));
    }
    let mut ids: Vec<usize> = selection.iter().map(|id| id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len() == selection.len()
}
