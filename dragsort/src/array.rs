use alloc::vec::Vec;

/// Returns a copy of `items` with the element at `old_index` moved to `new_index`.
///
/// The input is left untouched. Out-of-range indexes follow splice semantics:
/// - `old_index >= len` removes nothing, so the copy is returned unchanged.
/// - `new_index` past the end (after removal) inserts at the end.
pub fn move_array_element<T: Clone>(items: &[T], old_index: usize, new_index: usize) -> Vec<T> {
    let mut copy = items.to_vec();
    move_element_in_place(&mut copy, old_index, new_index);
    copy
}

/// In-place variant of [`move_array_element`].
///
/// Returns `false` when `old_index` is out of range and nothing moved.
pub fn move_element_in_place<T>(items: &mut Vec<T>, old_index: usize, new_index: usize) -> bool {
    if old_index >= items.len() {
        dwarn!(
            old_index,
            len = items.len(),
            "move_element_in_place: index out of range"
        );
        return false;
    }

    let element = items.remove(old_index);
    let to = new_index.min(items.len());
    items.insert(to, element);
    dtrace!(old_index, new_index = to, "move_element_in_place");
    true
}
