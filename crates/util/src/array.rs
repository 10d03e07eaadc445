/// Returns a copy of `items` with the entry at `old_index` moved to
/// `new_index`.
///
/// The copy is returned unchanged when either index is out of range or
/// both are equal. The input slice is never modified.
///
/// # Examples
///
/// ```
/// use plainkit_util::array::move_array_entry_index;
///
/// assert_eq!(move_array_entry_index(&[1, 2, 3, 4, 5], 1, 3), vec![1, 3, 4, 2, 5]);
/// assert_eq!(move_array_entry_index(&[1, 2, 3, 4], 1, 4), vec![1, 2, 3, 4]);
/// ```
pub fn move_array_entry_index<T: Clone>(items: &[T], old_index: usize, new_index: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if new_index >= moved.len() || old_index >= moved.len() || old_index == new_index {
        return moved;
    }
    let entry = moved.remove(old_index);
    moved.insert(new_index, entry);
    moved
}
