//! Drag-to-reorder over sections or over the lectures of one section.

/// Returns a copy of `items` with the element at `old_index` moved to
/// `new_index`; the elements in between shift by one.
///
/// Both indices are clamped into range. An empty slice yields an empty vec.
pub fn reorder<T: Clone>(items: &[T], old_index: usize, new_index: usize) -> Vec<T> {
    let mut result = items.to_vec();
    move_item(&mut result, old_index, new_index);
    result
}

/// In-place variant of [`reorder`]. Returns true when the order changed.
pub fn move_item<T>(items: &mut Vec<T>, old_index: usize, new_index: usize) -> bool {
    if items.is_empty() {
        return false;
    }
    let last = items.len() - 1;
    let from = old_index.min(last);
    let to = new_index.min(last);
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Translates a drop of `active_id` onto `over_id` into an index pair.
///
/// `None` when either id is unknown or both are the same element.
pub fn drop_indices<T>(
    items: &[T],
    active_id: &str,
    over_id: &str,
    id_of: impl Fn(&T) -> &str,
) -> Option<(usize, usize)> {
    if active_id == over_id {
        return None;
    }
    let from = items.iter().position(|item| id_of(item) == active_id)?;
    let to = items.iter().position(|item| id_of(item) == over_id)?;
    Some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_same_index_is_identity() {
        let items = vec!['a', 'b', 'c', 'd'];
        for i in 0..items.len() {
            assert_eq!(reorder(&items, i, i), items);
        }
    }

    #[test]
    fn test_reorder_round_trip() {
        let items = vec!['a', 'b', 'c', 'd', 'e'];
        for i in 0..items.len() {
            for j in 0..items.len() {
                let moved = reorder(&items, i, j);
                assert_eq!(reorder(&moved, j, i), items, "i={} j={}", i, j);
            }
        }
    }

    #[test]
    fn test_reorder_forward_and_backward() {
        let items = vec!['a', 'b', 'c', 'd'];
        assert_eq!(reorder(&items, 0, 2), vec!['b', 'c', 'a', 'd']);
        assert_eq!(reorder(&items, 3, 1), vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_reorder_clamps_out_of_range() {
        let items = vec!['a', 'b', 'c'];
        assert_eq!(reorder(&items, 0, 99), vec!['b', 'c', 'a']);
        assert_eq!(reorder(&items, 99, 0), vec!['c', 'a', 'b']);
        assert_eq!(reorder(&items, 42, 99), items);
    }

    #[test]
    fn test_reorder_empty() {
        let items: Vec<u8> = Vec::new();
        assert!(reorder(&items, 0, 3).is_empty());
    }

    #[test]
    fn test_drop_indices() {
        let ids = vec!["s1".to_string(), "s2".to_string(), "s3".to_string()];
        assert_eq!(drop_indices(&ids, "s3", "s1", |s| s.as_str()), Some((2, 0)));
        assert_eq!(drop_indices(&ids, "s2", "s2", |s| s.as_str()), None);
        assert_eq!(drop_indices(&ids, "s2", "zz", |s| s.as_str()), None);
    }
}
