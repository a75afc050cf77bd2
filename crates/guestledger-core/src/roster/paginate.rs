//! Fixed-size pagination over an ordered sequence.

/// One page of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The records on this page, in sequence order.
    pub items: &'a [T],
    /// Total number of pages; 0 for an empty sequence.
    pub total_pages: usize,
    /// Zero-based index of the first item on this page.
    pub start_index: usize,
}

/// Slices one page out of `items`.
///
/// `page` is 1-based and must already be clamped by the caller to
/// `[1, max(1, total_pages)]`; an out-of-range page yields an empty slice
/// rather than wrapping. A `page_size` of 0 is treated as 1.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total_pages = items.len().div_ceil(page_size);
    let start_index = (page - 1) * page_size;
    let end = start_index.saturating_add(page_size).min(items.len());
    let items = if start_index < items.len() {
        &items[start_index..end]
    } else {
        &[]
    };

    Page {
        items,
        total_pages,
        start_index,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_25_items_page_size_10() {
        let items: Vec<u32> = (0..25).collect();

        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.start_index, 0);

        let last = paginate(&items, 3, 10);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.start_index, 20);
        assert_eq!(last.items[0], 20);
    }

    #[test]
    fn test_empty_sequence_has_zero_pages() {
        let items: Vec<u32> = Vec::new();

        let page = paginate(&items, 1, 10);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let items: Vec<u32> = (0..20).collect();

        assert_eq!(paginate(&items, 1, 10).total_pages, 2);
        assert_eq!(paginate(&items, 2, 10).items.len(), 10);
    }

    proptest! {
        #[test]
        fn prop_pages_partition_the_sequence(len in 0usize..200, page_size in 1usize..20) {
            let items: Vec<usize> = (0..len).collect();
            let total_pages = paginate(&items, 1, page_size).total_pages;

            let mut seen = Vec::new();
            for page in 1..=total_pages.max(1) {
                let p = paginate(&items, page, page_size);
                prop_assert!(p.items.len() <= page_size);
                prop_assert_eq!(p.start_index, (page - 1) * page_size);
                seen.extend_from_slice(p.items);
            }

            prop_assert_eq!(seen, items);
        }
    }
}
