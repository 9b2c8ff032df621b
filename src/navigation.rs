//! Page-number windowing for the posts navigation. Given the current page
//! and the total page count, [`page_numbers`] decides which numbers to show
//! and where to collapse runs into an ellipsis: the first and last
//! `end_size` pages are always shown, as is a window of `mid_size` pages on
//! either side of the current page.

use url::Url;

/// One slot in the rendered page-number strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    /// A page number (1-based).
    Number(usize),

    /// A collapsed run of hidden page numbers.
    Dots,
}

/// Produces the page-number strip for a paginated index. Pages are 1-based;
/// `current` is expected to be within `1..=total`.
pub fn page_numbers(
    current: usize,
    total: usize,
    end_size: usize,
    mid_size: usize,
) -> Vec<PageItem> {
    // Zero end/mid sizes degenerate into strips with no anchors; treat them
    // as the smallest useful values instead.
    let end_size = end_size.max(1);
    let mid_size = mid_size.max(1);

    let mut items = Vec::new();
    let mut dots = false;
    for n in 1..=total {
        let shown = n <= end_size
            || n + end_size > total
            || (n + mid_size >= current && n <= current + mid_size);
        if shown {
            items.push(PageItem::Number(n));
            dots = false;
        } else if !dots {
            items.push(PageItem::Dots);
            dots = true;
        }
    }
    items
}

/// The URL for a 1-based index page, following the `index.html`, `1.html`,
/// `2.html`, ... page-file naming scheme.
pub fn page_href(index_base_url: &Url, page: usize) -> String {
    let mut href = index_base_url.as_str().trim_end_matches('/').to_owned();
    href.push('/');
    match page {
        0 | 1 => href.push_str("index.html"),
        _ => href.push_str(&format!("{}.html", page - 1)),
    }
    href
}

#[cfg(test)]
mod test {
    use super::*;
    use PageItem::{Dots, Number};

    #[test]
    fn test_middle_page_collapses_both_ends() {
        assert_eq!(
            vec![
                Number(1),
                Dots,
                Number(3),
                Number(4),
                Number(5),
                Number(6),
                Number(7),
                Dots,
                Number(10),
            ],
            page_numbers(5, 10, 1, 2),
        );
    }

    #[test]
    fn test_first_page_collapses_tail_only() {
        assert_eq!(
            vec![Number(1), Number(2), Number(3), Dots, Number(10)],
            page_numbers(1, 10, 1, 2),
        );
    }

    #[test]
    fn test_last_page_collapses_head_only() {
        assert_eq!(
            vec![Number(1), Dots, Number(8), Number(9), Number(10)],
            page_numbers(10, 10, 1, 2),
        );
    }

    #[test]
    fn test_short_strip_shows_everything() {
        assert_eq!(
            vec![Number(1), Number(2), Number(3)],
            page_numbers(2, 3, 1, 2),
        );
    }

    #[test]
    fn test_adjacent_windows_fuse_without_dots() {
        // end window {1} and mid window {2, 3, 4} touch, so no ellipsis
        // appears between them.
        assert_eq!(
            vec![Number(1), Number(2), Number(3), Number(4), Dots, Number(8)],
            page_numbers(2, 8, 1, 2),
        );
    }

    #[test]
    fn test_zero_sizes_clamp() {
        assert_eq!(
            page_numbers(3, 9, 1, 1),
            page_numbers(3, 9, 0, 0),
        );
    }

    #[test]
    fn test_page_href() {
        let base = Url::parse("https://example.org/pages/").unwrap();
        assert_eq!("https://example.org/pages/index.html", page_href(&base, 1));
        assert_eq!("https://example.org/pages/1.html", page_href(&base, 2));
        assert_eq!("https://example.org/pages/6.html", page_href(&base, 7));
    }
}
