//! Sliding window over page numbers.

/// Maximum number of numbered page buttons shown at once.
pub const WINDOW_WIDTH: u32 = 5;

/// The visible slice of page numbers plus ellipsis markers.
#[derive(Clone, Debug, PartialEq)]
pub struct PageWindow {
    /// Consecutive page numbers to render as buttons.
    pub pages: Vec<u32>,
    /// The window excludes page 1.
    pub leading_gap: bool,
    /// The window excludes the last page.
    pub trailing_gap: bool,
}

/// Compute the window of numbered buttons for `current_page` of
/// `page_count` pages.
///
/// The window is centered on the current page and clamped to
/// `[1, page_count]`. When it would overflow one side, the start is
/// shifted so the width stays exactly `min(WINDOW_WIDTH, page_count)`
/// and the current page remains visible.
pub fn page_window(current_page: u32, page_count: u32) -> PageWindow {
    if page_count == 0 {
        return PageWindow {
            pages: Vec::new(),
            leading_gap: false,
            trailing_gap: false,
        };
    }

    let width = WINDOW_WIDTH.min(page_count);
    let half = WINDOW_WIDTH / 2;

    let mut start = current_page.saturating_sub(half).max(1);
    if start + width - 1 > page_count {
        start = page_count - width + 1;
    }
    let end = start + width - 1;

    PageWindow {
        pages: (start..=end).collect(),
        leading_gap: start > 1,
        trailing_gap: end < page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_at_first_page() {
        let win = page_window(1, 20);
        assert_eq!(win.pages, vec![1, 2, 3, 4, 5]);
        assert!(!win.leading_gap);
        assert!(win.trailing_gap);
    }

    #[test]
    fn window_at_last_page() {
        let win = page_window(20, 20);
        assert_eq!(win.pages, vec![16, 17, 18, 19, 20]);
        assert!(win.leading_gap);
        assert!(!win.trailing_gap);
    }

    #[test]
    fn window_in_the_middle() {
        let win = page_window(10, 20);
        assert_eq!(win.pages, vec![8, 9, 10, 11, 12]);
        assert!(win.leading_gap);
        assert!(win.trailing_gap);
    }

    #[test]
    fn window_near_the_start_stays_full_width() {
        let win = page_window(2, 20);
        assert_eq!(win.pages, vec![1, 2, 3, 4, 5]);
        assert!(!win.leading_gap);
    }

    #[test]
    fn window_shrinks_to_page_count() {
        let win = page_window(2, 3);
        assert_eq!(win.pages, vec![1, 2, 3]);
        assert!(!win.leading_gap);
        assert!(!win.trailing_gap);
    }

    #[test]
    fn window_of_single_page() {
        let win = page_window(1, 1);
        assert_eq!(win.pages, vec![1]);
    }
}
