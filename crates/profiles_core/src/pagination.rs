//! Pagination engine.
//!
//! # Responsibility
//! - Slice a full result list into one page.
//! - Compute the abbreviated page-number window shown for navigation.
//!
//! # Invariants
//! - Pure and recomputed on every call; nothing is cached.
//! - No implicit clamping: out-of-range pages yield an empty slice and
//!   callers must reject out-of-range navigation themselves.
//! - The window always holds page 1 and the last page, without duplicates.

use std::num::NonZeroUsize;

/// Page numbers shown before the window switches to abbreviated form.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One navigation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

/// One computed page over a borrowed result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based page this view was computed for.
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: NonZeroUsize,
    pub tokens: Vec<PageToken>,
}

impl<T> Page<'_, T> {
    /// Navigation controls are hidden, not disabled, for single-page results.
    pub fn show_controls(&self) -> bool {
        show_controls(self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based inclusive item range for the "Showing X to Y of Z" line.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        item_range(self.current_page, self.page_size, self.total_items)
    }
}

/// Computes the page slice, page count and navigation window.
pub fn paginate<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    Page {
        items: page_slice(items, page_size, current_page),
        current_page,
        total_pages,
        total_items: items.len(),
        page_size,
        tokens: page_window(current_page, total_pages),
    }
}

/// `ceil(total_items / page_size)`; zero items means zero pages.
pub fn total_pages(total_items: usize, page_size: NonZeroUsize) -> usize {
    total_items.div_ceil(page_size.get())
}

/// Items of a 1-based page; empty when the page is out of range.
pub fn page_slice<T>(items: &[T], page_size: NonZeroUsize, current_page: usize) -> &[T] {
    let Some(offset) = current_page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size.get()))
    else {
        return &[];
    };
    if offset >= items.len() {
        return &[];
    }
    let end = offset.saturating_add(page_size.get()).min(items.len());
    &items[offset..end]
}

/// Abbreviated page-number window; depends only on the two page numbers.
///
/// - up to five pages: every page
/// - near the start: `1 2 3 4 … N`
/// - near the end: `1 … N-3 N-2 N-1 N`
/// - otherwise: `1 … c-1 c c+1 … N`
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    use PageToken::{Ellipsis, Page};

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(Page).collect();
    }
    if current_page <= 3 {
        return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(total_pages)];
    }
    if current_page >= total_pages - 2 {
        return vec![
            Page(1),
            Ellipsis,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ];
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current_page - 1),
        Page(current_page),
        Page(current_page + 1),
        Ellipsis,
        Page(total_pages),
    ]
}

pub fn show_controls(total_pages: usize) -> bool {
    total_pages > 1
}

/// Whether navigating to `target` is allowed.
pub fn is_navigable(target: usize, total_pages: usize) -> bool {
    (1..=total_pages).contains(&target)
}

/// 1-based inclusive range of items on `current_page`, `None` when empty.
pub fn item_range(
    current_page: usize,
    page_size: NonZeroUsize,
    total_items: usize,
) -> Option<(usize, usize)> {
    if !is_navigable(current_page, total_pages(total_items, page_size)) {
        return None;
    }
    let first = (current_page - 1) * page_size.get() + 1;
    let last = (current_page * page_size.get()).min(total_items);
    Some((first, last))
}
