//! Page-selector planning.
//!
//! Small listings show every page. Larger ones show the first and last page
//! plus a window around the current one, with an ellipsis standing in for
//! each run of hidden pages.

/// Listings with at most this many pages show every page number.
pub const SHOW_ALL_LIMIT: u32 = 7;

/// Pages shown on each side of the current page.
pub const WINDOW: u32 = 2;

/// Directional controls around the page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    First,
    Previous,
    Next,
    Last,
}

/// One rendered unit of the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelectorEntry {
    Control {
        control: Control,
        target: u32,
        enabled: bool,
    },
    Page {
        number: u32,
        current: bool,
    },
    Ellipsis,
}

/// Lay out the page selector for `current_page` of `last_page`.
///
/// A `last_page` of 0 means there is nothing to page through: no numbers are
/// produced and every control is disabled.
#[must_use]
pub fn plan(current_page: u32, last_page: u32) -> Vec<PageSelectorEntry> {
    let current = current_page.max(1);
    let has_prev = current > 1;
    let has_next = current < last_page;
    let prev_target = current.saturating_sub(1).clamp(1, last_page.max(1));
    let next_target = current.saturating_add(1).min(last_page.max(1));

    let mut entries = vec![
        control(Control::First, 1, has_prev),
        control(Control::Previous, prev_target, has_prev),
    ];

    let mut previous_shown: Option<u32> = None;
    for number in visible_pages(current, last_page) {
        if previous_shown.is_some_and(|prev| number - prev > 1) {
            entries.push(PageSelectorEntry::Ellipsis);
        }
        entries.push(PageSelectorEntry::Page {
            number,
            current: number == current,
        });
        previous_shown = Some(number);
    }

    entries.push(control(Control::Next, next_target, has_next));
    entries.push(control(Control::Last, last_page.max(1), has_next));
    entries
}

/// Page numbers to show, ascending.
///
/// Never yields more than `2 * WINDOW + 3` numbers, whatever `last_page` is.
#[must_use]
pub fn visible_pages(current_page: u32, last_page: u32) -> Vec<u32> {
    if last_page <= SHOW_ALL_LIMIT {
        return (1..=last_page).collect();
    }
    let window_start = current_page.saturating_sub(WINDOW).max(2);
    let window_end = current_page.saturating_add(WINDOW).min(last_page - 1);

    let mut pages = vec![1];
    if window_start <= window_end {
        pages.extend(window_start..=window_end);
    }
    pages.push(last_page);
    pages
}

fn control(control: Control, target: u32, enabled: bool) -> PageSelectorEntry {
    PageSelectorEntry::Control {
        control,
        target,
        enabled,
    }
}
