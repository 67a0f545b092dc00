// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core_api::{
    PaginationLimit,
    video::list::{ListParams, PageNumber},
};

use crate::query::list_params_query_string;

/// One entry of the rendered pager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLink {
    pub label: String,

    /// 0 for ellipsis entries, which are not navigable.
    pub target_page: PageNumber,

    pub is_current: bool,

    pub is_ellipsis: bool,
}

impl PageLink {
    fn numbered(page: PageNumber) -> Self {
        Self {
            label: page.to_string(),
            target_page: page,
            is_current: false,
            is_ellipsis: false,
        }
    }

    fn current(page: PageNumber) -> Self {
        Self {
            is_current: true,
            ..Self::numbered(page)
        }
    }

    fn labeled(label: &str, page: PageNumber) -> Self {
        Self {
            label: label.to_owned(),
            ..Self::numbered(page)
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: "...".to_owned(),
            target_page: 0,
            is_current: false,
            is_ellipsis: true,
        }
    }
}

/// Number of pages the pager spans.
///
/// An empty result set still renders as a single page.
#[must_use]
pub const fn total_pages(total_items: u64, items_per_page: PaginationLimit) -> PageNumber {
    let items_per_page = if items_per_page >= 1 { items_per_page } else { 1 };
    if total_items == 0 {
        return 1;
    }
    total_items.div_ceil(items_per_page)
}

/// Builds the ordered pager entries for the current page.
///
/// Always starts with a "Previous" and ends with a "Next" link and
/// contains exactly one current entry. Runs of distant page numbers
/// are compressed into at most one ellipsis on each side, except that
/// on page 3 the link to page 1 is close enough to be shown without
/// one.
///
/// The current page is deliberately not clamped against the total
/// number of pages: a request far beyond the last page renders a
/// current entry for the requested page with an empty neighborhood
/// instead of failing.
#[must_use]
pub fn page_links(
    page: PageNumber,
    items_per_page: PaginationLimit,
    total_items: u64,
) -> Vec<PageLink> {
    let total_pages = total_pages(total_items, items_per_page);
    let mut links = Vec::with_capacity(9);
    links.push(PageLink::labeled(
        "Previous",
        page.saturating_sub(1).max(1),
    ));
    if page == 3 {
        links.push(PageLink::numbered(1));
    } else if page > 3 {
        links.push(PageLink::numbered(1));
        links.push(PageLink::ellipsis());
    }
    if page != 1 {
        links.push(PageLink::numbered(page - 1));
    }
    links.push(PageLink::current(page));
    if page < total_pages.saturating_sub(1) {
        links.push(PageLink::numbered(page + 1));
    }
    if page < total_pages.saturating_sub(2) {
        links.push(PageLink::ellipsis());
    }
    if page != total_pages {
        links.push(PageLink::numbered(total_pages));
    }
    links.push(PageLink::labeled(
        "Next",
        page.saturating_add(1).min(total_pages),
    ));
    links
}

/// Link target for one pager entry, echoing all other parameters.
#[must_use]
pub fn page_href(params: &ListParams, target_page: PageNumber) -> String {
    list_params_query_string(&params.with_page(target_page))
}

#[cfg(test)]
mod tests;
