// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;
use crate::query::{DEFAULT_ITEMS_PER_PAGE, parse_list_params};

fn assert_single_current(links: &[PageLink], page: PageNumber) {
    let current: Vec<_> = links.iter().filter(|link| link.is_current).collect();
    assert_eq!(1, current.len());
    assert_eq!(page, current[0].target_page);
}

#[test]
fn empty_result_set_renders_a_single_page() {
    let links = page_links(1, 10, 0);
    assert_eq!(1, total_pages(0, 10));
    assert_single_current(&links, 1);
    assert!(!links.iter().any(|link| link.is_ellipsis));
    // Previous and next both stay on page 1.
    assert_eq!("Previous", links.first().unwrap().label);
    assert_eq!(1, links.first().unwrap().target_page);
    assert_eq!("Next", links.last().unwrap().label);
    assert_eq!(1, links.last().unwrap().target_page);
    assert_eq!(3, links.len());
}

#[test]
fn middle_page_is_compressed_on_both_sides() {
    let links = page_links(5, 10, 100);
    assert_eq!(10, total_pages(100, 10));
    let targets: Vec<_> = links
        .iter()
        .map(|link| {
            if link.is_ellipsis {
                None
            } else {
                Some(link.target_page)
            }
        })
        .collect();
    // prev, 1, ..., 4, current 5, 6, ..., 10, next
    assert_eq!(
        vec![
            Some(4),
            Some(1),
            None,
            Some(4),
            Some(5),
            Some(6),
            None,
            Some(10),
            Some(6)
        ],
        targets
    );
    assert_single_current(&links, 5);
}

#[test]
fn page_three_shows_first_page_without_ellipsis() {
    let links = page_links(3, 10, 1000);
    let leading: Vec<_> = links
        .iter()
        .take_while(|link| !link.is_current)
        .collect();
    assert!(leading.iter().any(|link| link.target_page == 1 && !link.is_ellipsis));
    assert!(!leading.iter().any(|link| link.is_ellipsis));

    // One page further the gap warrants an ellipsis.
    let links = page_links(4, 10, 1000);
    let leading: Vec<_> = links
        .iter()
        .take_while(|link| !link.is_current)
        .collect();
    assert!(leading.iter().any(|link| link.is_ellipsis));
}

#[test]
fn first_page_of_many() {
    let links = page_links(1, 10, 100);
    let targets: Vec<_> = links
        .iter()
        .map(|link| {
            if link.is_ellipsis {
                None
            } else {
                Some(link.target_page)
            }
        })
        .collect();
    // prev, current 1, 2, ..., 10, next
    assert_eq!(
        vec![Some(1), Some(1), Some(2), None, Some(10), Some(2)],
        targets
    );
    assert_single_current(&links, 1);
}

#[test]
fn last_page_of_many() {
    let links = page_links(10, 10, 100);
    let targets: Vec<_> = links
        .iter()
        .map(|link| {
            if link.is_ellipsis {
                None
            } else {
                Some(link.target_page)
            }
        })
        .collect();
    // prev, 1, ..., 9, current 10, next
    assert_eq!(
        vec![Some(9), Some(1), None, Some(9), Some(10), Some(10)],
        targets
    );
    assert_single_current(&links, 10);
}

#[test]
fn out_of_range_page_still_renders_one_current_entry() {
    // No clamping: the requested page stays the current one even far
    // beyond the last page.
    let links = page_links(42, 10, 30);
    assert_single_current(&links, 42);
    assert_eq!("Previous", links.first().unwrap().label);
    assert_eq!(41, links.first().unwrap().target_page);
    // The next link is clamped to the last page.
    assert_eq!(3, links.last().unwrap().target_page);
}

#[test]
fn ellipsis_entries_are_never_adjacent() {
    for total_items in [0, 5, 100, 1000] {
        for page in 1..=20 {
            let links = page_links(page, 10, total_items);
            let adjacent = links
                .windows(2)
                .any(|pair| pair[0].is_ellipsis && pair[1].is_ellipsis);
            assert!(!adjacent, "adjacent ellipses at page {page}");
            assert_single_current(&links, page);
        }
    }
}

#[test]
fn page_href_echoes_all_other_parameters() {
    let params = parse_list_params(
        "?q=fancy&page=4&itemsPerPage=24&sorting=views&id=a1,b2&role=mv",
        DEFAULT_ITEMS_PER_PAGE,
    );
    let href = page_href(&params, 5);
    assert_eq!(
        "?q=fancy&page=5&itemsPerPage=24&sorting=views&id=a1%2Cb2&role=mv",
        href
    );
    // The rendered link parses back into the same parameters with
    // only the page replaced.
    assert_eq!(
        params.with_page(5),
        parse_list_params(&href, DEFAULT_ITEMS_PER_PAGE)
    );
}
