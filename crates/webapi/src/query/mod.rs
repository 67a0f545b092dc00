// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use url::form_urlencoded;

use vidlib_core_api::{PaginationLimit, video::list::ListParams};

/// Default page size when the request does not specify one.
pub const DEFAULT_ITEMS_PER_PAGE: PaginationLimit = 12;

/// Parses a raw, percent-encoded URL query string into normalized
/// list parameters.
///
/// A leading '?' is accepted and ignored. Total over all inputs.
#[must_use]
pub fn parse_list_params(raw_query: &str, default_items_per_page: PaginationLimit) -> ListParams {
    let raw_query = raw_query.strip_prefix('?').unwrap_or(raw_query);
    ListParams::from_query_pairs(
        form_urlencoded::parse(raw_query.as_bytes()),
        default_items_per_page,
    )
}

/// Serializes list parameters into a '?'-prefixed, percent-encoded
/// query string for rendered links.
#[must_use]
pub fn list_params_query_string(params: &ListParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::from("?"));
    for (key, value) in params.to_query_pairs() {
        serializer.append_pair(key, &value);
    }
    serializer.finish()
}
