// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use itertools::Itertools as _;
use strum::{Display, EnumString, IntoStaticStr};

use vidlib_core::{Role, artist::ArtistUid};

use crate::PaginationLimit;

/// 1-based page number.
pub type PageNumber = u64;

/// Sort key of the video list as exchanged with the web layer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Display, EnumString, IntoStaticStr)]
pub enum SortKey {
    #[default]
    #[strum(serialize = "date")]
    Date,

    #[strum(serialize = "views")]
    Views,
}

/// Role filter of the video list as exchanged with the web layer.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Display, EnumString, IntoStaticStr)]
pub enum RoleFilter {
    /// No restriction.
    #[default]
    #[strum(serialize = "all")]
    All,

    #[strum(serialize = "mv")]
    MusicVideo,

    #[strum(serialize = "perf")]
    Performance,
}

impl RoleFilter {
    /// The single role this filter restricts to, if any.
    #[must_use]
    pub const fn role(self) -> Option<Role> {
        match self {
            Self::All => None,
            Self::MusicVideo => Some(Role::MusicVideo),
            Self::Performance => Some(Role::Performance),
        }
    }
}

/// Normalized list request parameters.
///
/// The single, canonical source of truth for a list request. Derived
/// once from the raw query string and then passed explicitly to the
/// query builder, the pager, and the link renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// Free-text search term, empty = no filter.
    pub query: String,

    /// Invariant: `page >= 1`. Not clamped against the total number
    /// of pages, see [`Pagination::for_page`](crate::Pagination::for_page).
    pub page: PageNumber,

    /// Invariant: `items_per_page >= 1`.
    pub items_per_page: PaginationLimit,

    pub sort_key: SortKey,

    pub role: RoleFilter,

    /// Restricts results to the given artists, empty = no restriction.
    pub scope_uids: Vec<ArtistUid>,
}

impl ListParams {
    #[must_use]
    pub const fn new(default_items_per_page: PaginationLimit) -> Self {
        Self {
            query: String::new(),
            page: 1,
            items_per_page: default_items_per_page,
            sort_key: SortKey::Date,
            role: RoleFilter::All,
            scope_uids: Vec::new(),
        }
    }

    /// Normalizes raw query string pairs into [`ListParams`].
    ///
    /// Total over all inputs: missing, unparsable, or out-of-range
    /// values fall back to their defaults instead of failing. For
    /// duplicate keys the last occurrence wins.
    #[must_use]
    pub fn from_query_pairs<K, V>(
        pairs: impl IntoIterator<Item = (K, V)>,
        default_items_per_page: PaginationLimit,
    ) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        debug_assert!(default_items_per_page >= 1);
        let mut raw_query = None;
        let mut raw_page = None;
        let mut raw_items_per_page = None;
        let mut raw_sort_key = None;
        let mut raw_role = None;
        let mut raw_scope_uids = None;
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "q" => raw_query = Some(value.to_owned()),
                "page" => raw_page = Some(value.to_owned()),
                "itemsPerPage" => raw_items_per_page = Some(value.to_owned()),
                "sorting" => raw_sort_key = Some(value.to_owned()),
                "role" => raw_role = Some(value.to_owned()),
                "id" => raw_scope_uids = Some(value.to_owned()),
                // Unknown keys are not ours to interpret.
                _ => (),
            }
        }
        let query = raw_query.unwrap_or_default();
        let page = raw_page
            .and_then(|raw| raw.parse::<PageNumber>().ok())
            .filter(|page| *page >= 1)
            .unwrap_or(1);
        let items_per_page = raw_items_per_page
            .and_then(|raw| raw.parse::<PaginationLimit>().ok())
            .filter(|items_per_page| *items_per_page >= 1)
            .unwrap_or(default_items_per_page);
        let sort_key = raw_sort_key
            .and_then(|raw| raw.parse::<SortKey>().ok())
            .unwrap_or_default();
        let role = raw_role
            .and_then(|raw| raw.parse::<RoleFilter>().ok())
            .unwrap_or_default();
        let scope_uids = raw_scope_uids
            .as_deref()
            .map(parse_scope_uids)
            .unwrap_or_default();
        Self {
            query,
            page,
            items_per_page,
            sort_key,
            role,
            scope_uids,
        }
    }

    /// Serializes the parameters back into query string pairs.
    ///
    /// Inverse of [`ListParams::from_query_pairs`]: normalizing the
    /// returned pairs yields an identical value. Mirrors the link
    /// rendering, i.e. `q` and `id` are omitted when empty while all
    /// other keys are always present.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let Self {
            query,
            page,
            items_per_page,
            sort_key,
            role,
            scope_uids,
        } = self;
        let mut pairs = Vec::with_capacity(6);
        if !query.is_empty() {
            pairs.push(("q", query.clone()));
        }
        pairs.push(("page", page.to_string()));
        pairs.push(("itemsPerPage", items_per_page.to_string()));
        pairs.push(("sorting", sort_key.to_string()));
        if !scope_uids.is_empty() {
            pairs.push(("id", scope_uids.iter().map(ArtistUid::as_str).join(",")));
        }
        pairs.push(("role", role.to_string()));
        pairs
    }

    /// The same parameters with only the page number replaced.
    #[must_use]
    pub fn with_page(&self, page: PageNumber) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

fn parse_scope_uids(raw: &str) -> Vec<ArtistUid> {
    raw.split(',')
        .map(str::trim)
        .filter(|uid| !uid.is_empty())
        .map(ArtistUid::from)
        .unique()
        .collect()
}
