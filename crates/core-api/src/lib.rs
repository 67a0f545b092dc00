// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Boundary types shared between the web layer, the use cases, and the
//! repositories.
//!
//! All types in this crate are plain, deterministic data without any I/O.

pub mod filtering;
pub mod sorting;
pub mod video;

pub type PaginationOffset = u64;

pub type PaginationLimit = u64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<PaginationLimit>,
    pub offset: Option<PaginationOffset>,
}

impl Pagination {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            offset: None,
        }
    }

    /// Pagination window for a 1-based page number.
    ///
    /// A page number of 0 is treated as page 1. The offset saturates
    /// instead of overflowing for absurdly large page numbers, which
    /// still addresses a window beyond any real result set.
    #[must_use]
    pub const fn for_page(page: u64, items_per_page: PaginationLimit) -> Self {
        let page = if page > 0 { page } else { 1 };
        Self {
            limit: Some(items_per_page),
            offset: Some((page - 1).saturating_mul(items_per_page)),
        }
    }

    /// Mandatory offset
    ///
    /// Returns the offset if specified or 0 otherwise.
    #[must_use]
    pub fn mandatory_offset(&self) -> PaginationOffset {
        self.offset.unwrap_or(0)
    }

    /// Mandatory limit
    ///
    /// Returns the limit if specified or the maximum value otherwise.
    #[must_use]
    pub fn mandatory_limit(&self) -> PaginationLimit {
        self.limit.unwrap_or(PaginationLimit::MAX)
    }
}
