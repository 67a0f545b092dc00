// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use vidlib_core_api::{
    Pagination,
    video::{
        list::ListParams,
        search::{Params, Scope},
    },
};
use vidlib_repo::{
    prelude::*,
    video::{RecordHeader, Repo as VideoRepo, VideoWithStats},
};

use crate::Result;

/// Fetches one page of videos for the given normalized parameters.
///
/// Builds the query descriptor, fetches the page into the collector,
/// and counts the total number of matching records over the same
/// filter for the pager. Returns that total count.
pub fn list<Repo>(
    repo: &mut Repo,
    params: &ListParams,
    scope: Option<&Scope>,
    collector: &mut impl ReservableRecordCollector<Header = RecordHeader, Record = VideoWithStats>,
) -> Result<u64>
where
    Repo: VideoRepo,
{
    let search_params = Params::from_list(params, scope);
    let pagination = Pagination::for_page(params.page, params.items_per_page);
    let timed = Instant::now();
    let num_collected = repo.search_videos(
        &pagination,
        search_params.filter.as_ref(),
        &search_params.ordering,
        collector,
    )?;
    let total_count = repo.count_videos(search_params.filter.as_ref())?;
    log::debug!(
        "Listing videos returned {num_collected} of {total_count} record(s) and took {} ms",
        (timed.elapsed().as_micros() / 1000) as f64,
    );
    Ok(total_count)
}
