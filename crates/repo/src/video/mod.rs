// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core::{Video, VideoUid, YoutubeStats};
use vidlib_core_api::video::search::{Filter, SortOrder};

use crate::prelude::*;

pub type RecordId = crate::RecordId;

pub type RecordHeader = crate::RecordHeader<RecordId>;

/// A video joined with its cached statistics, as returned by list queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoWithStats {
    pub video: Video,
    pub stats: YoutubeStats,
}

pub trait Repo {
    fn resolve_video_id(&mut self, uid: &VideoUid) -> RepoResult<RecordId>;

    /// Fetches one page of videos matching the filter.
    ///
    /// The pagination window is applied after filtering and ordering.
    /// An offset beyond the number of matching records yields an empty
    /// page, not an error. Returns the number of collected records.
    fn search_videos(
        &mut self,
        pagination: &Pagination,
        filter: Option<&Filter>,
        ordering: &[SortOrder],
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = VideoWithStats>,
    ) -> RepoResult<usize>;

    /// Counts all videos matching the filter, ignoring pagination.
    fn count_videos(&mut self, filter: Option<&Filter>) -> RepoResult<u64>;
}
