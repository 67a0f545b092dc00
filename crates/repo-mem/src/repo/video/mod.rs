// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

use vidlib_core::VideoUid;
use vidlib_core_api::{
    filtering::StringPredicate,
    sorting::SortDirection,
    video::search::{Filter, SortField, SortOrder},
};
use vidlib_repo::{
    prelude::*,
    video::{RecordHeader, RecordId, Repo, VideoWithStats},
};

use super::MemRepo;

impl Repo for MemRepo {
    fn resolve_video_id(&mut self, uid: &VideoUid) -> RepoResult<RecordId> {
        self.videos
            .iter()
            .find(|(_, entry)| entry.video.uid == *uid)
            .map(|(header, _)| header.id)
            .ok_or(RepoError::NotFound)
    }

    fn search_videos(
        &mut self,
        pagination: &Pagination,
        filter: Option<&Filter>,
        ordering: &[SortOrder],
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = VideoWithStats>,
    ) -> RepoResult<usize> {
        let mut matches: Vec<_> = self
            .videos
            .iter()
            .filter(|(_, entry)| filter.is_none_or(|filter| filter_matches(filter, entry)))
            .collect();
        // Stable sort preserves insertion order among ties.
        matches.sort_by(|(_, lhs), (_, rhs)| compare_by_ordering(ordering, lhs, rhs));
        let offset = usize::try_from(pagination.mandatory_offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.mandatory_limit()).unwrap_or(usize::MAX);
        let page = matches.into_iter().skip(offset).take(limit);
        let mut collected = 0;
        collector.reserve(page.size_hint().0);
        for (header, entry) in page {
            collector.collect(header.clone(), entry.clone());
            collected += 1;
        }
        Ok(collected)
    }

    fn count_videos(&mut self, filter: Option<&Filter>) -> RepoResult<u64> {
        let count = self
            .videos
            .iter()
            .filter(|(_, entry)| filter.is_none_or(|filter| filter_matches(filter, entry)))
            .count();
        Ok(count as u64)
    }
}

fn filter_matches(filter: &Filter, entry: &VideoWithStats) -> bool {
    match filter {
        Filter::TitlePhrase(predicate) => string_predicate_matches(predicate, &entry.video.title),
        Filter::Role(role) => entry.video.role == *role,
        Filter::ArtistUid(uid) => entry.video.artist_uid == *uid,
        Filter::AnyArtistUid(uids) => uids.contains(&entry.video.artist_uid),
        // Identity elements: an empty conjunction matches everything,
        // an empty disjunction matches nothing.
        Filter::All(all) => all.iter().all(|filter| filter_matches(filter, entry)),
        Filter::Any(any) => any.iter().any(|filter| filter_matches(filter, entry)),
        Filter::Not(inner) => !filter_matches(inner, entry),
    }
}

fn string_predicate_matches(predicate: &StringPredicate, value: &str) -> bool {
    match predicate {
        StringPredicate::StartsWith(inner) => value.starts_with(inner),
        StringPredicate::EndsWith(inner) => value.ends_with(inner),
        StringPredicate::Contains(inner) => value.contains(inner),
        StringPredicate::Equals(inner) => value == inner,
    }
}

fn compare_by_ordering(
    ordering: &[SortOrder],
    lhs: &VideoWithStats,
    rhs: &VideoWithStats,
) -> Ordering {
    ordering
        .iter()
        .map(|order| compare_by(order, lhs, rhs))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

fn compare_by(order: &SortOrder, lhs: &VideoWithStats, rhs: &VideoWithStats) -> Ordering {
    let ordering = match order.field {
        SortField::PublishedAt => lhs.stats.published_at.cmp(&rhs.stats.published_at),
        SortField::ViewCount => lhs.stats.view_count.cmp(&rhs.stats.view_count),
    };
    match order.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests;
