// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;

use vidlib_core::{Artist, Role, Video, YoutubeStats};
use vidlib_core_api::video::{
    list::{ListParams, RoleFilter},
    search::Params,
};

use super::*;

fn ts(timestamp: &str) -> Timestamp {
    timestamp.parse().unwrap()
}

fn stats(published_at: &str, view_count: u64) -> YoutubeStats {
    YoutubeStats {
        published_at: ts(published_at),
        view_count,
        like_count: 0,
        comment_count: 0,
    }
}

fn video(uid: &str, artist_uid: &str, title: &str, role: Role) -> Video {
    Video {
        uid: uid.into(),
        artist_uid: artist_uid.into(),
        title: title.to_owned(),
        youtube_id: format!("yt-{uid}"),
        role,
    }
}

fn fixture() -> MemRepo {
    let mut repo = MemRepo::new();
    let now = ts("2024-01-01T00:00:00Z");
    repo.create_artist(
        now,
        Artist {
            uid: "twice".into(),
            name: "TWICE".to_owned(),
            name_kor: Some("트와이스".to_owned()),
            company: Some("JYP".to_owned()),
        },
    );
    repo.create_artist(
        now,
        Artist {
            uid: "bp".into(),
            name: "BLACKPINK".to_owned(),
            name_kor: None,
            company: Some("YG".to_owned()),
        },
    );
    repo.create_video(
        now,
        video("v1", "twice", "Fancy", Role::MusicVideo),
        stats("2019-04-23T00:00:00Z", 500),
    );
    repo.create_video(
        now,
        video("v2", "twice", "Fancy (stage)", Role::Performance),
        stats("2019-05-01T00:00:00Z", 100),
    );
    repo.create_video(
        now,
        video("v3", "bp", "How You Like That", Role::MusicVideo),
        stats("2020-06-26T00:00:00Z", 900),
    );
    // Deliberate view count tie with v3.
    repo.create_video(
        now,
        video("v4", "bp", "Kill This Love", Role::MusicVideo),
        stats("2019-04-04T00:00:00Z", 900),
    );
    repo
}

fn search(
    repo: &mut MemRepo,
    pagination: &Pagination,
    filter: Option<&Filter>,
    ordering: &[SortOrder],
) -> Vec<String> {
    let mut collected: Vec<(RecordHeader, VideoWithStats)> = Vec::new();
    let count = repo
        .search_videos(pagination, filter, ordering, &mut collected)
        .unwrap();
    assert_eq!(count, collected.len());
    collected
        .into_iter()
        .map(|(_, entry)| entry.video.uid.to_string())
        .collect()
}

#[test]
fn unfiltered_unordered_search_preserves_insertion_order() {
    let mut repo = fixture();
    let uids = search(&mut repo, &Pagination::new(), None, &[]);
    assert_eq!(vec!["v1", "v2", "v3", "v4"], uids);
}

#[test]
fn ordering_by_publish_date_descending() {
    let mut repo = fixture();
    let ordering = [SortOrder {
        field: SortField::PublishedAt,
        direction: SortDirection::Descending,
    }];
    let uids = search(&mut repo, &Pagination::new(), None, &ordering);
    assert_eq!(vec!["v3", "v2", "v1", "v4"], uids);
}

#[test]
fn ordering_by_view_count_breaks_ties_by_insertion_order() {
    let mut repo = fixture();
    let ordering = [SortOrder {
        field: SortField::ViewCount,
        direction: SortDirection::Descending,
    }];
    let uids = search(&mut repo, &Pagination::new(), None, &ordering);
    assert_eq!(vec!["v3", "v4", "v1", "v2"], uids);
}

#[test]
fn filter_by_role_and_artist_scope() {
    let mut repo = fixture();
    let list = ListParams {
        role: RoleFilter::MusicVideo,
        scope_uids: vec!["bp".into()],
        ..ListParams::new(12)
    };
    let params = Params::from_list(&list, None);
    let uids = search(&mut repo, &Pagination::new(), params.filter.as_ref(), &[]);
    assert_eq!(vec!["v3", "v4"], uids);
}

#[test]
fn filter_by_title_phrase_matches_as_stored() {
    let mut repo = fixture();
    let filter = Filter::title_contains("Fancy");
    assert_eq!(2, repo.count_videos(Some(&filter)).unwrap());
    // Case-sensitive comparison.
    let filter = Filter::title_contains("fancy");
    assert_eq!(0, repo.count_videos(Some(&filter)).unwrap());
}

#[test]
fn negated_filter_complements_the_result() {
    let mut repo = fixture();
    let filter = Filter::Not(Box::new(Filter::Role(Role::MusicVideo)));
    let uids = search(&mut repo, &Pagination::new(), Some(&filter), &[]);
    assert_eq!(vec!["v2"], uids);
}

#[test]
fn empty_disjunction_matches_nothing() {
    let mut repo = fixture();
    assert_eq!(0, repo.count_videos(Some(&Filter::Any(vec![]))).unwrap());
    assert_eq!(4, repo.count_videos(Some(&Filter::All(vec![]))).unwrap());
}

#[test]
fn pagination_window_is_applied_after_ordering() {
    let mut repo = fixture();
    let ordering = [SortOrder {
        field: SortField::ViewCount,
        direction: SortDirection::Descending,
    }];
    let uids = search(&mut repo, &Pagination::for_page(2, 2), None, &ordering);
    assert_eq!(vec!["v1", "v2"], uids);
}

#[test]
fn offset_beyond_result_set_yields_an_empty_page() {
    let mut repo = fixture();
    let uids = search(&mut repo, &Pagination::for_page(100, 10), None, &[]);
    assert!(uids.is_empty());
}

#[test]
fn count_ignores_pagination() {
    let mut repo = fixture();
    assert_eq!(4, repo.count_videos(None).unwrap());
}

#[test]
fn resolve_video_id() {
    let mut repo = fixture();
    assert!(Repo::resolve_video_id(&mut repo, &"v1".into()).is_ok());
    assert!(matches!(
        Repo::resolve_video_id(&mut repo, &"nope".into()),
        Err(RepoError::NotFound)
    ));
}
