// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use jiff::Timestamp;

use vidlib_core::{Artist, Video, YoutubeStats};
use vidlib_repo::{
    RecordId,
    artist::RecordHeader as ArtistRecordHeader,
    video::{RecordHeader as VideoRecordHeader, VideoWithStats},
};

pub mod artist;
pub mod video;

/// All records of one library held in memory.
///
/// Insertion order is preserved and serves as the stable tie-breaker
/// for sorted queries.
#[derive(Debug, Default)]
pub struct MemRepo {
    next_record_id: RecordId,
    artists: Vec<(ArtistRecordHeader, Artist)>,
    videos: Vec<(VideoRecordHeader, VideoWithStats)>,
}

impl MemRepo {
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    fn next_record_id(&mut self) -> RecordId {
        self.next_record_id += 1;
        self.next_record_id
    }

    pub fn create_artist(&mut self, created_at: Timestamp, artist: Artist) -> RecordId {
        let id = self.next_record_id();
        let header = ArtistRecordHeader {
            id,
            created_at,
            updated_at: created_at,
        };
        self.artists.push((header, artist));
        id
    }

    pub fn create_video(
        &mut self,
        created_at: Timestamp,
        video: Video,
        stats: YoutubeStats,
    ) -> RecordId {
        let id = self.next_record_id();
        let header = VideoRecordHeader {
            id,
            created_at,
            updated_at: created_at,
        };
        self.videos.push((header, VideoWithStats { video, stats }));
        id
    }
}
