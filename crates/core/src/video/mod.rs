// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use derive_more::{AsRef, Display, From, Into};
use jiff::Timestamp;
use strum::{Display as StrumDisplay, EnumString, IntoStaticStr};

use crate::artist::ArtistUid;

/// Opaque identifier of a video.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd)]
#[as_ref(str)]
pub struct VideoUid(String);

impl VideoUid {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl From<&str> for VideoUid {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

/// Category of a video.
///
/// The string representations are the values stored in the database
/// and exchanged with the web layer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumString, StrumDisplay, IntoStaticStr)]
pub enum Role {
    #[strum(serialize = "mv")]
    MusicVideo,

    #[strum(serialize = "perf")]
    Performance,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Video {
    pub uid: VideoUid,

    pub artist_uid: ArtistUid,

    pub title: String,

    /// The 11-character YouTube video id.
    pub youtube_id: String,

    pub role: Role,
}

/// Cached statistics fetched from the external video metadata provider.
///
/// Refreshing these values is the job of an ingestion collaborator and
/// out of scope here. List queries only ever read them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YoutubeStats {
    pub published_at: Timestamp,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}
