// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Domain model of the music video library.
//!
//! Plain data types without any I/O or framework dependencies.

pub mod artist;
pub use self::artist::{Artist, ArtistUid};

pub mod video;
pub use self::video::{Role, Video, VideoUid, YoutubeStats};
