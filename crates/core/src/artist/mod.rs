// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use derive_more::{AsRef, Display, From, Into};

/// Opaque identifier of an artist.
///
/// Assigned by the storage backend when the artist is created and
/// treated as an uninterpreted string everywhere else.
#[derive(AsRef, Clone, Debug, Display, Eq, From, Hash, Into, Ord, PartialEq, PartialOrd)]
#[as_ref(str)]
pub struct ArtistUid(String);

impl ArtistUid {
    #[must_use]
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

impl From<&str> for ArtistUid {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artist {
    pub uid: ArtistUid,

    /// Romanized display name.
    pub name: String,

    /// Korean display name, if different.
    pub name_kor: Option<String>,

    /// Label or management company.
    pub company: Option<String>,
}
