// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core::{Artist, ArtistUid};

use crate::prelude::*;

pub type RecordId = crate::RecordId;

pub type RecordHeader = crate::RecordHeader<RecordId>;

pub trait Repo {
    fn load_artist(&mut self, uid: &ArtistUid) -> RepoResult<(RecordHeader, Artist)>;

    /// Loads all artists, e.g. for the navigation sidebar.
    ///
    /// Returns the number of collected records.
    fn load_all_artists(
        &mut self,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Artist>,
    ) -> RepoResult<usize>;
}
