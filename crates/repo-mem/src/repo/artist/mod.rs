// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core::{Artist, ArtistUid};
use vidlib_repo::{
    artist::{RecordHeader, Repo},
    prelude::*,
};

use super::MemRepo;

impl Repo for MemRepo {
    fn load_artist(&mut self, uid: &ArtistUid) -> RepoResult<(RecordHeader, Artist)> {
        self.artists
            .iter()
            .find(|(_, artist)| artist.uid == *uid)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_all_artists(
        &mut self,
        collector: &mut dyn ReservableRecordCollector<Header = RecordHeader, Record = Artist>,
    ) -> RepoResult<usize> {
        collector.reserve(self.artists.len());
        for (header, artist) in &self.artists {
            collector.collect(header.clone(), artist.clone());
        }
        Ok(self.artists.len())
    }
}
