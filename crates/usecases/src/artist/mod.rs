// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core::Artist;
use vidlib_repo::{
    artist::{RecordHeader, Repo as ArtistRepo},
    prelude::*,
};

use crate::Result;

/// Loads all artists, e.g. for the navigation sidebar.
pub fn load_all<Repo>(
    repo: &mut Repo,
    collector: &mut impl ReservableRecordCollector<Header = RecordHeader, Record = Artist>,
) -> Result<usize>
where
    Repo: ArtistRepo,
{
    repo.load_all_artists(collector).map_err(Into::into)
}
