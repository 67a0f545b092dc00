// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Use cases orchestrating the repository traits.

use std::result::Result as StdResult;

use thiserror::Error;

use vidlib_repo::prelude::RepoError;

pub mod artist;
pub mod video;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = StdResult<T, Error>;
