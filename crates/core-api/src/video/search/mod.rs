// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

use vidlib_core::{Role, artist::ArtistUid};

use crate::{
    filtering::StringPredicate,
    sorting::SortDirection,
    video::list::{ListParams, SortKey},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortField {
    PublishedAt,
    ViewCount,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl From<SortKey> for SortOrder {
    fn from(from: SortKey) -> Self {
        match from {
            SortKey::Date => Self {
                field: SortField::PublishedAt,
                direction: SortDirection::Descending,
            },
            SortKey::Views => Self {
                field: SortField::ViewCount,
                direction: SortDirection::Descending,
            },
        }
    }
}

/// Restriction of a list query to a single entity.
///
/// Unrepresentable scope fields are ruled out at the type level, there
/// is no runtime validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    /// All videos of one artist, e.g. on the artist's own page.
    Artist(ArtistUid),
}

/// Composable filter condition tree over the video list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    /// Matches against the video title.
    TitlePhrase(StringPredicate),

    Role(Role),

    ArtistUid(ArtistUid),

    /// Membership in a set of artists.
    AnyArtistUid(Vec<ArtistUid>),

    All(Vec<Filter>),
    Any(Vec<Filter>),
    Not(Box<Filter>),
}

impl Filter {
    #[must_use]
    pub fn title_contains(term: impl Into<String>) -> Self {
        Self::TitlePhrase(StringPredicate::Contains(term.into()))
    }

    /// Combines the present conditions of the normalized parameters
    /// and the optional scope into a single conjunction.
    ///
    /// Absent conditions are omitted, i.e. they count as "matches
    /// everything" rather than as "matches nothing". In particular an
    /// empty scope uid set does not restrict the result at all. When
    /// no condition remains the result is `None` (unconditional).
    #[must_use]
    pub fn from_list(params: &ListParams, scope: Option<&Scope>) -> Option<Self> {
        let mut conditions = Vec::new();
        match scope {
            Some(Scope::Artist(artist_uid)) => {
                conditions.push(Self::ArtistUid(artist_uid.clone()));
            }
            None => (),
        }
        if !params.scope_uids.is_empty() {
            conditions.push(Self::AnyArtistUid(params.scope_uids.clone()));
        }
        if let Some(role) = params.role.role() {
            conditions.push(Self::Role(role));
        }
        if !params.query.is_empty() {
            conditions.push(Self::title_contains(params.query.clone()));
        }
        conjunction(conditions)
    }
}

fn conjunction(mut conditions: Vec<Filter>) -> Option<Filter> {
    match conditions.len() {
        0 => None,
        1 => conditions.pop(),
        _ => Some(Filter::All(conditions)),
    }
}

/// Datastore-agnostic description of a video list query.
///
/// Built entirely from the normalized request parameters. The paging
/// window is kept separate, see [`Pagination`](crate::Pagination).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    pub filter: Option<Filter>,
    pub ordering: Vec<SortOrder>,
}

impl Params {
    #[must_use]
    pub fn from_list(params: &ListParams, scope: Option<&Scope>) -> Self {
        Self {
            filter: Filter::from_list(params, scope),
            ordering: vec![params.sort_key.into()],
        }
    }
}
