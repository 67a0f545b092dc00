// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Predicates for matching strings
///
/// All comparisons are case-sensitive, i.e. strings match as stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StringPredicate {
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    Equals(String),
}
