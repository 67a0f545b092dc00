// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Request-level boundary between the web layer and the use cases.
//!
//! Translates raw query strings into normalized list parameters and
//! list results into the view models rendered by the web layer. All
//! functions are total: malformed input degrades to defaults instead
//! of failing, a list page must never hard-fail on a bad query string.

pub mod pagination;
pub mod query;
