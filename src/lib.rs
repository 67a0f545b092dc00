// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Music video library management.
//!
//! Re-exports the sub-crates under stable module names.

pub use vidlib_core as core;
pub use vidlib_core_api as api;
pub use vidlib_repo as repo;
pub use vidlib_repo_mem as repo_mem;
pub use vidlib_usecases as usecases;
pub use vidlib_webapi as webapi;
