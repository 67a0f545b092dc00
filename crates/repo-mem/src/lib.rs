// SPDX-FileCopyrightText: Copyright (C) 2022-2026 vidlib contributors
// SPDX-License-Identifier: AGPL-3.0-or-later

//! In-memory implementation of the repository traits.
//!
//! Evaluates filter trees, sort orders, and pagination windows over
//! plain vectors. Suitable for tests, demos, and small deployments
//! where the whole library fits into memory.

pub mod repo;

pub use self::repo::MemRepo;
