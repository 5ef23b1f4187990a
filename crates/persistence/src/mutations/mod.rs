// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write-side database mutations.
//!
//! All mutations use Diesel DSL and take an explicit `SqliteConnection`.

pub mod accounts;
pub mod festivals;
pub mod holidays;
pub mod user_events;
