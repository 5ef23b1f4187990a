// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Stored account row, including the bcrypt hash.
///
/// This type never crosses the HTTP boundary; the API layer maps it to the
/// hash-free domain `Account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    pub account_id: i64,
    pub email: String,
    pub password_hash: String,
    pub is_disabled: bool,
    pub created_at: String,
}

/// Stored session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub expires_at: String,
    pub last_activity_at: String,
}

/// Stored holiday row for one country/year observance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayData {
    pub holiday_id: i64,
    pub country: String,
    pub year: i32,
    pub date: String,
    pub name: String,
}
