// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

/// API request to register a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    /// The login email.
    pub email: String,
    /// The plain-text password.
    pub password: String,
    /// The password confirmation.
    pub password_confirmation: String,
}

/// API response for a successful account registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAccountResponse {
    /// The canonical account identifier.
    pub account_id: i64,
    /// The registered email (normalized lowercase).
    pub email: String,
    /// A success message.
    pub message: String,
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// The login email.
    pub email: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The bearer session token.
    pub session_token: String,
    /// The session expiration timestamp (ISO 8601).
    pub expires_at: String,
    /// The canonical account identifier.
    pub account_id: i64,
    /// The account email.
    pub email: String,
}

/// A festival catalog entry enriched with its resolved date for one year.
///
/// `resolved_date` is `None` when the festival's resolution rule depends on
/// a holiday keyword that is absent from the loaded holiday table. The
/// festival still appears in the listing; only its date is unknown.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FestivalInfo {
    /// The canonical festival identifier.
    pub festival_id: i64,
    /// The festival name.
    pub event_name: String,
    /// The month abbreviation from the catalog (e.g. "Jan").
    pub month: String,
    /// The free-text date description from the catalog (e.g. "Mid-Mar").
    pub general_date: String,
    /// The festival location.
    pub location: String,
    /// The festival type classification.
    pub festival_type: String,
    /// The experience summary.
    pub summary: String,
    /// The hook/intro line.
    pub hook_intro: String,
    /// Optional time of day.
    pub time_of_day: Option<String>,
    /// Optional latitude.
    pub latitude: Option<String>,
    /// Optional longitude.
    pub longitude: Option<String>,
    /// Optional content potential description.
    pub content_potential: Option<String>,
    /// Optional voiceover prompt.
    pub voiceover_prompt: Option<String>,
    /// Optional ideal titles.
    pub ideal_titles: Option<String>,
    /// The resolved date for the requested year (`YYYY-MM-DD`), if resolvable.
    pub resolved_date: Option<String>,
}

/// API response for listing festivals with resolved dates.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListFestivalsResponse {
    /// The year the dates were resolved for.
    pub year: i32,
    /// The festival catalog with per-year resolved dates.
    pub festivals: Vec<FestivalInfo>,
}

/// API request to create or replace a festival catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FestivalUpsertRequest {
    /// The festival name (unique within the catalog).
    pub event_name: String,
    /// The month abbreviation (e.g. "Jan").
    pub month: String,
    /// The free-text date description (e.g. "Mid-Mar").
    pub general_date: String,
    /// The festival location.
    pub location: String,
    /// The festival type classification.
    pub festival_type: String,
    /// The experience summary.
    pub summary: String,
    /// The hook/intro line.
    pub hook_intro: String,
    /// Optional time of day.
    pub time_of_day: Option<String>,
    /// Optional latitude.
    pub latitude: Option<String>,
    /// Optional longitude.
    pub longitude: Option<String>,
    /// Optional content potential description.
    pub content_potential: Option<String>,
    /// Optional voiceover prompt.
    pub voiceover_prompt: Option<String>,
    /// Optional ideal titles.
    pub ideal_titles: Option<String>,
}

/// API response for a successful festival create or update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FestivalWriteResponse {
    /// The canonical festival identifier.
    pub festival_id: i64,
    /// The festival name.
    pub event_name: String,
    /// A success message.
    pub message: String,
}

/// API response for a successful festival deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteFestivalResponse {
    /// The identifier of the deleted festival.
    pub festival_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to create or replace a user calendar event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEventUpsertRequest {
    /// The event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The event date (`YYYY-MM-DD`).
    pub date: String,
}

/// A user calendar event as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserEventInfo {
    /// The canonical event identifier.
    pub event_id: i64,
    /// The event title.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// The event date (`YYYY-MM-DD`).
    pub date: String,
}

/// API response for listing one account's events in a year.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListUserEventsResponse {
    /// The requested year.
    pub year: i32,
    /// The account's events within the year, ordered by date.
    pub events: Vec<UserEventInfo>,
}

/// API response for a successful user event deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteUserEventResponse {
    /// The identifier of the deleted event.
    pub event_id: i64,
    /// A success message.
    pub message: String,
}
