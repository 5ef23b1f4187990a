// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for FolkCal.
//!
//! This crate exposes the application's operations as plain functions over
//! the persistence layer: account registration and session auth, the
//! festival catalog with per-year date resolution, owner-scoped calendar
//! events, and CSV import. The HTTP server is a thin shell over these
//! handlers.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

pub mod auth;
pub mod csv_import;
pub mod error;
pub mod handlers;
pub mod password_policy;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedAccount, AuthenticationService};
pub use csv_import::{
    CsvImportResult, CsvRowResult, CsvRowStatus, import_festival_csv, import_holiday_csv,
};
pub use error::{
    ApiError, AuthError, translate_domain_error, translate_persistence_error,
};
pub use handlers::{
    create_festival, create_user_event, delete_festival, delete_user_event,
    list_festivals_for_year, list_user_events, login, logout, register_account, update_festival,
    update_user_event,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    DeleteFestivalResponse, DeleteUserEventResponse, FestivalInfo, FestivalUpsertRequest,
    FestivalWriteResponse, ListFestivalsResponse, ListUserEventsResponse, LoginRequest,
    LoginResponse, RegisterAccountRequest, RegisterAccountResponse, UserEventInfo,
    UserEventUpsertRequest,
};
