// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for catalog, calendar, and account operations.
//!
//! Handlers translate requests into domain types, apply domain validation,
//! delegate to persistence, and translate every error into an [`ApiError`].
//! Session validation happens before these functions are called; handlers
//! that require an authenticated caller take an [`AuthenticatedAccount`].

use folkcal_domain::{
    DomainError, Festival, HolidayTable, UserEvent, format_iso_date, parse_iso_date, resolve,
    validate_event_title, validate_festival_fields,
};
use folkcal_persistence::Persistence;
use time::Date;
use tracing::{info, warn};

use crate::auth::{AuthenticatedAccount, AuthenticationService};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    DeleteFestivalResponse, DeleteUserEventResponse, FestivalInfo, FestivalUpsertRequest,
    FestivalWriteResponse, ListFestivalsResponse, ListUserEventsResponse, LoginRequest,
    LoginResponse, RegisterAccountRequest, RegisterAccountResponse, UserEventInfo,
    UserEventUpsertRequest,
};

/// Registers a new account via the API boundary.
///
/// # Errors
///
/// Returns an error if the email is malformed, the password violates the
/// policy, or the email is already registered.
pub fn register_account(
    persistence: &mut Persistence,
    request: &RegisterAccountRequest,
) -> Result<RegisterAccountResponse, ApiError> {
    let account = AuthenticationService::register(
        persistence,
        &request.email,
        &request.password,
        &request.password_confirmation,
    )?;

    info!(account_id = account.account_id, "Registered account");

    Ok(RegisterAccountResponse {
        account_id: account.account_id,
        email: account.email.clone(),
        message: format!("Registered account '{}'", account.email),
    })
}

/// Authenticates an account and opens a session.
///
/// # Errors
///
/// Returns an error if the credentials are invalid or the account is
/// disabled.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, expires_at, account) =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    info!(account_id = account.account_id, "Login succeeded");

    Ok(LoginResponse {
        session_token,
        expires_at,
        account_id: account.account_id,
        email: account.email,
    })
}

/// Closes a session.
///
/// # Errors
///
/// Returns an error if the session cannot be deleted.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Lists the festival catalog with dates resolved for one year.
///
/// Every catalog entry appears in the response. A festival whose rule
/// depends on a holiday keyword that is absent from the loaded table gets
/// `resolved_date: None` and a warning in the log; resolution failures of
/// any other kind abort the listing.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `year` - The year to resolve dates for
/// * `country` - The holiday-table country code (e.g. "IN")
///
/// # Errors
///
/// Returns an error if the catalog or holiday table cannot be loaded, or a
/// festival fails to resolve for a reason other than a missing holiday.
pub fn list_festivals_for_year(
    persistence: &mut Persistence,
    year: i32,
    country: &str,
) -> Result<ListFestivalsResponse, ApiError> {
    let festivals: Vec<Festival> = persistence
        .list_festivals()
        .map_err(translate_persistence_error)?;
    let table: HolidayTable = persistence
        .load_holiday_table(country, year)
        .map_err(translate_persistence_error)?;

    let mut infos: Vec<FestivalInfo> = Vec::with_capacity(festivals.len());
    for festival in festivals {
        let resolved_date: Option<String> = match resolve(&festival.descriptor(), year, &table) {
            Ok(date) => Some(format_iso_date(date)),
            Err(DomainError::NoMatchingHoliday { keyword }) => {
                warn!(
                    event_name = %festival.event_name,
                    keyword = %keyword,
                    year = year,
                    "Festival date unresolvable: holiday keyword absent from table"
                );
                None
            }
            Err(e) => return Err(translate_domain_error(e)),
        };

        infos.push(festival_to_info(festival, resolved_date));
    }

    Ok(ListFestivalsResponse {
        year,
        festivals: infos,
    })
}

/// Creates a new festival catalog entry.
///
/// # Errors
///
/// Returns an error if validation fails or the event name already exists.
pub fn create_festival(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    request: FestivalUpsertRequest,
) -> Result<FestivalWriteResponse, ApiError> {
    validate_festival_fields(&request.event_name).map_err(translate_domain_error)?;

    let festival: Festival = festival_from_request(None, request);
    let festival_id: i64 = persistence
        .create_festival(&festival)
        .map_err(translate_persistence_error)?;

    info!(
        festival_id = festival_id,
        event_name = %festival.event_name,
        account_id = account.account_id,
        "Created festival"
    );

    Ok(FestivalWriteResponse {
        festival_id,
        event_name: festival.event_name,
        message: String::from("Festival created"),
    })
}

/// Updates an existing festival catalog entry.
///
/// # Errors
///
/// Returns an error if validation fails or the festival does not exist.
pub fn update_festival(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    festival_id: i64,
    request: FestivalUpsertRequest,
) -> Result<FestivalWriteResponse, ApiError> {
    validate_festival_fields(&request.event_name).map_err(translate_domain_error)?;

    let festival: Festival = festival_from_request(Some(festival_id), request);
    persistence
        .update_festival(festival_id, &festival)
        .map_err(translate_persistence_error)?;

    info!(
        festival_id = festival_id,
        account_id = account.account_id,
        "Updated festival"
    );

    Ok(FestivalWriteResponse {
        festival_id,
        event_name: festival.event_name,
        message: String::from("Festival updated"),
    })
}

/// Deletes a festival catalog entry.
///
/// # Errors
///
/// Returns an error if the festival does not exist.
pub fn delete_festival(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    festival_id: i64,
) -> Result<DeleteFestivalResponse, ApiError> {
    persistence
        .delete_festival(festival_id)
        .map_err(translate_persistence_error)?;

    info!(
        festival_id = festival_id,
        account_id = account.account_id,
        "Deleted festival"
    );

    Ok(DeleteFestivalResponse {
        festival_id,
        message: String::from("Festival deleted"),
    })
}

/// Creates a calendar event for the authenticated account.
///
/// # Errors
///
/// Returns an error if the title or date is invalid or the insert fails.
pub fn create_user_event(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    request: UserEventUpsertRequest,
) -> Result<UserEventInfo, ApiError> {
    validate_event_title(&request.title).map_err(translate_domain_error)?;
    let date: Date = parse_iso_date(&request.date).map_err(translate_domain_error)?;

    let event: UserEvent = UserEvent::new(
        account.account_id,
        request.title,
        request.description,
        date,
    );
    let event_id: i64 = persistence
        .create_user_event(&event)
        .map_err(translate_persistence_error)?;

    info!(
        event_id = event_id,
        account_id = account.account_id,
        "Created user event"
    );

    Ok(UserEventInfo {
        event_id,
        title: event.title,
        description: event.description,
        date: format_iso_date(event.date),
    })
}

/// Lists the authenticated account's events within one calendar year.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_user_events(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    year: i32,
) -> Result<ListUserEventsResponse, ApiError> {
    let events: Vec<UserEvent> = persistence
        .list_events_for_year(account.account_id, year)
        .map_err(translate_persistence_error)?;

    let infos: Vec<UserEventInfo> = events
        .into_iter()
        .filter_map(|event| {
            event.event_id.map(|event_id| UserEventInfo {
                event_id,
                title: event.title,
                description: event.description,
                date: format_iso_date(event.date),
            })
        })
        .collect();

    Ok(ListUserEventsResponse {
        year,
        events: infos,
    })
}

/// Updates a calendar event owned by the authenticated account.
///
/// Ownership is enforced as absence: an event that exists but belongs to a
/// different account is reported as not found, so event IDs leak nothing
/// across accounts.
///
/// # Errors
///
/// Returns an error if the event does not exist, is not owned by the
/// caller, or the input is invalid.
pub fn update_user_event(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    event_id: i64,
    request: UserEventUpsertRequest,
) -> Result<UserEventInfo, ApiError> {
    validate_event_title(&request.title).map_err(translate_domain_error)?;
    let date: Date = parse_iso_date(&request.date).map_err(translate_domain_error)?;

    require_owned_event(persistence, account, event_id)?;

    persistence
        .update_user_event(event_id, &request.title, request.description.as_deref(), date)
        .map_err(translate_persistence_error)?;

    info!(
        event_id = event_id,
        account_id = account.account_id,
        "Updated user event"
    );

    Ok(UserEventInfo {
        event_id,
        title: request.title,
        description: request.description,
        date: format_iso_date(date),
    })
}

/// Deletes a calendar event owned by the authenticated account.
///
/// # Errors
///
/// Returns an error if the event does not exist or is not owned by the
/// caller.
pub fn delete_user_event(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    event_id: i64,
) -> Result<DeleteUserEventResponse, ApiError> {
    require_owned_event(persistence, account, event_id)?;

    persistence
        .delete_user_event(event_id)
        .map_err(translate_persistence_error)?;

    info!(
        event_id = event_id,
        account_id = account.account_id,
        "Deleted user event"
    );

    Ok(DeleteUserEventResponse {
        event_id,
        message: String::from("Event deleted"),
    })
}

/// Loads an event and verifies it belongs to the authenticated account.
///
/// Missing and foreign events produce the same not-found error.
fn require_owned_event(
    persistence: &mut Persistence,
    account: &AuthenticatedAccount,
    event_id: i64,
) -> Result<(), ApiError> {
    let not_found = || ApiError::ResourceNotFound {
        resource_type: String::from("Event"),
        message: format!("Event with ID {event_id} does not exist"),
    };

    let event: UserEvent = persistence
        .get_user_event(event_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(not_found)?;

    if event.account_id != account.account_id {
        return Err(not_found());
    }

    Ok(())
}

/// Builds a domain festival from an upsert request.
fn festival_from_request(festival_id: Option<i64>, request: FestivalUpsertRequest) -> Festival {
    Festival {
        festival_id,
        event_name: request.event_name,
        month: request.month,
        general_date: request.general_date,
        location: request.location,
        festival_type: request.festival_type,
        summary: request.summary,
        hook_intro: request.hook_intro,
        time_of_day: request.time_of_day,
        latitude: request.latitude,
        longitude: request.longitude,
        content_potential: request.content_potential,
        voiceover_prompt: request.voiceover_prompt,
        ideal_titles: request.ideal_titles,
    }
}

/// Maps a stored festival and its resolved date onto the response shape.
fn festival_to_info(festival: Festival, resolved_date: Option<String>) -> FestivalInfo {
    FestivalInfo {
        festival_id: festival.festival_id.unwrap_or_default(),
        event_name: festival.event_name,
        month: festival.month,
        general_date: festival.general_date,
        location: festival.location,
        festival_type: festival.festival_type,
        summary: festival.summary,
        hook_intro: festival.hook_intro,
        time_of_day: festival.time_of_day,
        latitude: festival.latitude,
        longitude: festival.longitude,
        content_potential: festival.content_potential,
        voiceover_prompt: festival.voiceover_prompt,
        ideal_titles: festival.ideal_titles,
        resolved_date,
    }
}
