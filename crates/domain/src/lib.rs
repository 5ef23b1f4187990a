// Copyright (C) 2026 The FolkCal Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod account;
mod dates;
mod error;
mod festival;
mod holiday_table;
mod resolver;
mod user_event;

#[cfg(test)]
mod tests;

pub use account::{Account, validate_email};
pub use dates::{format_iso_date, parse_iso_date};
pub use error::DomainError;
pub use festival::{Festival, FestivalDescriptor, validate_festival_fields};
pub use holiday_table::{HolidayEntry, HolidayTable};
pub use resolver::{DateRule, last_weekday_of_month, month_from_abbreviation, resolve};
pub use user_event::{UserEvent, validate_event_title};
