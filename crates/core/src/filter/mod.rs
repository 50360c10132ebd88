//! Entry filtering for listings and summaries.
//!
//! Every predicate is optional and all present predicates must hold.

use std::cmp::Reverse;
use std::str::FromStr;

use chrono::NaiveDate;
use daftar_shared::AppError;
use daftar_shared::types::{Currency, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::{Entry, EntryType, Location};
use crate::reports::DateRange;

/// Errors raised by an invalid filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Lower date bound is after the upper bound.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Lower bound.
        from: NaiveDate,
        /// Upper bound.
        to: NaiveDate,
    },
}

impl FilterError {
    /// Returns the error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
        }
    }
}

impl From<FilterError> for AppError {
    fn from(err: FilterError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Sparse, conjunctive filter over entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Only entries owned by this user.
    pub user_id: Option<UserId>,
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
    /// Exact entry type.
    pub entry_type: Option<EntryType>,
    /// Exact currency.
    pub currency: Option<Currency>,
    /// Exact location.
    pub location: Option<Location>,
    /// Free-text search; blank text is ignored.
    pub search: Option<String>,
}

impl EntryFilter {
    /// Creates a new empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one owner.
    #[must_use]
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Sets the inclusive lower date bound.
    #[must_use]
    pub fn with_date_from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Sets the inclusive upper date bound.
    #[must_use]
    pub fn with_date_to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Restricts to one entry type.
    #[must_use]
    pub fn with_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    /// Restricts to one currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Restricts to one location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Checks that the date bounds are ordered.
    pub fn validate(&self) -> Result<(), FilterError> {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) if from > to => Err(FilterError::InvalidDateRange { from, to }),
            _ => Ok(()),
        }
    }

    /// Trimmed search text, or `None` when absent or blank.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Returns true if the filter is empty (matches everything).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user_id.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.entry_type.is_none()
            && self.currency.is_none()
            && self.location.is_none()
            && self.search_text().is_none()
    }

    /// Resets every predicate except the owner.
    pub fn clear(&mut self) {
        *self = Self {
            user_id: self.user_id,
            ..Self::default()
        };
    }

    /// Narrows the date bounds to lie within `range`.
    #[must_use]
    pub fn intersect_dates(mut self, range: DateRange) -> Self {
        self.date_from = Some(self.date_from.map_or(range.start, |from| from.max(range.start)));
        self.date_to = Some(self.date_to.map_or(range.end, |to| to.min(range.end)));
        self
    }

    /// Returns true if `entry` satisfies every present predicate.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.user_id.is_none_or(|user| entry.user_id == user)
            && self.date_from.is_none_or(|from| entry.date >= from)
            && self.date_to.is_none_or(|to| entry.date <= to)
            && self.entry_type.is_none_or(|t| entry.entry_type == t)
            && self.currency.is_none_or(|c| entry.currency == c)
            && self.location.is_none_or(|l| entry.location == l)
            && self.search_text().is_none_or(|text| search_matches(text, entry))
    }

    /// Applies the filter and returns matches sorted newest first.
    #[must_use]
    pub fn apply<'a, I>(&self, entries: I) -> Vec<Entry>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut matched: Vec<Entry> = entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .cloned()
            .collect();
        sort_newest_first(&mut matched);
        matched
    }
}

/// Case-insensitive project-name substring, or exact amount match.
fn search_matches(text: &str, entry: &Entry) -> bool {
    if entry
        .project_name
        .to_lowercase()
        .contains(&text.to_lowercase())
    {
        return true;
    }
    Decimal::from_str(text)
        .is_ok_and(|amount| entry.amount_net == amount || entry.amount_gross == amount)
}

/// Listing order: date descending, then creation time descending.
pub fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| Reverse((entry.date, entry.created_at)));
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
