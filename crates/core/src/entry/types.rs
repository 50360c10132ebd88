//! Entry domain types.
//!
//! An [`Entry`] is an income or expense line already normalized to the base
//! currency. Its derived amounts are produced by the amount calculator and
//! stored as-is; entries are never edited in place.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use daftar_shared::types::{ArchivedEntryId, Currency, EntryId, UserId};

/// Whether an entry is money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryType {
    /// Returns the string representation of the type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses a type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status of an entry.
///
/// Older records store the Arabic labels; both forms are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Settled.
    #[serde(alias = "مدفوع")]
    Paid,
    /// Awaiting settlement.
    #[serde(alias = "معلق")]
    Pending,
    /// Not paid; listed but never counted in totals.
    #[serde(alias = "غير مدفوع")]
    Unpaid,
}

impl EntryStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Unpaid => "unpaid",
        }
    }

    /// Parses a status from its English or Arabic label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "paid" | "مدفوع" => Some(Self::Paid),
            "pending" | "معلق" => Some(Self::Pending),
            "unpaid" | "غير مدفوع" => Some(Self::Unpaid),
            _ => None,
        }
    }

    /// Returns true if entries with this status contribute to totals.
    #[must_use]
    pub fn counts_toward_totals(&self) -> bool {
        !matches!(self, Self::Unpaid)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Region an entry is booked under. Used for filtering only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Saudi Arabia.
    #[serde(rename = "Saudi Arabia")]
    SaudiArabia,
    /// Jordan.
    #[serde(rename = "Jordan")]
    Jordan,
}

impl Location {
    /// Returns the stored label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaudiArabia => "Saudi Arabia",
            Self::Jordan => "Jordan",
        }
    }

    /// Parses a location from its stored label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "saudi arabia" => Some(Self::SaudiArabia),
            "jordan" => Some(Self::Jordan),
            _ => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry ready to be persisted; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Owner of the entry.
    pub user_id: UserId,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text project label.
    pub project_name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Currency the amount was entered in.
    pub currency: Currency,
    /// Base-currency amount before VAT.
    pub amount_net: Decimal,
    /// VAT portion.
    pub vat_amount: Decimal,
    /// `amount_net + vat_amount`.
    pub amount_gross: Decimal,
    /// Payment status.
    pub status: EntryStatus,
    /// Booking region.
    pub location: Location,
    /// VAT forced to zero for this entry.
    #[serde(default)]
    pub disable_vat: bool,
}

/// A persisted finance entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier.
    pub id: EntryId,
    /// Owner of the entry.
    pub user_id: UserId,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text project label.
    pub project_name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Currency the amount was entered in.
    pub currency: Currency,
    /// Base-currency amount before VAT.
    pub amount_net: Decimal,
    /// VAT portion.
    pub vat_amount: Decimal,
    /// `amount_net + vat_amount`.
    pub amount_gross: Decimal,
    /// Payment status.
    pub status: EntryStatus,
    /// Booking region.
    pub location: Location,
    /// VAT forced to zero for this entry.
    #[serde(default)]
    pub disable_vat: bool,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Materializes a new entry with its store-assigned identity.
    #[must_use]
    pub fn from_new(new: NewEntry, id: EntryId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            date: new.date,
            project_name: new.project_name,
            entry_type: new.entry_type,
            currency: new.currency,
            amount_net: new.amount_net,
            vat_amount: new.vat_amount,
            amount_gross: new.amount_gross,
            status: new.status,
            location: new.location,
            disable_vat: new.disable_vat,
            created_at,
        }
    }

    /// Returns true if this entry contributes to summaries.
    #[must_use]
    pub fn counts_toward_totals(&self) -> bool {
        self.status.counts_toward_totals()
    }

    /// Returns true if `amount_gross == amount_net + vat_amount`.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.amount_gross == self.amount_net + self.vat_amount
    }
}

/// An archived copy of an entry, written by the soft-delete workflow.
///
/// Immutable once written; only a purge removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedEntry {
    /// Archive record identifier.
    pub id: ArchivedEntryId,
    /// Identifier the entry had while active.
    pub original_entry_id: EntryId,
    /// Full copy of the entry at deletion time.
    pub entry: Entry,
    /// User who deleted the entry.
    pub deleted_by: UserId,
    /// When the entry was deleted.
    pub deleted_at: DateTime<Utc>,
}

impl DeletedEntry {
    /// Builds the archive copy of `entry`.
    #[must_use]
    pub fn archive(entry: Entry, deleted_by: UserId, deleted_at: DateTime<Utc>) -> Self {
        Self {
            id: ArchivedEntryId::new(),
            original_entry_id: entry.id,
            entry,
            deleted_by,
            deleted_at,
        }
    }
}
