//! Entry service inputs and results.

use chrono::NaiveDate;
use daftar_shared::types::{Currency, PageResponse};
use serde::{Deserialize, Serialize};

use crate::entry::{Entry, EntryStatus, EntryType, Location};
use crate::reports::{DateRange, FinanceSummary, ReportPeriod};

/// Raw add-entry input; `amount` is validated and converted on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text project label.
    pub project_name: String,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Currency of `amount`.
    pub currency: Currency,
    /// Amount as typed by the user.
    pub amount: String,
    /// Payment status.
    pub status: EntryStatus,
    /// Booking region.
    pub location: Location,
    /// Skip VAT for this entry.
    #[serde(default)]
    pub disable_vat: bool,
}

/// One listing page plus the page numbers to show in the pager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryPage {
    /// Entries and page metadata.
    pub page: PageResponse<Entry>,
    /// Page-number buttons; empty when there is at most one page.
    pub pager: Vec<u32>,
}

/// Listing and totals for a report period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Requested preset.
    pub period: ReportPeriod,
    /// Resolved date range.
    pub range: DateRange,
    /// Requested page of matching entries.
    pub entries: EntryPage,
    /// Totals over every matching entry.
    pub summary: FinanceSummary,
}
