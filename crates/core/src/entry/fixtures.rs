//! Entry builders shared by unit tests.

use chrono::{NaiveDate, TimeZone, Utc};
use daftar_shared::types::{Currency, EntryId, UserId};
use rust_decimal::Decimal;

use super::{Entry, EntryStatus, EntryType, Location, NewEntry};

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A paid SAR-no-VAT entry for `owner`, so gross equals net.
pub(crate) fn new_entry(owner: UserId, entry_type: EntryType, net: Decimal, on: NaiveDate) -> NewEntry {
    NewEntry {
        user_id: owner,
        date: on,
        project_name: format!("{entry_type} project"),
        entry_type,
        currency: Currency::SarNoVat,
        amount_net: net,
        vat_amount: Decimal::ZERO,
        amount_gross: net,
        status: EntryStatus::Paid,
        location: Location::SaudiArabia,
        disable_vat: false,
    }
}

pub(crate) fn entry(entry_type: EntryType, net: Decimal, on: NaiveDate) -> Entry {
    owned_entry(UserId::new(), entry_type, net, on)
}

pub(crate) fn owned_entry(owner: UserId, entry_type: EntryType, net: Decimal, on: NaiveDate) -> Entry {
    let created_at = Utc.from_utc_datetime(&on.and_hms_opt(12, 0, 0).unwrap());
    Entry::from_new(new_entry(owner, entry_type, net, on), EntryId::new(), created_at)
}

pub(crate) fn with_status(mut entry: Entry, status: EntryStatus) -> Entry {
    entry.status = status;
    entry
}

pub(crate) fn with_vat(mut entry: Entry, vat: Decimal) -> Entry {
    entry.currency = Currency::Sar;
    entry.vat_amount = vat;
    entry.amount_gross = entry.amount_net + vat;
    entry
}
