//! Aggregation over entries.
//!
//! Every total excludes unpaid entries. Callers pass the full filtered set,
//! never a page window.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::error::ReportError;
use super::period::{DateRange, MonthBucket};
use super::types::{AnalyticsReport, FinanceSummary, IncomeExpenseSplit, PeriodStats, PeriodTotals};
use crate::entry::{Entry, EntryType};

/// Service for aggregating entries into summaries and series.
pub struct SummaryService;

impl SummaryService {
    /// Sums net and VAT per category.
    #[must_use]
    pub fn summarize<'a, I>(entries: I) -> FinanceSummary
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut summary = FinanceSummary::default();
        for entry in contributing(entries) {
            match entry.entry_type {
                EntryType::Income => {
                    summary.income_net += entry.amount_net;
                    summary.income_vat += entry.vat_amount;
                }
                EntryType::Expense => {
                    summary.expense_net += entry.amount_net;
                    summary.expense_vat += entry.vat_amount;
                }
            }
            summary.entry_count += 1;
        }
        summary.net_profit = summary.income_net - summary.expense_net;
        summary
    }

    /// Sums entries dated within `range`.
    #[must_use]
    pub fn summarize_range<'a, I>(entries: I, range: DateRange) -> FinanceSummary
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        Self::summarize(entries.into_iter().filter(|e| range.contains(e.date)))
    }

    /// Income, expense, net and count for entries within `range`.
    #[must_use]
    pub fn period_stats<'a, I>(entries: I, range: DateRange) -> PeriodStats
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let summary = Self::summarize_range(entries, range);
        PeriodStats {
            range,
            income: summary.income_net,
            expense: summary.expense_net,
            net: summary.net_profit,
            transaction_count: summary.entry_count,
        }
    }

    /// Net income and expense per calendar month.
    #[must_use]
    pub fn bucket_totals<'a, I>(entries: I) -> BTreeMap<MonthBucket, IncomeExpenseSplit>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let mut buckets: BTreeMap<MonthBucket, IncomeExpenseSplit> = BTreeMap::new();
        for entry in contributing(entries) {
            let slot = buckets.entry(MonthBucket::containing(entry.date)).or_default();
            match entry.entry_type {
                EntryType::Income => slot.income += entry.amount_net,
                EntryType::Expense => slot.expense += entry.amount_net,
            }
        }
        buckets
    }

    /// Monthly totals for the `months` months ending at `anchor`, oldest first.
    ///
    /// Months without entries appear with zero totals.
    pub fn trend<'a, I>(
        entries: I,
        anchor: NaiveDate,
        months: u32,
    ) -> Result<Vec<PeriodTotals>, ReportError>
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let buckets = Self::bucket_totals(entries);
        let series = MonthBucket::trailing(anchor, months)?
            .into_iter()
            .map(|bucket| {
                let totals = buckets.get(&bucket).copied().unwrap_or_default();
                PeriodTotals::new(bucket, totals.income, totals.expense)
            })
            .collect();
        Ok(series)
    }

    /// Income vs expense over all given entries.
    #[must_use]
    pub fn income_expense_split<'a, I>(entries: I) -> IncomeExpenseSplit
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let summary = Self::summarize(entries);
        IncomeExpenseSplit {
            income: summary.income_net,
            expense: summary.expense_net,
        }
    }

    /// Current-month stats, trailing trend and overall split.
    pub fn analytics(
        entries: &[Entry],
        today: NaiveDate,
        trend_months: u32,
    ) -> Result<AnalyticsReport, ReportError> {
        let this_month = MonthBucket::containing(today).range()?;
        Ok(AnalyticsReport {
            current_month: Self::period_stats(entries, this_month),
            trend: Self::trend(entries, today, trend_months)?,
            split: Self::income_expense_split(entries),
        })
    }
}

fn contributing<'a, I>(entries: I) -> impl Iterator<Item = &'a Entry>
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().filter(|e| e.counts_toward_totals())
}
