//! Report data types.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::period::{DateRange, MonthBucket};

/// Per-category totals over a set of entries.
///
/// Unpaid entries never contribute. VAT is reported but excluded from profit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    /// Net income.
    pub income_net: Decimal,
    /// VAT collected on income.
    pub income_vat: Decimal,
    /// Net expenses.
    pub expense_net: Decimal,
    /// VAT paid on expenses.
    pub expense_vat: Decimal,
    /// `income_net - expense_net`.
    pub net_profit: Decimal,
    /// Number of contributing entries.
    pub entry_count: u64,
}

/// Income and expense totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// The month.
    pub bucket: MonthBucket,
    /// `YYYY-MM` label.
    pub label: String,
    /// Net income.
    pub income: Decimal,
    /// Net expenses.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
}

impl PeriodTotals {
    /// Creates totals for `bucket`.
    #[must_use]
    pub fn new(bucket: MonthBucket, income: Decimal, expense: Decimal) -> Self {
        Self {
            bucket,
            label: bucket.label(),
            income,
            expense,
            net: income - expense,
        }
    }
}

/// Income vs expense proportion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeExpenseSplit {
    /// Net income.
    pub income: Decimal,
    /// Net expenses.
    pub expense: Decimal,
}

impl IncomeExpenseSplit {
    /// `income + expense`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.income + self.expense
    }

    /// Income share in percent, two decimals. `None` when both are zero.
    #[must_use]
    pub fn income_percent(&self) -> Option<Decimal> {
        self.percent_of(self.income)
    }

    /// Expense share in percent, two decimals. `None` when both are zero.
    #[must_use]
    pub fn expense_percent(&self) -> Option<Decimal> {
        self.percent_of(self.expense)
    }

    fn percent_of(&self, part: Decimal) -> Option<Decimal> {
        let total = self.total();
        if total.is_zero() {
            return None;
        }
        part.checked_mul(Decimal::ONE_HUNDRED)?
            .checked_div(total)
            .map(|p| p.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
    }
}

/// Totals for a single period, e.g. the current month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodStats {
    /// The period.
    pub range: DateRange,
    /// Net income.
    pub income: Decimal,
    /// Net expenses.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
    /// Number of contributing entries.
    pub transaction_count: u64,
}

/// Dashboard analytics: this month, a trailing trend and the overall split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Current-month totals.
    pub current_month: PeriodStats,
    /// Trailing monthly totals, oldest first.
    pub trend: Vec<PeriodTotals>,
    /// Income vs expense over the full history.
    pub split: IncomeExpenseSplit,
}
