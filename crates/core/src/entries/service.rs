//! Entry service.
//!
//! Every read is scoped to the signed-in user. Totals always come from the
//! full filtered set, never from the visible page.

use chrono::NaiveDate;
use daftar_shared::config::{AppConfig, PaginationConfig};
use daftar_shared::types::{ArchivedEntryId, EntryId, PageRequest};
use tracing::{debug, info};

use super::error::EntryError;
use super::types::{EntryForm, EntryPage, PeriodReport};
use crate::currency::{AmountCalculator, CalculationError};
use crate::entry::{DeletedEntry, Entry, NewEntry};
use crate::filter::EntryFilter;
use crate::reports::{AnalyticsReport, FinanceSummary, ReportPeriod, SummaryService};
use crate::session::{Actor, SessionContext};
use crate::store::EntryStore;
use crate::workflow::{Confirmation, DeleteOutcome, ReconciliationReport, SoftDeleteService};

/// Entry operations for one store.
pub struct EntryService<S: EntryStore> {
    store: S,
    calculator: AmountCalculator,
    pagination: PaginationConfig,
    trend_months: u32,
}

impl<S: EntryStore> EntryService<S> {
    /// Creates a service with default pagination and a six-month trend.
    #[must_use]
    pub fn new(store: S, calculator: AmountCalculator) -> Self {
        Self {
            store,
            calculator,
            pagination: PaginationConfig::default(),
            trend_months: 6,
        }
    }

    /// Creates a service from application configuration.
    pub fn from_config(store: S, config: &AppConfig) -> Result<Self, CalculationError> {
        Ok(Self {
            store,
            calculator: AmountCalculator::from_config(&config.calculation)?,
            pagination: config.pagination.clone(),
            trend_months: config.analytics.trend_months,
        })
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates the form, computes amounts and persists the entry.
    pub fn add_entry(&self, session: &SessionContext, form: EntryForm) -> Result<Entry, EntryError> {
        let actor = session.require_actor()?;
        let project_name = form.project_name.trim();
        if project_name.is_empty() {
            return Err(EntryError::EmptyProjectName);
        }
        let amounts = self
            .calculator
            .calculate_input(&form.amount, form.currency, form.disable_vat)?;

        let entry = self.store.insert_entry(NewEntry {
            user_id: actor.user_id,
            date: form.date,
            project_name: project_name.to_string(),
            entry_type: form.entry_type,
            currency: form.currency,
            amount_net: amounts.net,
            vat_amount: amounts.vat,
            amount_gross: amounts.gross,
            status: form.status,
            location: form.location,
            disable_vat: form.disable_vat,
        })?;

        info!(
            entry_id = %entry.id,
            user_id = %actor.user_id,
            currency = %entry.currency,
            amount_gross = %entry.amount_gross,
            "Entry added"
        );
        Ok(entry)
    }

    /// One page of the user's entries matching `filter`, newest first.
    pub fn list_page(
        &self,
        session: &SessionContext,
        filter: &EntryFilter,
        page: u32,
    ) -> Result<EntryPage, EntryError> {
        let actor = session.require_actor()?;
        filter.validate()?;
        self.page_for(&Self::scoped(&actor, filter.clone()), page)
    }

    /// Totals over every entry matching `filter`.
    pub fn summary(
        &self,
        session: &SessionContext,
        filter: &EntryFilter,
    ) -> Result<FinanceSummary, EntryError> {
        let actor = session.require_actor()?;
        filter.validate()?;
        let entries = self.store.all_entries(&Self::scoped(&actor, filter.clone()))?;
        Ok(SummaryService::summarize(&entries))
    }

    /// Page and totals for a preset period, narrowed by `filter`.
    pub fn report(
        &self,
        session: &SessionContext,
        period: ReportPeriod,
        filter: &EntryFilter,
        page: u32,
        today: NaiveDate,
    ) -> Result<PeriodReport, EntryError> {
        let actor = session.require_actor()?;
        filter.validate()?;
        let range = period.range(today)?;
        let scoped = Self::scoped(&actor, filter.clone()).intersect_dates(range);
        debug!(period = %period, start = %range.start, end = %range.end, "Building period report");

        let entries = self.page_for(&scoped, page)?;
        let summary = SummaryService::summarize(&self.store.all_entries(&scoped)?);
        Ok(PeriodReport {
            period,
            range,
            entries,
            summary,
        })
    }

    /// Current-month stats, trailing trend and overall split for the user.
    pub fn analytics(
        &self,
        session: &SessionContext,
        today: NaiveDate,
    ) -> Result<AnalyticsReport, EntryError> {
        let actor = session.require_actor()?;
        let entries = self
            .store
            .all_entries(&EntryFilter::new().with_user(actor.user_id))?;
        Ok(SummaryService::analytics(&entries, today, self.trend_months)?)
    }

    /// Soft-deletes one of the signed-in user's entries.
    pub fn delete_entry(
        &self,
        session: &SessionContext,
        entry_id: EntryId,
    ) -> Result<DeleteOutcome, EntryError> {
        Ok(SoftDeleteService::delete(&self.store, session, entry_id)?)
    }

    /// Permanently removes an archive copy.
    pub fn purge_archived(
        &self,
        archive_id: ArchivedEntryId,
        confirmation: Confirmation,
    ) -> Result<DeletedEntry, EntryError> {
        Ok(SoftDeleteService::purge(&self.store, archive_id, confirmation)?)
    }

    /// Archive copies, most recently deleted first.
    pub fn archive_log(&self) -> Result<Vec<DeletedEntry>, EntryError> {
        Ok(SoftDeleteService::archive_log(&self.store)?)
    }

    /// Finds, and with `apply` completes, half-finished deletes.
    pub fn reconcile(&self, apply: bool) -> Result<ReconciliationReport, EntryError> {
        Ok(SoftDeleteService::reconcile(&self.store, apply)?)
    }

    fn scoped(actor: &Actor, filter: EntryFilter) -> EntryFilter {
        filter.with_user(actor.user_id)
    }

    fn page_for(&self, filter: &EntryFilter, page: u32) -> Result<EntryPage, EntryError> {
        let request = PageRequest::new(page, self.pagination.per_page);
        let page = self.store.list_entries(filter, request)?;
        let pager = page
            .meta
            .visible_pages(self.pagination.visible_pages)
            .map(|pages| pages.collect::<Vec<_>>())
            .unwrap_or_default();
        debug!(page = page.meta.page, total = page.meta.total, "Listed entries");
        Ok(EntryPage { page, pager })
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
