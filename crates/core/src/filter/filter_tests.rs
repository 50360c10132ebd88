use super::*;
use crate::entry::fixtures::{date, entry};
use crate::entry::{EntryType, Location};
use rust_decimal_macros::dec;

fn named(name: &str, net: Decimal) -> Entry {
    let mut e = entry(EntryType::Income, net, date(2024, 5, 10));
    e.project_name = name.to_string();
    e
}

#[test]
fn test_empty_filter_matches_everything() {
    let filter = EntryFilter::new();
    assert!(filter.is_empty());
    assert!(filter.matches(&named("Anything", dec!(1))));
}

#[test]
fn test_blank_search_is_absent() {
    let filter = EntryFilter::new().with_search("   ");
    assert!(filter.is_empty());
    assert!(filter.search_text().is_none());
    assert!(filter.matches(&named("Villa", dec!(10))));
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let filter = EntryFilter::new().with_search("VILLA");
    assert!(filter.matches(&named("Jeddah villa renovation", dec!(10))));
    assert!(!filter.matches(&named("Office", dec!(10))));
}

#[test]
fn test_search_matches_net_or_gross_amount() {
    let e = crate::entry::fixtures::with_vat(named("Office", dec!(200)), dec!(30));

    assert!(EntryFilter::new().with_search("200").matches(&e));
    assert!(EntryFilter::new().with_search("230.00").matches(&e));
    assert!(!EntryFilter::new().with_search("30").matches(&e));
}

#[test]
fn test_date_bounds_are_inclusive() {
    let e = entry(EntryType::Expense, dec!(5), date(2024, 5, 31));
    let filter = EntryFilter::new()
        .with_date_from(date(2024, 5, 1))
        .with_date_to(date(2024, 5, 31));
    assert!(filter.matches(&e));

    let filter = EntryFilter::new().with_date_to(date(2024, 5, 30));
    assert!(!filter.matches(&e));
}

#[test]
fn test_predicates_are_conjunctive() {
    let e = entry(EntryType::Expense, dec!(5), date(2024, 5, 31));
    let filter = EntryFilter::new()
        .with_type(EntryType::Expense)
        .with_location(Location::Jordan);
    assert!(!filter.matches(&e));

    let filter = EntryFilter::new()
        .with_type(EntryType::Expense)
        .with_currency(e.currency)
        .with_location(Location::SaudiArabia);
    assert!(filter.matches(&e));
}

#[test]
fn test_user_scope() {
    let e = entry(EntryType::Income, dec!(5), date(2024, 1, 1));
    assert!(EntryFilter::new().with_user(e.user_id).matches(&e));
    assert!(!EntryFilter::new().with_user(UserId::new()).matches(&e));
}

#[test]
fn test_validate_rejects_inverted_range() {
    let filter = EntryFilter::new()
        .with_date_from(date(2024, 6, 1))
        .with_date_to(date(2024, 5, 1));
    let err = filter.validate().unwrap_err();
    assert_eq!(err.error_code(), "INVALID_DATE_RANGE");
    assert!(matches!(AppError::from(err), AppError::Validation(_)));
}

#[test]
fn test_clear_keeps_owner() {
    let owner = UserId::new();
    let mut filter = EntryFilter::new()
        .with_user(owner)
        .with_type(EntryType::Income)
        .with_search("villa");
    filter.clear();
    assert_eq!(filter, EntryFilter::new().with_user(owner));
}

#[test]
fn test_intersect_dates_narrows_bounds() {
    let range = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();

    let open = EntryFilter::new().intersect_dates(range);
    assert_eq!(open.date_from, Some(date(2024, 1, 1)));
    assert_eq!(open.date_to, Some(date(2024, 12, 31)));

    let narrow = EntryFilter::new()
        .with_date_from(date(2024, 3, 1))
        .with_date_to(date(2025, 3, 1))
        .intersect_dates(range);
    assert_eq!(narrow.date_from, Some(date(2024, 3, 1)));
    assert_eq!(narrow.date_to, Some(date(2024, 12, 31)));
}

#[test]
fn test_apply_sorts_newest_first() {
    let old = entry(EntryType::Income, dec!(1), date(2024, 1, 1));
    let new = entry(EntryType::Income, dec!(2), date(2024, 3, 1));
    let mid = entry(EntryType::Expense, dec!(3), date(2024, 2, 1));

    let result = EntryFilter::new().apply([&old, &new, &mid]);
    let dates: Vec<_> = result.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date(2024, 3, 1), date(2024, 2, 1), date(2024, 1, 1)]);

    let incomes = EntryFilter::new().with_type(EntryType::Income).apply([&old, &new, &mid]);
    assert_eq!(incomes.len(), 2);
}
