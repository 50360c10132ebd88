//! Property-based tests for the soft-delete workflow.

use proptest::prelude::*;
use rust_decimal::Decimal;

use daftar_shared::types::UserId;

use super::service::SoftDeleteService;
use super::types::Confirmation;
use crate::entry::EntryType;
use crate::entry::fixtures::{date, owned_entry};
use crate::session::{Actor, SessionContext};
use crate::store::EntryStore;
use crate::store::test_store::TestStore;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Deleting any subset moves exactly that subset into the archive.
    #[test]
    fn prop_delete_moves_entries_to_archive(
        amounts in prop::collection::vec(1i64..100_000, 1..20),
        mask in prop::collection::vec(any::<bool>(), 20),
    ) {
        let owner = UserId::new();
        let entries: Vec<_> = amounts
            .iter()
            .map(|cents| owned_entry(owner, EntryType::Income, Decimal::new(*cents, 2), date(2024, 1, 1)))
            .collect();
        let total = entries.len();
        let chosen: Vec<_> = entries
            .iter()
            .zip(&mask)
            .filter(|(_, pick)| **pick)
            .map(|(e, _)| e.id)
            .collect();
        let store = TestStore::with_entries(entries);
        let session = SessionContext::signed_in(Actor::new(owner));

        for id in &chosen {
            SoftDeleteService::delete(&store, &session, *id).unwrap();
        }

        prop_assert_eq!(store.entry_count() + store.archived_count(), total);
        prop_assert_eq!(store.archived_count(), chosen.len());
        for id in &chosen {
            prop_assert!(store.get_entry(*id).unwrap().is_none());
            prop_assert!(store.find_archived_by_original(*id).unwrap().is_some());
        }
    }

    /// A declined purge never changes the archive.
    #[test]
    fn prop_declined_purge_is_noop(count in 1usize..10) {
        let owner = UserId::new();
        let entries: Vec<_> = (0..count)
            .map(|_| owned_entry(owner, EntryType::Expense, Decimal::ONE, date(2024, 2, 2)))
            .collect();
        let ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        let store = TestStore::with_entries(entries);
        let session = SessionContext::signed_in(Actor::new(owner));
        for id in ids {
            SoftDeleteService::delete(&store, &session, id).unwrap();
        }

        for archived in store.list_archived().unwrap() {
            prop_assert!(SoftDeleteService::purge(&store, archived.id, Confirmation::Declined).is_err());
        }
        prop_assert_eq!(store.archived_count(), count);
    }
}
