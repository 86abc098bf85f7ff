use std::collections::BTreeSet;
use std::sync::Arc;

use dormdesk::notify::RecordingNotifier;
use dormdesk::storage::CollectionStore;
use dormdesk::types::{RecordId, Student, StudentDraft, StudentStatus, StudyYear};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn student(id: u64) -> Student {
    Student {
        id: RecordId::new(id),
        name: format!("Student {id}"),
        email: format!("s{id}@example.com"),
        room_number: format!("R-{id}"),
        program: "Physics".into(),
        year: StudyYear::Third,
        status: StudentStatus::Active,
    }
}

fn draft() -> StudentDraft {
    StudentDraft {
        name: "New".into(),
        email: "new@example.com".into(),
        room_number: "N-1".into(),
        program: "Law".into(),
        year: Some(StudyYear::First),
        status: None,
    }
}

fn store_with(ids: &BTreeSet<u64>, order: &[usize]) -> CollectionStore<Student> {
    let mut ids: Vec<u64> = ids.iter().copied().collect();
    // shuffle deterministically so insertion order differs from id order
    for (i, j) in order.iter().enumerate() {
        if !ids.is_empty() {
            let a = i % ids.len();
            let b = j % ids.len();
            ids.swap(a, b);
        }
    }
    CollectionStore::new(Arc::new(RecordingNotifier::new()))
        .with_records(ids.into_iter().map(student))
}

fn status() -> impl Strategy<Value = StudentStatus> {
    prop_oneof![
        Just(StudentStatus::Active),
        Just(StudentStatus::Inactive),
        Just(StudentStatus::Pending),
    ]
}

#[derive(Clone, Debug)]
enum Op {
    Add,
    Remove(u64),
    Undo,
    Status(u64, StudentStatus),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Add),
        (1u64..12).prop_map(Op::Remove),
        Just(Op::Undo),
        (1u64..12, status()).prop_map(|(id, s)| Op::Status(id, s)),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn add_assigns_max_plus_one(
        ids in proptest::collection::btree_set(1u64..1000, 0..20),
        order in proptest::collection::vec(0usize..20, 0..20),
    ) {
        let mut store = store_with(&ids, &order);
        let before = store.len();
        let created = store.add(draft()).unwrap();
        let expected = ids.iter().max().map(|m| m + 1).unwrap_or(1);
        prop_assert_eq!(created.id, RecordId::new(expected));
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(store.list().last(), Some(&created));
    }

    #[test]
    fn remove_then_undo_restores_record_at_end(
        ids in proptest::collection::btree_set(1u64..100, 1..15),
        order in proptest::collection::vec(0usize..15, 0..15),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = store_with(&ids, &order);
        let target = store.list()[pick.index(store.len())].clone();
        let mut expected: Vec<Student> = store
            .list()
            .iter()
            .filter(|s| s.id != target.id)
            .cloned()
            .collect();
        expected.push(target.clone());

        prop_assert!(store.remove(target.id));
        prop_assert!(store.undo_last_removal());
        prop_assert_eq!(store.list(), expected.as_slice());
    }

    #[test]
    fn update_status_changes_only_status(
        ids in proptest::collection::btree_set(1u64..100, 1..15),
        pick in any::<prop::sample::Index>(),
        new_status in status(),
    ) {
        let mut store = store_with(&ids, &[]);
        let before: Vec<Student> = store.list().to_vec();
        let target = before[pick.index(before.len())].id;

        store.update_status(target, new_status);

        for (old, new) in before.iter().zip(store.list()) {
            if old.id == target {
                prop_assert_eq!(new.status, new_status);
                prop_assert_eq!(&Student { status: old.status, ..new.clone() }, old);
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn removing_unknown_id_changes_nothing(
        ids in proptest::collection::btree_set(1u64..50, 1..10),
        missing in 50u64..100,
    ) {
        let mut store = store_with(&ids, &[]);
        let first = store.list()[0].id;
        store.remove(first);
        let list: Vec<Student> = store.list().to_vec();
        let parked = store.pending_undo().cloned();

        prop_assert!(!store.remove(RecordId::new(missing)));
        prop_assert_eq!(store.list(), list.as_slice());
        prop_assert_eq!(store.pending_undo().cloned(), parked);
    }

    #[test]
    fn ids_stay_unique_under_any_sequence(ops in proptest::collection::vec(op(), 0..60)) {
        let seed: BTreeSet<u64> = (1..=5).collect();
        let mut store = store_with(&seed, &[]);
        for op in ops {
            match op {
                Op::Add => { store.add(draft()).unwrap(); }
                Op::Remove(id) => { store.remove(RecordId::new(id)); }
                Op::Undo => { store.undo_last_removal(); }
                Op::Status(id, s) => { store.update_status(RecordId::new(id), s); }
            }
            let unique: BTreeSet<RecordId> = store.list().iter().map(|s| s.id).collect();
            prop_assert_eq!(unique.len(), store.len());
        }
    }
}
