use smashly::core::notification::Notification;
use smashly::core::{Notifier, SlotStorage};
use smashly::{
    ComparisonStore, FileSlotStorage, MemorySlotStorage, RacketSummary, SlotPersistence,
    COMPARISON_SLOT_KEY, MAX_COMPARISON_ITEMS,
};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct MockNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    fn titles(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        self.sent.lock().unwrap().push(notification);
    }
}

fn racket(nombre: &str) -> RacketSummary {
    RacketSummary::new(nombre)
}

fn names(store: &ComparisonStore<MockNotifier>) -> Vec<String> {
    store.rackets().iter().map(|r| r.nombre.clone()).collect()
}

fn slot_contents(storage: &impl SlotStorage) -> Vec<RacketSummary> {
    let raw = storage.read_slot(COMPARISON_SLOT_KEY).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_documented_scenarios() {
    let notifier = MockNotifier::default();
    let mut store = ComparisonStore::new(notifier.clone());

    // 1. first add succeeds
    assert!(store.add_racket(racket("Racket 1")));
    assert_eq!(store.count(), 1);

    // 2. duplicate add is rejected with an error toast
    assert!(!store.add_racket(racket("Racket 1")));
    assert_eq!(store.count(), 1);
    assert_eq!(notifier.titles(), vec!["Error".to_string()]);

    // 3. fourth racket is rejected
    assert!(store.add_racket(racket("Racket 2")));
    assert!(store.add_racket(racket("Racket 3")));
    assert!(!store.add_racket(racket("Racket 4")));
    assert_eq!(store.count(), 3);
    assert_eq!(notifier.titles().len(), 2);

    // 4. removal keeps the rest
    store.remove_racket("Racket 3");
    store.remove_racket("Racket 1");
    assert_eq!(names(&store), vec!["Racket 2"]);

    // 5. clear
    store.clear_comparison();
    assert_eq!(store.count(), 0);
    assert!(store.rackets().is_empty());

    // 6. membership
    assert!(!store.is_racket_in_comparison("Racket 1"));
    store.add_racket(racket("Racket 1"));
    assert!(store.is_racket_in_comparison("Racket 1"));
}

#[test]
fn test_cardinality_and_uniqueness_over_long_sequences() {
    let mut store = ComparisonStore::new(MockNotifier::default());

    for step in 0..200usize {
        let name = format!("Racket {}", (step * 7) % 5);
        if step % 4 == 3 {
            store.remove_racket(&name);
        } else {
            store.add_racket(racket(&name));
        }

        assert!(store.count() <= MAX_COMPARISON_ITEMS);
        let mut unique = names(&store);
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), store.count());
    }
}

#[test]
fn test_rejected_add_leaves_slot_unchanged() {
    let storage = MemorySlotStorage::new();
    let mut store = ComparisonStore::with_persistence(
        SlotPersistence::new(storage.clone()),
        MockNotifier::default(),
    );
    store.add_racket(racket("Racket 1").with_marca("Head"));
    let before = storage.read_slot(COMPARISON_SLOT_KEY).unwrap();

    assert!(!store.add_racket(racket("Racket 1").with_marca("Otra")));
    assert_eq!(storage.read_slot(COMPARISON_SLOT_KEY).unwrap(), before);
    assert_eq!(store.rackets()[0].marca.as_deref(), Some("Head"));
}

#[test]
fn test_file_slot_round_trip_after_each_mutation() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FileSlotStorage::new(temp_dir.path());
    let mut store = ComparisonStore::with_persistence(
        SlotPersistence::new(storage.clone()),
        MockNotifier::default(),
    );

    store.add_racket(racket("A").with_precio(120.0));
    assert_eq!(slot_contents(&storage), store.rackets());

    store.add_racket(racket("B"));
    store.add_racket(racket("C"));
    store.remove_racket("B");
    assert_eq!(slot_contents(&storage), store.rackets());
    assert_eq!(names(&store), vec!["A", "C"]);

    store.clear_comparison();
    assert!(slot_contents(&storage).is_empty());
    let raw = std::fs::read_to_string(temp_dir.path().join("smashly_comparison_list.json")).unwrap();
    assert_eq!(raw, "[]");
}

#[test]
fn test_clear_overwrites_malformed_slot() {
    let storage = MemorySlotStorage::new();
    storage.write_slot(COMPARISON_SLOT_KEY, "garbage").unwrap();

    let mut store = ComparisonStore::with_persistence(
        SlotPersistence::new(storage.clone()),
        MockNotifier::default(),
    );
    assert_eq!(store.count(), 0);

    store.clear_comparison();
    assert_eq!(storage.read_slot(COMPARISON_SLOT_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_oversized_slot_is_trimmed_on_load() {
    let storage = MemorySlotStorage::new();
    storage
        .write_slot(
            COMPARISON_SLOT_KEY,
            r#"[{"nombre":"A"},{"nombre":"B"},{"nombre":"A"},{"nombre":"C"},{"nombre":"D"}]"#,
        )
        .unwrap();

    let store = ComparisonStore::with_persistence(
        SlotPersistence::new(storage),
        MockNotifier::default(),
    );

    assert_eq!(names(&store), vec!["A", "B", "C"]);
}
