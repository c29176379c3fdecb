use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::cell::Cell;
use std::rc::Rc;
use tamagoji::adapters::{FixedClock, MemoryLog, ScriptedDice};
use tamagoji::core::{Clock, Pet, PetStore};
use tamagoji::{FileActivityLog, JsonFileStore, PetEngine, PetManager};
use tempfile::TempDir;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(20, 0, 0)
        .unwrap()
}

/// Clock whose reading can be moved forward from the test.
#[derive(Clone)]
struct SharedClock(Rc<Cell<NaiveDateTime>>);

impl SharedClock {
    fn advance(&self, by: Duration) {
        self.0.set(self.0.get() + by);
    }
}

impl Clock for SharedClock {
    fn now(&self) -> NaiveDateTime {
        self.0.get()
    }
}

fn open_with_clock<C: Clock + 'static>(
    store: JsonFileStore,
    clock: C,
) -> PetManager<JsonFileStore, MemoryLog, ScriptedDice> {
    PetManager::open(
        store,
        MemoryLog::new(),
        PetEngine::new(ScriptedDice::new(vec![])),
        Box::new(clock),
    )
}

#[test]
fn test_pets_survive_restart() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");

    let mut manager = open_with_clock(JsonFileStore::new(&data_file), FixedClock(base_time()));
    manager.add_pet("Barsik", "cat").unwrap();
    manager.add_pet("Barsik", "kitten").unwrap();
    manager.play(1).unwrap();

    let reopened = open_with_clock(JsonFileStore::new(&data_file), FixedClock(base_time()));

    assert_eq!(reopened.pets(), manager.pets());
    assert_eq!(reopened.pet(1).unwrap().species(), "kitten");
    assert_eq!(reopened.pet(1).unwrap().happiness, 80);
}

#[test]
fn test_restart_after_three_days_ages_pets() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");

    let mut earlier = Pet::new("Rex", "dog", base_time()).unwrap();
    earlier.age = 5;
    let mut recent = Pet::new("Kesha", "parrot", base_time()).unwrap();
    recent.age = 2;
    recent.last_updated = base_time() + Duration::days(3) - Duration::hours(2);
    JsonFileStore::new(&data_file)
        .save(&[earlier, recent.clone()])
        .unwrap();

    let later = base_time() + Duration::days(3);
    let manager = open_with_clock(JsonFileStore::new(&data_file), FixedClock(later));

    assert_eq!(manager.pet(0).unwrap().age, 8);
    assert_eq!(manager.pet(0).unwrap().last_updated, later);
    assert_eq!(manager.pet(1).unwrap(), &recent);
}

#[test]
fn test_double_save_only_moves_timestamps() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");
    let clock = SharedClock(Rc::new(Cell::new(base_time())));

    let mut manager = open_with_clock(JsonFileStore::new(&data_file), clock.clone());
    manager.add_pet("Barsik", "cat").unwrap();
    manager.add_pet("Rex", "dog").unwrap();

    manager.save();
    let first: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();

    clock.advance(Duration::minutes(10));
    manager.save();
    let second: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&data_file).unwrap()).unwrap();

    assert_ne!(first, second);

    let strip = |mut value: serde_json::Value| {
        for pet in value.as_array_mut().unwrap() {
            pet.as_object_mut().unwrap().remove("last_updated");
        }
        value
    };
    assert_eq!(strip(first), strip(second));
}

#[test]
fn test_malformed_file_starts_empty_and_logs() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");
    std::fs::write(&data_file, "[{\"name\": 12}]").unwrap();

    let mut manager = open_with_clock(JsonFileStore::new(&data_file), FixedClock(base_time()));

    assert!(manager.is_empty());
    assert_eq!(manager.log().messages().len(), 1);
    assert!(manager.log().messages()[0].starts_with("Failed to load pets: Serialization error"));

    // the next save replaces the broken file
    manager.add_pet("Rex", "dog").unwrap();
    let reloaded = JsonFileStore::new(&data_file).load().unwrap();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn test_blank_name_in_file_starts_empty() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");
    let saved = serde_json::json!([{
        "name": "",
        "species": "cat",
        "hunger": 50,
        "happiness": 50,
        "energy": 50,
        "age": 0,
        "last_updated": "2026-10-19T08:00:00"
    }]);
    std::fs::write(&data_file, saved.to_string()).unwrap();

    let manager = open_with_clock(JsonFileStore::new(&data_file), FixedClock(base_time()));

    assert!(manager.is_empty());
    assert_eq!(
        manager.log().messages(),
        ["Failed to load pets: Validation error: Name cannot be empty"]
    );
}

#[test]
fn test_activity_log_file_records_session() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("pets.json");
    let log_file = temp_dir.path().join("pet_log.txt");

    let mut manager = PetManager::open(
        JsonFileStore::new(&data_file),
        FileActivityLog::with_display(&log_file, Vec::new(), Box::new(FixedClock(base_time()))),
        // feed, then a birthday
        PetEngine::new(ScriptedDice::new(vec![3, 2])),
        Box::new(FixedClock(base_time())),
    );
    manager.add_pet("Murka", "cat").unwrap();
    manager.feed(0).unwrap();

    let content = std::fs::read_to_string(&log_file).unwrap();
    assert_eq!(
        content.lines().collect::<Vec<_>>(),
        [
            "[2026-10-19 20:00:00] Created new pet: Murka",
            "[2026-10-19 20:00:00] Murka is celebrating a birthday!",
            "[2026-10-19 20:00:00] Murka fed."
        ]
    );
}
