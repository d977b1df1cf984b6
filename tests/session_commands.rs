use egui::Pos2;
use shape_canvas::shape::factory;
use shape_canvas::state::{KeyValueStore, MemoryStorage, STORAGE_KEY, Session};
use shape_canvas::{Command, DisplayList, Outcome, ShapeAttrs, ShapeKind};

fn attrs(color: &str) -> ShapeAttrs {
    ShapeAttrs {
        radius: 15.0,
        width: 20.0,
        height: 30.0,
        color: color.to_owned(),
    }
}

fn place(kind: ShapeKind, x: f32, y: f32, color: &str) -> Command {
    Command::Place {
        kind,
        position: Pos2::new(x, y),
        attrs: attrs(color),
    }
}

// Helper to create a session with two shapes already drawn
fn create_test_session(storage: &mut MemoryStorage) -> Session {
    let mut session = Session::new();
    session.handle(place(ShapeKind::Circle, 100.0, 100.0, "blue"), storage);
    session.handle(place(ShapeKind::Rectangle, 50.0, 50.0, "green"), storage);
    session
}

#[test]
fn test_place_appends_exactly_one_shape() {
    let mut storage = MemoryStorage::new();
    let mut session = create_test_session(&mut storage);
    let before = session.store().len();

    let outcome = session.handle(place(ShapeKind::Triangle, 10.0, 20.0, "red"), &mut storage);

    let expected = factory::triangle(10.0, 20.0, 30.0, "red");
    assert_eq!(outcome, Outcome::Placed(expected.clone()));
    assert!(outcome.needs_redraw());
    assert_eq!(session.store().len(), before + 1);
    assert_eq!(session.store().last(), Some(&expected));
}

#[test]
fn test_undo_restores_previous_sequence() {
    let mut storage = MemoryStorage::new();
    let mut session = create_test_session(&mut storage);
    let before = session.store().clone();
    let persisted_before = storage.get_string(STORAGE_KEY);

    session.handle(place(ShapeKind::Circle, 1.0, 1.0, "red"), &mut storage);
    let outcome = session.handle(Command::Undo, &mut storage);

    assert_eq!(outcome, Outcome::Undone(Some(factory::circle(1.0, 1.0, 15.0, "red"))));
    assert_eq!(session.store(), &before);
    assert_eq!(storage.get_string(STORAGE_KEY), persisted_before);
}

#[test]
fn test_undo_on_empty_store_is_noop() {
    let mut storage = MemoryStorage::new();
    let mut session = Session::new();

    assert_eq!(session.handle(Command::Undo, &mut storage), Outcome::Undone(None));
    assert!(session.store().is_empty());
}

#[test]
fn test_clear_twice_stays_empty_and_paints_nothing() {
    let mut storage = MemoryStorage::new();
    let mut session = create_test_session(&mut storage);

    assert_eq!(session.handle(Command::Clear, &mut storage), Outcome::Cleared);
    assert!(session.store().is_empty());
    assert_eq!(session.handle(Command::Clear, &mut storage), Outcome::Cleared);
    assert!(session.store().is_empty());

    let mut surface = DisplayList::new();
    let summary = session.redraw(&mut surface);
    assert_eq!(summary.painted, 0);
    assert!(!surface.has_paint());
    assert_eq!(storage.get_string(STORAGE_KEY).as_deref(), Some("[]"));
}

#[test]
fn test_every_mutation_is_persisted() {
    let mut storage = MemoryStorage::new();
    let mut session = Session::new();

    session.handle(place(ShapeKind::Circle, 1.0, 1.0, "red"), &mut storage);
    assert_eq!(Session::load_from_persistence(&storage).store(), session.store());

    session.handle(place(ShapeKind::Triangle, 2.0, 2.0, "blue"), &mut storage);
    assert_eq!(Session::load_from_persistence(&storage).store(), session.store());

    session.handle(Command::Undo, &mut storage);
    assert_eq!(Session::load_from_persistence(&storage).store(), session.store());

    session.handle(Command::Clear, &mut storage);
    assert!(Session::load_from_persistence(&storage).store().is_empty());

    assert_eq!(storage.flush_count(), 4);
}

#[test]
fn test_reload_redraws_the_same_pixels() {
    let mut storage = MemoryStorage::new();
    let session = create_test_session(&mut storage);

    let reloaded = Session::from_persisted(storage.get_string(STORAGE_KEY).as_deref());

    let mut direct = DisplayList::new();
    let mut restored = DisplayList::new();
    session.redraw(&mut direct);
    reloaded.redraw(&mut restored);
    assert_eq!(reloaded.store().len(), 2);
    assert_eq!(restored.frame(), direct.frame());
}

#[test]
fn test_select_kind_changes_selection_only() {
    let mut storage = MemoryStorage::new();
    let mut session = create_test_session(&mut storage);
    let store = session.store().clone();

    assert_eq!(session.selected_kind(), ShapeKind::Circle);
    session.handle(Command::SelectKind(ShapeKind::Rectangle), &mut storage);

    assert_eq!(session.selected_kind(), ShapeKind::Rectangle);
    assert_eq!(session.store(), &store);
}

#[test]
fn test_out_of_range_state_does_not_block_later_saves() {
    let mut storage = MemoryStorage::new();
    storage.set_string(
        STORAGE_KEY,
        r#"[{"kind":"circle","x":1e39,"y":1,"radius":2,"color":"red"}]"#.to_owned(),
    );
    let mut session = Session::load_from_persistence(&storage);
    assert!(session.store().is_empty());

    session.handle(place(ShapeKind::Circle, 5.0, 5.0, "blue"), &mut storage);

    let reloaded = Session::load_from_persistence(&storage);
    assert_eq!(reloaded.store(), session.store());
    assert_eq!(reloaded.store().len(), 1);
}

#[test]
fn test_startup_with_garbage_state_is_empty() {
    let mut storage = MemoryStorage::new();
    storage.set_string(STORAGE_KEY, "{{{".to_owned());

    let session = Session::load_from_persistence(&storage);

    assert!(session.store().is_empty());
    assert_eq!(session.selected_kind(), ShapeKind::Circle);
}
