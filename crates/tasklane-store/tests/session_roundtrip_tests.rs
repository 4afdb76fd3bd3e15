//! End-to-end session behavior against the real JSON file store: what one
//! session commits is exactly what the next session loads.

use tasklane_domain::{ColumnId, Subtask, Task};
use tasklane_persistence::JsonFileStore;
use tasklane_store::{BoardStore, DragController};
use tempfile::tempdir;

#[test]
fn first_session_starts_from_the_seed_board() {
    let dir = tempdir().unwrap();
    let store = BoardStore::open(Box::new(JsonFileStore::new(dir.path().join("tasklane.json"))));

    let titles: Vec<&str> = store
        .board()
        .column(ColumnId::NotStarted)
        .tasks
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Grocery Shopping", "Book Doctor Appointment"]);
}

#[test]
fn committed_state_survives_the_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasklane.json");

    let final_board = {
        let mut store = BoardStore::open(Box::new(JsonFileStore::new(&path)));
        let mut controller = DragController::new();

        let mut report = Task::new(ColumnId::NotStarted, "Write report").unwrap();
        report.set_description(Some("Quarterly numbers.".to_string()));
        report.add_subtask(Subtask::new("Collect figures").unwrap());
        let report_id = report.id;
        let subtask_id = report.subtasks[0].id;

        store.add_task(ColumnId::NotStarted, report);
        store.toggle_subtask(report_id, subtask_id);
        controller.on_drag_start(&store, &report_id.to_string());
        controller.on_drag_end(&mut store, &report_id.to_string(), Some("inProgress"));

        store.snapshot()
    };

    let reopened = BoardStore::open(Box::new(JsonFileStore::new(&path)));
    assert_eq!(reopened.board(), &*final_board);

    let report = reopened
        .board()
        .column(ColumnId::InProgress)
        .tasks
        .iter()
        .find(|t| t.title == "Write report")
        .expect("moved task should be in its new column");
    assert_eq!(report.column_id, ColumnId::InProgress);
    assert!(report.subtasks[0].completed);
}

#[test]
fn no_op_gestures_leave_the_stored_document_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tasklane.json");

    let mut store = BoardStore::open(Box::new(JsonFileStore::new(&path)));
    store.add_task(
        ColumnId::NotStarted,
        Task::new(ColumnId::NotStarted, "Anchor").unwrap(),
    );
    let stored_before = std::fs::read_to_string(&path).unwrap();

    let first_id = store.board().column(ColumnId::NotStarted).tasks[0].id;
    let mut controller = DragController::new();
    controller.on_drag_end(&mut store, &first_id.to_string(), None);
    controller.on_drag_end(&mut store, &first_id.to_string(), Some("nowhere"));

    let stored_after = std::fs::read_to_string(&path).unwrap();
    assert_eq!(stored_after, stored_before);
}
