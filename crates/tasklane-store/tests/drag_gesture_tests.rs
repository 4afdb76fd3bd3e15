use mockall::mock;
use tasklane_domain::{Board, ColumnId, Task, TaskId};
use tasklane_persistence::BoardRepository;
use tasklane_store::{BoardStore, DragController};

mock! {
    Repo {}
    impl BoardRepository for Repo {
        fn load(&self) -> Board;
        fn save(&self, board: &Board);
    }
}

/// notStarted: [T1, T2], inProgress: [T3], blocked and done empty.
fn fixture() -> (Board, TaskId, TaskId, TaskId) {
    let mut board = Board::new();
    let t1 = Task::new(ColumnId::NotStarted, "T1").unwrap();
    let t2 = Task::new(ColumnId::NotStarted, "T2").unwrap();
    let t3 = Task::new(ColumnId::InProgress, "T3").unwrap();
    let (id1, id2, id3) = (t1.id, t2.id, t3.id);
    board.upsert_task(t1);
    board.upsert_task(t2);
    board.upsert_task(t3);
    (board, id1, id2, id3)
}

fn open_store(board: Board, saves: impl Into<mockall::TimesRange>) -> BoardStore {
    let mut repo = MockRepo::new();
    repo.expect_load().return_once(move || board);
    repo.expect_save().times(saves).return_const(());
    BoardStore::open(Box::new(repo))
}

fn titles(board: &Board, column_id: ColumnId) -> Vec<String> {
    board
        .column(column_id)
        .tasks
        .iter()
        .map(|t| t.title.clone())
        .collect()
}

#[test]
fn drag_start_captures_the_active_task() {
    let (board, t1, _, _) = fixture();
    let store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    let active = controller.on_drag_start(&store, &t1.to_string());
    assert_eq!(active.unwrap().title, "T1");
    assert_eq!(controller.active_task_id(), Some(t1));
    assert_eq!(
        controller.active_source_column(),
        Some(ColumnId::NotStarted)
    );

    controller.clear_active();
    assert_eq!(controller.active_task_id(), None);
}

#[test]
fn drag_start_with_unknown_id_captures_nothing() {
    let (board, _, _, _) = fixture();
    let store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    assert!(controller
        .on_drag_start(&store, &uuid::Uuid::new_v4().to_string())
        .is_none());
    assert!(controller.on_drag_start(&store, "not-an-id").is_none());
    assert_eq!(controller.active_task_id(), None);
}

#[test]
fn drop_on_a_task_in_another_column_inserts_before_it() {
    let (board, t1, _, t3) = fixture();
    let mut store = open_store(board, 1..=1);
    let mut controller = DragController::new();

    controller.on_drag_start(&store, &t1.to_string());
    let board = controller.on_drag_end(&mut store, &t1.to_string(), Some(&t3.to_string()));

    assert_eq!(titles(&board, ColumnId::NotStarted), vec!["T2"]);
    assert_eq!(titles(&board, ColumnId::InProgress), vec!["T1", "T3"]);
    assert_eq!(board.task(t1).unwrap().column_id, ColumnId::InProgress);
    assert_eq!(controller.active_task_id(), None);
}

#[test]
fn drop_on_an_empty_column_appends() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 1..=1);
    let mut controller = DragController::new();

    controller.on_drag_start(&store, &t1.to_string());
    let board = controller.on_drag_end(&mut store, &t1.to_string(), Some("done"));

    assert_eq!(titles(&board, ColumnId::Done), vec!["T1"]);
    assert_eq!(board.task(t1).unwrap().column_id, ColumnId::Done);
}

#[test]
fn drop_on_a_populated_column_container_appends() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 1..=1);
    let mut controller = DragController::new();

    let board = controller.on_drag_end(&mut store, &t1.to_string(), Some("inProgress"));
    assert_eq!(titles(&board, ColumnId::InProgress), vec!["T3", "T1"]);
}

#[test]
fn same_column_drop_on_a_task_reorders_before_it() {
    let (board, t1, t2, _) = fixture();
    let mut store = open_store(board, 1..=1);
    let mut controller = DragController::new();

    // T2 hovered over T1: T2 lands immediately before T1
    let board = controller.on_drag_end(&mut store, &t2.to_string(), Some(&t1.to_string()));
    assert_eq!(titles(&board, ColumnId::NotStarted), vec!["T2", "T1"]);
}

#[test]
fn same_column_drop_on_the_column_moves_to_the_end() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 1..=1);
    let mut controller = DragController::new();

    let board = controller.on_drag_end(&mut store, &t1.to_string(), Some("notStarted"));
    assert_eq!(titles(&board, ColumnId::NotStarted), vec!["T2", "T1"]);
}

#[test]
fn drop_onto_itself_changes_nothing() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    let before = store.snapshot();
    let after = controller.on_drag_end(&mut store, &t1.to_string(), Some(&t1.to_string()));
    assert_eq!(*after, *before);
}

#[test]
fn cancelled_gesture_changes_nothing() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    controller.on_drag_start(&store, &t1.to_string());
    let before = store.snapshot();
    let after = controller.on_drag_end(&mut store, &t1.to_string(), None);

    assert_eq!(*after, *before);
    assert_eq!(controller.active_task_id(), None);
}

#[test]
fn unresolvable_target_is_a_silent_no_op() {
    let (board, t1, _, _) = fixture();
    let mut store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    let before = store.snapshot();
    let after = controller.on_drag_end(&mut store, &t1.to_string(), Some("sidebar"));
    assert_eq!(*after, *before);

    let after = controller.on_drag_end(
        &mut store,
        &t1.to_string(),
        Some(&uuid::Uuid::new_v4().to_string()),
    );
    assert_eq!(*after, *before);
}

#[test]
fn unknown_active_id_is_a_silent_no_op() {
    let (board, _, _, t3) = fixture();
    let mut store = open_store(board, 0..=0);
    let mut controller = DragController::new();

    let before = store.snapshot();
    let after = controller.on_drag_end(
        &mut store,
        &uuid::Uuid::new_v4().to_string(),
        Some(&t3.to_string()),
    );
    assert_eq!(*after, *before);

    let after = controller.on_drag_end(&mut store, "garbage", Some(&t3.to_string()));
    assert_eq!(*after, *before);
}

#[test]
fn membership_invariant_survives_a_gesture_sequence() {
    let (board, t1, t2, t3) = fixture();
    let mut store = open_store(board, 0..);
    let mut controller = DragController::new();

    controller.on_drag_end(&mut store, &t1.to_string(), Some(&t3.to_string()));
    controller.on_drag_end(&mut store, &t2.to_string(), Some("blocked"));
    controller.on_drag_end(&mut store, &t3.to_string(), Some("notStarted"));
    let board = controller.on_drag_end(&mut store, &t1.to_string(), Some(&t3.to_string()));

    let mut total = 0;
    for column in board.columns() {
        for task in &column.tasks {
            assert_eq!(task.column_id, column.id);
            total += 1;
        }
    }
    assert_eq!(total, 3);
}
