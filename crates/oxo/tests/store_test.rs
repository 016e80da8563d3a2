//! Tests for the file and SQLite stores.

use oxo::{BoardStore, FileStore, MemoryStore, RestoreOutcome, SavedGame, Session, SqliteStore};
use oxo_tictactoe::{Board, Mark, RandomOpponent, Square};
use tempfile::TempDir;

fn squares(cells: &str) -> Vec<Square> {
    cells
        .chars()
        .map(|c| Square::try_from(c).expect("valid cell"))
        .collect()
}

fn nine(cells: &str) -> [Square; 9] {
    squares(cells).try_into().expect("nine cells")
}

#[test]
fn test_memory_store_starts_empty() {
    let mut store = MemoryStore::new();
    assert_eq!(store.load().expect("load"), None);

    store.store(&nine("X   O    ")).expect("store");
    assert_eq!(store.load().expect("load"), Some(squares("X   O    ")));
}

#[test]
fn test_file_store_missing_file_is_no_data() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = FileStore::new(dir.path().join("absent.json"));
    assert_eq!(store.load().expect("load"), None);
}

#[test]
fn test_file_store_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("oxogame.json");
    let mut store = FileStore::new(&path);

    // Not a reachable position; stores must not care
    let cells = nine("XXXXOOOOO");
    store.store(&cells).expect("store");
    assert_eq!(store.load().expect("load"), Some(cells.to_vec()));

    let on_disk: SavedGame =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(on_disk.squares(), &cells.to_vec());
}

#[test]
fn test_file_store_overwrites_previous_save() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = FileStore::new(dir.path().join("oxogame.json"));

    store.store(&nine("X        ")).expect("first store");
    store.store(&nine("X O      ")).expect("second store");
    assert_eq!(store.load().expect("load"), Some(squares("X O      ")));
}

#[test]
fn test_file_store_malformed_file_is_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("oxogame.json");
    std::fs::write(&path, "not json").expect("write");

    let mut store = FileStore::new(&path);
    assert!(store.load().is_err());

    // The session absorbs the failure
    let mut session = Session::new(store, RandomOpponent::seeded(1));
    assert_eq!(session.restore(), RestoreOutcome::StartedFresh);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_file_store_short_save_restores_fresh() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("oxogame.json");
    std::fs::write(&path, r#"{"squares":["X","O","X"]}"#).expect("write");

    let mut store = FileStore::new(&path);
    assert_eq!(store.load().expect("load"), Some(squares("XOX")));

    let mut session = Session::new(store, RandomOpponent::seeded(1));
    assert_eq!(session.restore(), RestoreOutcome::StartedFresh);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_file_store_session_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("oxogame.json");

    let mut session = Session::new(FileStore::new(&path), RandomOpponent::seeded(8));
    session.player_move(4).expect("legal move");
    session.save().expect("save");
    let saved = session.board().clone();

    let mut resumed = Session::new(FileStore::new(&path), RandomOpponent::seeded(9));
    assert_eq!(resumed.restore(), RestoreOutcome::Restored);
    assert_eq!(resumed.board(), &saved);
    assert_eq!(resumed.board().count(Mark::X), 1);
}

#[test]
fn test_sqlite_store_empty_database_is_no_data() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = SqliteStore::new(dir.path().join("oxo.db").display().to_string());
    assert_eq!(store.load().expect("load"), None);
    assert_eq!(store.save_count().expect("count"), 0);
}

#[test]
fn test_sqlite_store_returns_newest_save() {
    let dir = TempDir::new().expect("temp dir");
    let mut store = SqliteStore::new(dir.path().join("oxo.db").display().to_string());

    store.store(&nine("X   O    ")).expect("first store");
    store.store(&nine("X   O   X")).expect("second store");

    assert_eq!(store.save_count().expect("count"), 2);
    assert_eq!(store.load().expect("load"), Some(squares("X   O   X")));
}

#[test]
fn test_sqlite_store_session_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("oxo.db").display().to_string();

    let cells = squares("OOOOOOOOO");
    let mut session = Session::new(
        MemoryStore::with_saved(cells.clone()),
        RandomOpponent::seeded(3),
    );
    session.restore();

    let mut sqlite = SqliteStore::new(db_path.clone());
    sqlite.store(session.board().squares()).expect("store");

    let mut resumed = Session::new(SqliteStore::new(db_path), RandomOpponent::seeded(4));
    assert_eq!(resumed.restore(), RestoreOutcome::Restored);
    assert_eq!(resumed.board().squares().to_vec(), cells);
}
