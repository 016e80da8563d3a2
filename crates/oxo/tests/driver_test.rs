//! Tests for the text driver using in-memory input and output.

use std::io::Cursor;

use oxo::{Driver, MemoryStore, MenuChoice, PlayEnd, Session};
use oxo_tictactoe::{GameStatus, Mark, RandomOpponent, Square};

type TestDriver = Driver<MemoryStore, RandomOpponent, Cursor<Vec<u8>>, Vec<u8>>;

fn driver(store: MemoryStore, input: &str) -> TestDriver {
    let session = Session::new(store, RandomOpponent::seeded(5));
    Driver::new(session, Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(driver: TestDriver) -> String {
    String::from_utf8(driver.into_output()).expect("utf8 output")
}

fn squares(cells: &str) -> Vec<Square> {
    cells
        .chars()
        .map(|c| Square::try_from(c).expect("valid cell"))
        .collect()
}

#[test]
fn test_menu_reprompts_on_bad_choice() {
    let mut driver = driver(MemoryStore::new(), "7\nabc\n3\n");
    assert_eq!(driver.menu_choice().expect("io"), Some(MenuChoice::Help));

    let out = output(driver);
    assert_eq!(out.matches("Choose a number between 1 and 4").count(), 2);
    assert!(out.contains("Resume saved game"));
}

#[test]
fn test_menu_help_then_quit() {
    let mut driver = driver(MemoryStore::new(), "3\n4\n");
    driver.run_menu().expect("io");

    let out = output(driver);
    assert!(out.contains("shows this page"));
    assert!(out.ends_with("Goodbye...\n"));
}

#[test]
fn test_quit_with_save_stores_board() {
    let mut driver = driver(MemoryStore::new(), "5\nq\ny\n");
    assert_eq!(driver.play().expect("io"), PlayEnd::Quit);

    let saved = driver.session().store().saved().expect("saved").to_vec();
    assert_eq!(saved[4], Square::Occupied(Mark::X));
    assert_eq!(saved.len(), 9);

    let out = output(driver);
    assert!(out.contains("Opponent plays"));
    assert!(out.contains("Game saved."));
}

#[test]
fn test_quit_without_save_leaves_store_empty() {
    let mut driver = driver(MemoryStore::new(), "q\nn\n");
    assert_eq!(driver.play().expect("io"), PlayEnd::Quit);
    assert_eq!(driver.session().store().saved(), None);
}

#[test]
fn test_bad_cells_reprompt() {
    let mut driver = driver(MemoryStore::new(), "0\n10\nfoo\n1\n1\nq\nn\n");
    assert_eq!(driver.play().expect("io"), PlayEnd::Quit);
    assert_eq!(driver.session().board().count(Mark::X), 1);

    let out = output(driver);
    assert_eq!(out.matches("Choose a number between 1 and 9").count(), 3);
    assert_eq!(out.matches("Choose an empty cell").count(), 1);
}

#[test]
fn test_resume_plays_to_win() {
    let store = MemoryStore::with_saved(squares("XX OO    "));
    let mut driver = driver(store, "2\n3\n4\n");
    driver.run_menu().expect("io");

    assert_eq!(driver.session().status(), GameStatus::PlayerWon);
    let out = output(driver);
    assert!(out.contains("Winner is X"));
    assert!(out.ends_with("Goodbye...\n"));
}

#[test]
fn test_resume_without_save_says_so() {
    let mut driver = driver(MemoryStore::new(), "");
    driver.resume().expect("io");
    assert!(output(driver).contains("No saved game found"));
}

#[test]
fn test_restored_finished_game_is_announced() {
    let store = MemoryStore::with_saved(squares("XOXXOOOXX"));
    let mut driver = driver(store, "");
    driver.resume().expect("io");
    assert_eq!(
        driver.play().expect("io"),
        PlayEnd::Finished(GameStatus::Draw)
    );
    assert!(output(driver).contains("It's a draw!"));
}

#[test]
fn test_end_of_input_quits() {
    let mut driver = driver(MemoryStore::new(), "");
    assert_eq!(driver.play().expect("io"), PlayEnd::Quit);
    assert_eq!(driver.menu_choice().expect("io"), None);
}
