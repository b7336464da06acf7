//! End-to-end session tests against the public API

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use wordle_session::{
    config::EngineConfig,
    core::{Board, Color, MAX_ROUNDS},
    error::SessionError,
    session::{GameState, PlayOutcome, SessionEngine, UserId},
    store::{JsonFileStore, MemoryStore, SessionStore},
    wordlists::Dictionary,
};

const WORDS: &[&str] = &[
    "crane", "solar", "tower", "slate", "brain", "plant", "ghost", "mound", "fjord",
];

fn config() -> EngineConfig {
    EngineConfig::new(Dictionary::from_strs(WORDS).unwrap())
}

fn memory_engine() -> SessionEngine<MemoryStore> {
    SessionEngine::with_seed(config(), MemoryStore::new(), 42)
}

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("wordle_session_it_{}_{name}", std::process::id()))
        .join("sessions.json")
}

fn cleanup(path: &Path) {
    if let Some(dir) = path.parent() {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn full_game_from_first_guess_to_win() {
    let engine = memory_engine();
    let user = UserId::new("alice");

    // No game yet
    assert!(matches!(
        engine.submit_guess(&user, "crane"),
        Err(SessionError::NoActiveSession(_))
    ));

    let session = engine.start_with_answer(&user, "CRANE").unwrap();
    assert_eq!(session.round(), 0);
    assert_eq!(engine.render_current(&user).unwrap(), Board::empty());

    let turn = engine.submit_guess(&user, "solar").unwrap();
    assert_eq!(turn.state, GameState::InProgress);
    let colors: Vec<Color> = turn.board.rows()[0].iter().map(|c| c.color).collect();
    assert_eq!(
        colors,
        [
            Color::Absent,
            Color::Absent,
            Color::Absent,
            Color::Present,
            Color::Present
        ]
    );

    let turn = engine.submit_guess(&user, "Crane").unwrap();
    assert_eq!(turn.state, GameState::Won);
    assert_eq!(engine.render_current(&user).unwrap(), turn.board);

    let latest = engine.current(&user).unwrap().unwrap();
    assert_eq!(latest.win_round(), Some(2));
    assert!(matches!(
        engine.submit_guess(&user, "tower"),
        Err(SessionError::SessionTerminal {
            state: GameState::Won
        })
    ));

    let stats = engine.stats(&user).unwrap();
    assert_eq!(stats.played, 1);
    assert_eq!(stats.won, 1);
    assert_eq!(stats.distribution[1], 1);
}

#[test]
fn five_misses_lose_the_game() {
    let engine = memory_engine();
    let user = UserId::new("bob");
    engine.start_with_answer(&user, "fjord").unwrap();

    let misses = ["crane", "solar", "tower", "slate", "brain"];
    for (i, word) in misses.iter().enumerate() {
        let turn = engine.submit_guess(&user, word).unwrap();
        let expected = if i + 1 == MAX_ROUNDS {
            GameState::Lost
        } else {
            GameState::InProgress
        };
        assert_eq!(turn.state, expected);
    }

    let session = engine.current(&user).unwrap().unwrap();
    assert_eq!(session.round(), 5);
    assert_eq!(session.win_round(), None);
    assert_eq!(engine.stats(&user).unwrap().lost, 1);
}

#[test]
fn rejected_guesses_never_consume_rounds() {
    let engine = memory_engine();
    let user = UserId::new("carol");
    engine.start_with_answer(&user, "crane").unwrap();

    for bad in ["", "cran", "cranes", "cr4ne", "zzzzz"] {
        let err = engine.submit_guess(&user, bad).unwrap_err();
        assert!(err.is_rejected_input(), "{bad}: {err}");
    }
    assert_eq!(engine.current(&user).unwrap().unwrap().round(), 0);
}

#[test]
fn users_are_isolated() {
    let engine = memory_engine();
    let alice = UserId::new("alice");
    let bob = UserId::new("bob");

    engine.start_with_answer(&alice, "crane").unwrap();
    engine.start_with_answer(&bob, "tower").unwrap();
    engine.submit_guess(&alice, "crane").unwrap();

    let bob_session = engine.current(&bob).unwrap().unwrap();
    assert_eq!(bob_session.round(), 0);
    assert_eq!(bob_session.state(), GameState::InProgress);
    assert_eq!(engine.stats(&bob).unwrap().played, 0);
}

#[test]
fn play_after_game_over_starts_fresh_and_discards_guess() {
    let engine = memory_engine();
    let user = UserId::new("dave");
    let first = engine.start_with_answer(&user, "crane").unwrap();
    engine.submit_guess(&user, "crane").unwrap();

    let outcome = engine.play(&user, "solar").unwrap();
    assert_eq!(outcome, PlayOutcome::NewGame(Board::empty()));

    let latest = engine.current(&user).unwrap().unwrap();
    assert!(latest.id() > first.id());
    assert_eq!(latest.round(), 0);
}

#[test]
fn same_user_concurrent_guesses_are_serialized() {
    let engine = Arc::new(memory_engine());
    let user = UserId::new("racer");
    engine.start_with_answer(&user, "fjord").unwrap();

    let guesses = ["crane", "solar", "tower", "slate", "brain", "plant", "ghost", "mound"];
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = guesses
            .iter()
            .map(|word| {
                let engine = Arc::clone(&engine);
                let user = user.clone();
                scope.spawn(move || engine.submit_guess(&user, word))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let accepted = results.iter().filter(|r| r.is_ok()).count();
    let terminal = results
        .iter()
        .filter(|r| matches!(r, Err(SessionError::SessionTerminal { .. })))
        .count();
    assert_eq!(accepted, MAX_ROUNDS);
    assert_eq!(terminal, guesses.len() - MAX_ROUNDS);

    let session = engine.current(&user).unwrap().unwrap();
    assert_eq!(usize::from(session.round()), accepted);
    assert_eq!(session.state(), GameState::Lost);
    let rounds: Vec<u8> = session.guesses().iter().map(|g| g.round).collect();
    assert_eq!(rounds, [1, 2, 3, 4, 5]);
}

#[test]
fn json_store_survives_restart() {
    let path = scratch_path("restart");
    cleanup(&path);
    let user = UserId::new("erin");

    {
        let store = JsonFileStore::open(&path).unwrap();
        let engine = SessionEngine::with_seed(config(), store, 1);
        engine.start_with_answer(&user, "plant").unwrap();
        engine.submit_guess(&user, "slate").unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let engine = SessionEngine::with_seed(config(), store, 2);

    let session = engine.current(&user).unwrap().unwrap();
    assert_eq!(session.round(), 1);
    assert_eq!(session.answer().text(), "PLANT");

    let before = engine.render_current(&user).unwrap();
    let turn = engine.submit_guess(&user, "plant").unwrap();
    assert_eq!(turn.state, GameState::Won);
    assert_eq!(turn.board.rows()[0], before.rows()[0]);

    // A fresh game after restart must not reuse an id
    let next = engine.start_new(&user).unwrap();
    assert!(next.id() > session.id());
    assert_eq!(engine.store().sessions_for_user(&user).unwrap().len(), 2);

    cleanup(&path);
}

#[test]
fn resume_keeps_game_with_guesses() {
    let engine = memory_engine();
    let user = UserId::new("frank");

    let (first, board) = engine.resume(&user).unwrap();
    assert_eq!(board, Board::empty());

    // An untouched game is replaced on the next page load
    let (second, _) = engine.resume(&user).unwrap();
    assert!(second.id() > first.id());

    engine.start_with_answer(&user, "ghost").unwrap();
    engine.submit_guess(&user, "mound").unwrap();
    let (resumed, board) = engine.resume(&user).unwrap();
    assert_eq!(resumed.round(), 1);
    assert_eq!(board.played_rows().count(), 1);
}

#[test]
fn forced_answer_survives_page_load_and_restart() {
    let path = scratch_path("practice");
    cleanup(&path);
    let user = UserId::new("grace");

    {
        let engine = SessionEngine::with_seed(config(), JsonFileStore::open(&path).unwrap(), 3);
        engine.start_with_answer(&user, "ghost").unwrap();
    }

    let engine = SessionEngine::with_seed(config(), JsonFileStore::open(&path).unwrap(), 4);
    let (session, _) = engine.resume(&user).unwrap();
    assert!(session.is_practice());
    assert_eq!(session.answer().text(), "GHOST");

    let turn = engine.submit_guess(&user, "ghost").unwrap();
    assert_eq!(turn.state, GameState::Won);

    cleanup(&path);
}
