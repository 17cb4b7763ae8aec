use super::*;
use crate::app::reducer;
use crate::app::state::AppMode;
use crate::domain::clipboard::MockClipboardWriter;
use crate::domain::models::Palette;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn category_keys() -> Vec<String> {
    ["sunset", "ocean", "forest", "pastel", "vibrant", "cool"]
        .iter()
        .map(|k| (*k).to_string())
        .collect()
}

fn ocean_palettes() -> Vec<Palette> {
    vec![
        Palette::named(
            "Deep Current",
            vec![
                "#013A63".into(),
                "#01497C".into(),
                "#2A6F97".into(),
                "#61A5C2".into(),
                "#A9D6E5".into(),
            ],
        ),
        Palette::named(
            "Coral Shallows",
            vec![
                "#006D77".into(),
                "#83C5BE".into(),
                "#EDF6F9".into(),
                "#FFDDD2".into(),
                "#E29578".into(),
            ],
        ),
    ]
}

fn mock_clipboard() -> Arc<MockClipboardWriter> {
    Arc::new(MockClipboardWriter::new())
}

#[tokio::test]
async fn test_search_matches_case_insensitively() {
    let mut source = crate::domain::source::MockPaletteSource::new();
    source.expect_categories().returning(|| Ok(category_keys()));
    source
        .expect_palettes()
        .withf(|category| category == "ocean")
        .returning(|_| Ok(ocean_palettes()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search("OCEAN".to_string()),
        Arc::new(source),
        mock_clipboard(),
        tx,
    );

    let action = rx.recv().await.unwrap();
    match action {
        Action::SearchResolved(SearchOutcome::Matched { category, palettes }) => {
            assert_eq!(category, "ocean");
            assert_eq!(palettes, ocean_palettes());
        }
        other => panic!("Expected Matched, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_without_a_match_suggests_all_keys() {
    // No palettes expectation: a lookup on this path would fail the test.
    let mut source = crate::domain::source::MockPaletteSource::new();
    source.expect_categories().returning(|| Ok(category_keys()));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search("xyz".to_string()),
        Arc::new(source),
        mock_clipboard(),
        tx,
    );

    let action = rx.recv().await.unwrap();
    match action {
        Action::SearchResolved(SearchOutcome::NoMatch { query, suggestions }) => {
            assert_eq!(query, "xyz");
            assert_eq!(suggestions, category_keys());
        }
        other => panic!("Expected NoMatch, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_failure_propagates_as_outcome() {
    let mut source = crate::domain::source::MockPaletteSource::new();
    source
        .expect_categories()
        .returning(|| Err(anyhow::anyhow!("store exploded")));

    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Search("ocean".to_string()),
        Arc::new(source),
        mock_clipboard(),
        tx,
    );

    let action = rx.recv().await.unwrap();
    match action {
        Action::SearchResolved(SearchOutcome::Failure { message }) => {
            assert!(message.contains("store exploded"));
        }
        other => panic!("Expected Failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_full_search_error_to_state() {
    let mut source = crate::domain::source::MockPaletteSource::new();
    source.expect_categories().returning(|| Ok(category_keys()));
    source
        .expect_palettes()
        .returning(|_| Err(anyhow::anyhow!("lookup failed")));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();
    state.search.input.set_text("sunset");

    // 1. Submit: the reducer enters Loading and emits the command.
    let command = reducer::update(&mut state, Action::SubmitSearch).unwrap();
    assert_eq!(state.mode, AppMode::Loading);
    handle_command(command, Arc::new(source), mock_clipboard(), tx);

    // 2. Resolve: loading releases even on the failure path.
    let action = rx.recv().await.unwrap();
    reducer::update(&mut state, action);

    assert_eq!(state.mode, AppMode::Normal);
    assert_eq!(
        state.status.current().unwrap().text,
        crate::app::features::search::LOOKUP_FAILED_MSG
    );
    let error = state.last_error.as_ref().unwrap();
    assert!(error.detail.as_deref().unwrap().contains("lookup failed"));
}

#[tokio::test]
async fn test_empty_result_set_reports_no_results() {
    let mut source = crate::domain::source::MockPaletteSource::new();
    source.expect_categories().returning(|| Ok(category_keys()));
    source.expect_palettes().returning(|_| Ok(vec![]));

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = AppState::default();
    state.search.input.set_text("cool");

    let command = reducer::update(&mut state, Action::SubmitSearch).unwrap();
    handle_command(command, Arc::new(source), mock_clipboard(), tx);

    let action = rx.recv().await.unwrap();
    reducer::update(&mut state, action);

    assert_eq!(state.mode, AppMode::Normal);
    assert_eq!(
        state.status.current().unwrap().text,
        crate::app::features::search::EMPTY_RESULTS_MSG
    );
    assert!(state.results.is_empty());
}

#[tokio::test]
async fn test_copy_success_reaches_the_status_line() {
    let mut clipboard = MockClipboardWriter::new();
    clipboard
        .expect_set_text()
        .withf(|text| text == "#FF6B6B")
        .returning(|_| Ok(()));

    let source = Arc::new(crate::domain::source::MockPaletteSource::new());
    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Copy("#FF6B6B".to_string()),
        source,
        Arc::new(clipboard),
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CopyCompleted(Ok("#FF6B6B".to_string())));

    let mut state = AppState::default();
    reducer::update(&mut state, action);
    assert_eq!(
        state.status.current().unwrap().text,
        "Copied #FF6B6B to clipboard!"
    );
}

#[tokio::test]
async fn test_copy_failure_is_non_fatal() {
    let mut clipboard = MockClipboardWriter::new();
    clipboard
        .expect_set_text()
        .returning(|_| Err(anyhow::anyhow!("no display server")));

    let source = Arc::new(crate::domain::source::MockPaletteSource::new());
    let (tx, mut rx) = mpsc::channel(1);
    handle_command(
        Command::Copy("#FF6B6B".to_string()),
        source,
        Arc::new(clipboard),
        tx,
    );

    let action = rx.recv().await.unwrap();
    let mut state = AppState::default();
    state.results.show("sunset".to_string(), ocean_palettes());
    reducer::update(&mut state, action);

    // The failure is surfaced, the result set survives.
    let error = state.last_error.as_ref().unwrap();
    assert!(error.detail.as_deref().unwrap().contains("no display server"));
    assert!(!state.results.is_empty());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut source = crate::domain::source::MockPaletteSource::new();
    source.expect_categories().returning(|| Ok(category_keys()));
    source.expect_palettes().returning(|_| Ok(ocean_palettes()));

    let mut clipboard = MockClipboardWriter::new();
    clipboard.expect_set_text().returning(|_| Ok(()));

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Unwind any modal state, then quit.
        for code in [KeyCode::Esc, KeyCode::Esc, KeyCode::Char('q')] {
            let _ = event_tx
                .send(Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE))))
                .await;
        }
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(
            &mut terminal,
            app_state,
            Arc::new(source),
            Arc::new(clipboard),
            event_rx,
        ),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: crossterm::event::KeyModifiers::empty(),
    })
}
