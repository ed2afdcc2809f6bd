//! Full-screen rendering tests

use super::*;
use crate::test_utils::TestTerminal;
use iguide_app::handler::update;
use iguide_app::Message;
use iguide_core::TargetOs;

/// Tall enough to show the whole page without scrolling
fn full_page_terminal() -> TestTerminal {
    TestTerminal::with_size(100, 400)
}

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

#[test]
fn test_page_contains_declared_commands() {
    let mut term = full_page_terminal();
    let mut state = AppState::new();
    draw(&mut term, &mut state);

    for command in state.document().commands() {
        assert!(term.buffer_contains(command), "missing {:?}", command);
    }
    assert!(term.buffer_contains("pip install insight-cli-sarang"));
    assert!(term.buffer_contains("insight-cli-sarang --version"));
    assert!(term.buffer_contains("(venv) $ pip install insight-cli-sarang"));
}

#[test]
fn test_activation_command_follows_os() {
    let mut term = full_page_terminal();
    let mut state = AppState::new();

    draw(&mut term, &mut state);
    assert!(term.buffer_contains("source venv/bin/activate"));
    assert!(!term.buffer_contains(r"venv\Scripts\activate"));

    update(&mut state, Message::SelectOs(TargetOs::Windows));
    draw(&mut term, &mut state);
    assert!(term.buffer_contains(r"venv\Scripts\activate"));
    assert!(!term.buffer_contains("source venv/bin/activate"));
}

#[test]
fn test_windows_note_only_on_windows() {
    let mut term = full_page_terminal();
    let mut state = AppState::new();

    draw(&mut term, &mut state);
    assert!(!term.buffer_contains("Windows: set GOOGLE_API_KEY=your-api-key-here"));

    update(&mut state, Message::SelectOs(TargetOs::Windows));
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Windows: set GOOGLE_API_KEY=your-api-key-here"));
}

#[test]
fn test_toggle_round_trip_restores_screen() {
    let mut term = full_page_terminal();
    let mut state = AppState::new();

    draw(&mut term, &mut state);
    let before = term.content();

    update(&mut state, Message::SelectOs(TargetOs::Windows));
    draw(&mut term, &mut state);
    assert_ne!(term.content(), before);

    update(&mut state, Message::SelectOs(TargetOs::Unix));
    draw(&mut term, &mut state);
    assert_eq!(term.content(), before);
}

#[test]
fn test_view_reports_page_size() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    draw(&mut term, &mut state);

    // 24 rows - header (3) - status bar (1)
    assert_eq!(state.page_view_state.visible_lines, 20);
    assert!(state.page_view_state.total_lines > 20);
}

#[test]
fn test_focus_scrolls_page() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();
    draw(&mut term, &mut state);
    assert_eq!(state.page_view_state.offset, 0);

    update(&mut state, Message::FocusPrevious);
    draw(&mut term, &mut state);

    assert!(state.page_view_state.offset > 0);
    assert!(term.buffer_contains("insight-cli-sarang --help"));
}

#[test]
fn test_copied_flash_in_status_bar() {
    let mut term = TestTerminal::new();
    let mut state = AppState::new();

    update(
        &mut state,
        Message::CopySucceeded {
            key: "quickstart-install".into(),
        },
    );
    draw(&mut term, &mut state);

    assert!(term.line_contains(23, "Copied!"));
}

#[test]
fn test_compact_terminal_does_not_panic() {
    let mut term = TestTerminal::compact();
    let mut state = AppState::new();
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Insight CLI"));
}
