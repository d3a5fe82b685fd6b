use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::TestBackend};

use super::{App, UiOptions};
use crate::error::{LaunchError, SearchError};
use crate::systems::launch::Launcher;
use crate::systems::search::Searcher;
use crate::types::Match;

type Calls = Arc<Mutex<Vec<String>>>;

fn calc_results() -> Vec<Match> {
    vec![
        Match::application("Calculator", "/apps/calc", 10),
        Match::file("calc.txt", "/docs/calc.txt", 3),
    ]
}

fn numbered(count: usize) -> Vec<Match> {
    (0..count)
        .map(|index| Match::file(format!("item {index}"), format!("/items/{index}"), 0))
        .collect()
}

fn searcher() -> Arc<dyn Searcher> {
    Arc::new(|query: &str| -> Result<Vec<Match>, SearchError> {
        match query {
            "" => Ok(calc_results()),
            "boom" => Err(SearchError::rejected("index offline")),
            "item" => Ok(numbered(30)),
            _ => Ok(Vec::new()),
        }
    })
}

fn launcher(fail: bool) -> (Arc<dyn Launcher>, Calls) {
    let calls: Calls = Arc::default();
    let recorder = Arc::clone(&calls);
    let launcher: Arc<dyn Launcher> = Arc::new(move |path: &str| -> Result<(), LaunchError> {
        recorder.lock().unwrap().push(path.to_string());
        if fail {
            Err(LaunchError::Unsupported(path.to_string()))
        } else {
            Ok(())
        }
    });
    (launcher, calls)
}

/// Launcher that blocks until the returned sender releases it.
fn gated_launcher() -> (Arc<dyn Launcher>, mpsc::Sender<()>) {
    let (release_tx, release_rx) = mpsc::channel::<()>();
    let gate = Mutex::new(release_rx);
    let launcher: Arc<dyn Launcher> = Arc::new(move |_: &str| -> Result<(), LaunchError> {
        let _ = gate.lock().unwrap().recv();
        Ok(())
    });
    (launcher, release_tx)
}

fn shown_app(fail_launches: bool) -> (App<'static>, Calls) {
    let (launcher, calls) = launcher(fail_launches);
    let mut app = App::new(searcher(), launcher);
    app.show();
    settle(&mut app);
    (app, calls)
}

fn settle(app: &mut App<'_>) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        app.pump();
        if !app.is_busy() || Instant::now() > deadline {
            break;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

fn press(app: &mut App<'_>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<'_>, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
    settle(app);
}

fn render(app: &mut App<'_>, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().to_string()
}

#[test]
fn startup_shows_common_items_with_first_selected() {
    let (mut app, _) = shown_app(false);

    let view = render(&mut app, 60, 10);

    assert_eq!(app.controller().selected_index(), Some(0));
    assert!(view.contains("▶ Calculator"), "{view}");
    assert!(view.contains("calc.txt"), "{view}");
    assert!(!view.contains("No results found"), "{view}");
}

#[test]
fn arrow_down_moves_highlight() {
    let (mut app, _) = shown_app(false);
    render(&mut app, 60, 10);

    press(&mut app, KeyCode::Down);
    let view = render(&mut app, 60, 10);

    assert_eq!(app.controller().selected_index(), Some(1));
    assert!(view.contains("▶ calc.txt"), "{view}");
    assert!(!view.contains("▶ Calculator"), "{view}");
}

#[test]
fn enter_launches_selection_then_hides() {
    let (mut app, calls) = shown_app(false);
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    assert_eq!(*calls.lock().unwrap(), vec!["/docs/calc.txt".to_string()]);
    assert!(!app.is_visible());
    assert_eq!(app.outcome().launched.as_deref(), Some("/docs/calc.txt"));
}

#[test]
fn failed_launch_keeps_overlay_open() {
    let (mut app, calls) = shown_app(true);

    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(app.is_visible());
    assert_eq!(app.controller().selected_index(), Some(0));
    let view = render(&mut app, 80, 10);
    assert!(view.contains("Could not open /apps/calc"), "{view}");
}

#[test]
fn unmatched_query_shows_empty_state() {
    let (mut app, _) = shown_app(false);

    type_text(&mut app, "xyz123nomatch");
    let view = render(&mut app, 60, 10);

    assert_eq!(app.controller().query(), "xyz123nomatch");
    assert_eq!(app.controller().selected_index(), None);
    assert!(view.contains("No results found"), "{view}");
    assert!(!view.contains('▶'), "{view}");
}

#[test]
fn enter_on_empty_results_launches_nothing() {
    let (mut app, calls) = shown_app(false);
    type_text(&mut app, "xyz");

    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    assert!(calls.lock().unwrap().is_empty());
    assert!(app.is_visible());
}

#[test]
fn search_failure_renders_error() {
    let (mut app, _) = shown_app(false);

    type_text(&mut app, "boom");
    let view = render(&mut app, 60, 10);

    assert!(view.contains("Error: index offline"), "{view}");
    assert!(app.is_visible());
}

#[test]
fn escape_hides_and_keeps_session() {
    let (mut app, calls) = shown_app(false);
    type_text(&mut app, "xyz");

    press(&mut app, KeyCode::Esc);
    assert!(!app.is_visible());
    assert!(calls.lock().unwrap().is_empty());

    app.show();
    assert!(app.is_visible());
    assert_eq!(app.controller().query(), "xyz");
    assert_eq!(app.search_input.text(), "xyz");
}

#[test]
fn reset_on_show_starts_fresh_session() {
    let (launcher, _) = launcher(false);
    let mut app = App::new(searcher(), launcher).with_options(UiOptions {
        reset_on_show: true,
        ..UiOptions::default()
    });
    app.show();
    settle(&mut app);
    type_text(&mut app, "xyz");
    press(&mut app, KeyCode::Esc);

    app.show();
    settle(&mut app);

    assert_eq!(app.controller().query(), "");
    assert_eq!(app.search_input.text(), "");
    assert_eq!(app.controller().results().len(), 2);
}

#[test]
fn clicking_a_row_launches_it() {
    let (mut app, calls) = shown_app(false);
    render(&mut app, 60, 10);
    let area = app.results_area;

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: area.x + 4,
        row: area.y + 1,
        modifiers: KeyModifiers::NONE,
    });
    settle(&mut app);

    assert_eq!(*calls.lock().unwrap(), vec!["/docs/calc.txt".to_string()]);
    assert!(!app.is_visible());
}

#[test]
fn clicks_outside_rows_are_ignored() {
    let (mut app, calls) = shown_app(false);
    render(&mut app, 60, 10);
    let area = app.results_area;

    assert_eq!(app.row_at(area.x, area.y + 5), None);
    assert_eq!(app.row_at(area.x, area.y.saturating_sub(1)), None);
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn navigation_scrolls_selected_row_into_view() {
    let (mut app, _) = shown_app(false);
    type_text(&mut app, "item");
    render(&mut app, 60, 10);
    let viewport = app.viewport_rows();
    assert_eq!(viewport, 7);

    for _ in 0..10 {
        press(&mut app, KeyCode::Down);
    }
    let view = render(&mut app, 60, 10);

    assert_eq!(app.controller().selected_index(), Some(10));
    assert_eq!(app.scroll_offset, 10 + 1 - viewport);
    assert!(view.contains("▶ item 10"), "{view}");

    for _ in 0..8 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(app.controller().selected_index(), Some(2));
    assert_eq!(app.scroll_offset, 2);
}

#[test]
fn arrows_do_not_reach_the_input() {
    let (mut app, _) = shown_app(false);
    type_text(&mut app, "ab");

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Down);

    assert_eq!(app.search_input.text(), "ab");
    assert_eq!(app.controller().query(), "ab");
}

#[test]
fn initial_query_is_searched_and_prefilled() {
    let (launcher, _) = launcher(false);
    let mut app = App::new(searcher(), launcher).with_initial_query("item");
    app.show();
    settle(&mut app);

    assert_eq!(app.search_input.text(), "item");
    assert_eq!(app.controller().results().len(), 30);
}

#[test]
fn launch_finishing_after_dismiss_does_not_close_next_session() {
    let (launcher, release) = gated_launcher();
    let mut app = App::new(searcher(), launcher);
    app.show();
    settle(&mut app);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_visible());
    assert_eq!(app.outcome().launched, None);

    release.send(()).unwrap();
    app.show();
    settle(&mut app);

    assert!(!app.is_busy());
    assert!(app.is_visible());
    assert_eq!(app.outcome().launched, None);
    assert_eq!(app.controller().launching(), None);
    assert_eq!(app.controller().notice(), None);
}

#[test]
fn status_tracks_newest_launch_of_current_session() {
    let (launcher, release) = gated_launcher();
    let mut app = App::new(searcher(), launcher);
    app.show();
    settle(&mut app);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.opening(), Some("/docs/calc.txt"));
    let view = render(&mut app, 80, 10);
    assert!(view.contains("Opening /docs/calc.txt"), "{view}");

    press(&mut app, KeyCode::Esc);
    app.show();
    assert_eq!(app.opening(), None);
    let view = render(&mut app, 80, 10);
    assert!(!view.contains("Opening"), "{view}");

    release.send(()).unwrap();
    release.send(()).unwrap();
    settle(&mut app);
    assert!(app.is_visible());
}
