use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use super::{App, SessionOutcome};
use crate::logging;

const FRAME_DELAY: Duration = Duration::from_millis(16);
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Show the overlay for `app` until it is hidden again.
pub fn run(app: &mut App<'_>) -> Result<SessionOutcome> {
    app.run()
}

impl<'a> App<'a> {
    /// Show the overlay and pump the terminal event loop until it is hidden.
    ///
    /// State survives between calls, so the overlay can be shown again.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut terminal = ratatui::init();
        if let Err(err) = execute!(stdout(), EnableMouseCapture) {
            log::warn!("mouse capture unavailable: {err}");
        }
        terminal.clear()?;

        self.show();

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(POLL_TIMEOUT)? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<SessionOutcome> = 'event_loop: loop {
            self.pump();
            logging::pump();
            self.throbber_state.calc_next();

            loop {
                match event_rx.try_recv() {
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            while let Some(event) = pending_events.pop_front() {
                self.handle_event(event);
                if !self.is_visible() {
                    break;
                }
            }

            if !self.is_visible() {
                break Ok(self.outcome());
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            thread::sleep(FRAME_DELAY);
        };

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Apply everything the workers reported since the last frame.
    pub(crate) fn pump(&mut self) {
        self.pump_search_results();
        self.pump_launch_results();
    }

    pub(crate) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }
}
