use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, TableTab, ViewOutcome};

/// Construct an [`App`] for the provided tables and run it to completion.
pub fn run(tables: Vec<TableTab>) -> Result<ViewOutcome> {
	let mut app = App::new(tables);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits with an outcome.
	///
	/// Input is read on a helper thread and handed over a channel; all view
	/// state is mutated on the calling thread.
	pub fn run(&mut self) -> Result<ViewOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<ViewOutcome> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(outcome);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		debug!("viewer exited: {result:?}");
		result
	}
}
