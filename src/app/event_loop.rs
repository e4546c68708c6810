//! Terminal session: load the file, then draw and read keys until quit.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::document::Document;
use crate::perf::Timer;

/// Quiet time a resize needs before it is applied.
const RESIZE_SETTLE: Duration = Duration::from_millis(100);

/// Longest wait for input; bounds how late a toast disappears.
const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy)]
struct PendingResize {
    size: (u16, u16),
    since: Instant,
}

/// Holds terminal resizes back until the size stops changing.
#[derive(Debug)]
pub(super) struct ResizeDebouncer {
    settle: Duration,
    pending: Option<PendingResize>,
}

impl ResizeDebouncer {
    pub(super) const fn new(settle: Duration) -> Self {
        Self {
            settle,
            pending: None,
        }
    }

    /// Record a resize. A newer one replaces it and restarts the wait.
    pub(super) const fn push(&mut self, width: u16, height: u16, at: Instant) {
        self.pending = Some(PendingResize {
            size: (width, height),
            since: at,
        });
    }

    /// Take the pending size once it has been stable for the settle time.
    pub(super) fn settled(&mut self, now: Instant) -> Option<(u16, u16)> {
        let pending = self.pending?;
        if now.saturating_duration_since(pending.since) < self.settle {
            return None;
        }
        self.pending = None;
        Some(pending.size)
    }

    /// Time left until the pending resize settles.
    pub(super) fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|pending| {
            self.settle
                .saturating_sub(now.saturating_duration_since(pending.since))
        })
    }
}

impl App {
    /// Load the file and run the viewer until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be set up or drawn to.
    /// An unreadable file is not an error: it opens as an empty document.
    pub fn run(&self) -> Result<()> {
        let (document, load_error) = {
            let _timer = Timer::start("document.load");
            Document::load_or_empty(&self.file_path)
        };

        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - fv requires an interactive terminal")?;
        let result = Self::session(&mut terminal, document, load_error);
        ratatui::restore();
        result
    }

    fn session(
        terminal: &mut DefaultTerminal,
        document: Document,
        load_error: Option<anyhow::Error>,
    ) -> Result<()> {
        let size = terminal.size().context("Failed to query terminal size")?;
        tracing::info!(
            lines = document.len(),
            width = size.width,
            height = size.height,
            "session start"
        );

        let mut model = Model::new(document, (size.width, size.height));
        if let Some(err) = load_error {
            model.show_toast(ToastLevel::Error, format!("{err:#}"));
        }
        Self::event_loop(terminal, &mut model)
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut resizes = ResizeDebouncer::new(RESIZE_SETTLE);
        let mut dirty = true;
        let mut frame: u64 = 0;

        while !model.should_quit {
            let now = Instant::now();
            dirty |= model.expire_toast(now);
            if let Some((width, height)) = resizes.settled(now) {
                dispatch(model, Message::Resize(width, height));
                dirty = true;
            }

            if dirty {
                frame += 1;
                Self::draw(terminal, model, frame)?;
                dirty = false;
            }

            let timeout = resizes.remaining(Instant::now()).unwrap_or(IDLE_POLL);
            if !event::poll(timeout).context("Failed to poll for input")? {
                continue;
            }
            // Everything already queued is applied before the next frame,
            // so a held-down key costs one draw per batch.
            loop {
                let event = event::read().context("Failed to read input")?;
                if let Some(msg) = Self::handle_event(&event, model, Instant::now(), &mut resizes)
                {
                    dispatch(model, msg);
                    dirty = true;
                }
                if model.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
        tracing::info!(frames = frame, "session end");
        Ok(())
    }

    fn draw(terminal: &mut DefaultTerminal, model: &Model, frame: u64) -> Result<()> {
        let _timer = Timer::start("frame.draw");
        terminal
            .draw(|f| Self::view(model, f))
            .context("Failed to draw frame")?;
        tracing::trace!(
            frame,
            top_line = model.top_line(),
            left_edge = model.left_edge(),
            "frame drawn"
        );
        Ok(())
    }
}

fn dispatch(model: &mut Model, msg: Message) {
    *model = update(std::mem::take(model), msg);
}
