//! Interactive view.

mod input;
mod text;
mod view;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

pub use text::print_help;
use view::{Flow, View};

use crate::clipboard::Clipboard;
use crate::error::Error;
use crate::rand::RandomSource;
use crate::session::Session;
use crate::terminal::ScreenGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Run the view until the user quits. Generates once on open.
pub fn run<R: RandomSource, C: Clipboard>(session: Session<R, C>) -> Result<(), Error> {
    let mut view = View::new(session);
    view.session.generate();

    let mut screen = ScreenGuard::new()?;
    tracing::info!("view opened");
    text::draw(&view, Instant::now());

    loop {
        let mut dirty = view.tick(Instant::now());

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if view.handle_key(key, Instant::now()) == Flow::Quit {
                        break;
                    }
                    dirty = true;
                }
                Event::Resize(..) => dirty = true,
                _ => {}
            }
        }

        if dirty {
            text::draw(&view, Instant::now());
        }
    }

    screen.restore();
    tracing::info!("view closed");
    Ok(())
}
