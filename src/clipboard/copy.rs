//! Copy controller: at most one copy per cooldown window.

use std::time::{Duration, Instant};

use zeroize::Zeroize;

use super::Clipboard;

pub const COOLDOWN: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Cooldown { until: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    AlreadyCopied,
    /// Request arrived during cooldown. Nothing was read or written.
    Ignored,
}

impl CopyOutcome {
    pub fn message(self) -> Option<&'static str> {
        match self {
            CopyOutcome::Copied => Some("Copied!"),
            CopyOutcome::AlreadyCopied => Some("Already copied!"),
            CopyOutcome::Ignored => None,
        }
    }
}

#[derive(Debug)]
pub struct CopyController {
    state: CopyState,
    status: Option<&'static str>,
}

impl CopyController {
    pub fn new() -> Self {
        Self {
            state: CopyState::Idle,
            status: None,
        }
    }

    /// Last status message, kept after the cooldown ends.
    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    pub fn is_cooling_down(&self, now: Instant) -> bool {
        matches!(self.state, CopyState::Cooldown { until } if now < until)
    }

    /// Leave cooldown once its deadline has passed. Returns true on that
    /// transition.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            CopyState::Cooldown { until } if now >= until => {
                self.state = CopyState::Idle;
                tracing::debug!("copy cooldown over");
                true
            }
            _ => false,
        }
    }

    /// Copy `password` unless it is already on the clipboard.
    ///
    /// Clipboard failures are logged and fall through to "Copied!".
    pub fn request<C: Clipboard + ?Sized>(
        &mut self,
        password: &str,
        clipboard: &mut C,
        now: Instant,
    ) -> CopyOutcome {
        self.tick(now);
        if self.is_cooling_down(now) {
            tracing::debug!("copy ignored during cooldown");
            return CopyOutcome::Ignored;
        }

        let outcome = match clipboard.read_text() {
            Ok(mut current) => {
                let same = current == password;
                current.zeroize();
                if same {
                    CopyOutcome::AlreadyCopied
                } else {
                    write(password, clipboard)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard read failed, writing anyway");
                write(password, clipboard)
            }
        };

        self.status = outcome.message();
        self.state = CopyState::Cooldown {
            until: now + COOLDOWN,
        };
        tracing::info!(?outcome, "copy handled");
        outcome
    }
}

impl Default for CopyController {
    fn default() -> Self {
        Self::new()
    }
}

fn write<C: Clipboard + ?Sized>(password: &str, clipboard: &mut C) -> CopyOutcome {
    if let Err(e) = clipboard.write_text(password) {
        tracing::warn!(error = %e, "clipboard write failed");
    }
    CopyOutcome::Copied
}
