//! Clipboard access and debounced copy.

mod copy;

use copypasta::{ClipboardContext, ClipboardProvider};

#[cfg(test)]
pub use copy::COOLDOWN;
pub use copy::{CopyController, CopyOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard read failed: {0}")]
    Read(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Host clipboard capability.
pub trait Clipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError>;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through copypasta. Construction never fails; a missing
/// clipboard (headless session, no display server) makes every call fail.
pub struct SystemClipboard {
    ctx: Result<ClipboardContext, String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let ctx = ClipboardContext::new().map_err(|e| e.to_string());
        if let Err(ref e) = ctx {
            tracing::warn!(error = %e, "system clipboard unavailable");
        }
        Self { ctx }
    }

    fn ctx(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        self.ctx
            .as_mut()
            .map_err(|e| ClipboardError::Unavailable(e.clone()))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.ctx()?
            .get_contents()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.ctx()?
            .set_contents(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard with switchable failures.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: String,
    pub fail_read: bool,
    pub fail_write: bool,
    pub reads: usize,
    pub writes: usize,
}

#[cfg(test)]
impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.reads += 1;
        if self.fail_read {
            return Err(ClipboardError::Read("permission denied".into()));
        }
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes += 1;
        if self.fail_write {
            return Err(ClipboardError::Write("permission denied".into()));
        }
        self.contents = text.to_owned();
        Ok(())
    }
}
