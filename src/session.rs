//! Session state - bundles settings, current password, copy controller and
//! clipboard for one view.

use std::time::Instant;

use crate::clipboard::{Clipboard, CopyController, CopyOutcome};
use crate::pass::{self, CharacterClass, Password};
use crate::rand::RandomSource;
use crate::settings::Settings;

pub struct Session<R, C> {
    pub settings: Settings,
    password: Password,
    copy: CopyController,
    rng: R,
    clipboard: C,
}

impl<R: RandomSource, C: Clipboard> Session<R, C> {
    pub fn new(settings: Settings, rng: R, clipboard: C) -> Self {
        Self {
            settings,
            password: Password::default(),
            copy: CopyController::new(),
            rng,
            clipboard,
        }
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    #[cfg(test)]
    pub fn copy_controller(&self) -> &CopyController {
        &self.copy
    }

    pub fn toggle_class(&mut self, class: CharacterClass) {
        self.settings.toggle_class(class);
    }

    pub fn set_length(&mut self, requested: i64) {
        self.settings.set_length(requested);
    }

    pub fn step_length(&mut self, delta: i64) {
        self.settings.step_length(delta);
    }

    /// Replace the current password. Returns false, keeping the old one, when
    /// no class is enabled.
    pub fn generate(&mut self) -> bool {
        match pass::generate(
            &self.settings.options,
            self.settings.pass_length,
            &mut self.rng,
        ) {
            Some(password) => {
                tracing::debug!(length = password.len(), "password generated");
                self.password = password;
                true
            }
            None => {
                tracing::debug!("no classes enabled, keeping previous password");
                false
            }
        }
    }

    pub fn copy(&mut self, now: Instant) -> CopyOutcome {
        self.copy
            .request(self.password.as_str(), &mut self.clipboard, now)
    }

    /// Returns true when the cooldown just ended and the view should redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.copy.tick(now)
    }

    /// Status message during cooldown, the password otherwise.
    pub fn display_text(&self, now: Instant) -> &str {
        match self.copy.status() {
            Some(status) if self.copy.is_cooling_down(now) => status,
            _ => self.password.as_str(),
        }
    }

    #[cfg(test)]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clipboard::{COOLDOWN, MemoryClipboard};
    use crate::rand::Rand;

    fn session() -> Session<Rand, MemoryClipboard> {
        Session::new(Settings::default(), Rand::new(), MemoryClipboard::default())
    }

    #[test]
    fn default_session_generates_alphanumerics() {
        let mut s = session();
        s.set_length(12);
        assert!(s.generate());
        assert_eq!(s.password().len(), 12);
        assert!(
            s.password()
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
    }

    #[test]
    fn empty_selection_keeps_previous_password() {
        let mut s = session();
        assert!(s.generate());
        let before = s.password().clone();

        for class in CharacterClass::ALL {
            if s.settings.options.is_enabled(class) {
                s.toggle_class(class);
            }
        }

        assert!(!s.generate());
        assert_eq!(s.password(), &before);
    }

    #[test]
    fn new_length_applies_on_next_generate() {
        let mut s = session();
        s.generate();
        s.set_length(1000);
        assert_eq!(s.password().len(), 12);
        s.generate();
        assert_eq!(s.password().len(), 256);
    }

    #[test]
    fn copy_scenario() {
        let mut s = session();
        s.password = Password::from("Ab3");
        let t0 = Instant::now();

        assert_eq!(s.copy(t0), CopyOutcome::Copied);
        assert_eq!(s.clipboard().contents, "Ab3");
        assert_eq!(s.display_text(t0), "Copied!");

        let soon = t0 + Duration::from_millis(200);
        assert_eq!(s.copy(soon), CopyOutcome::Ignored);
        assert_eq!(s.display_text(soon), "Copied!");
        assert_eq!(s.clipboard().writes, 1);

        let later = t0 + COOLDOWN;
        assert_eq!(s.copy(later), CopyOutcome::AlreadyCopied);
        assert_eq!(s.clipboard().contents, "Ab3");
        assert_eq!(s.clipboard().writes, 1);
        assert_eq!(s.display_text(later), "Already copied!");
    }

    #[test]
    fn password_shows_again_after_cooldown() {
        let mut s = session();
        s.password = Password::from("Ab3");
        let t0 = Instant::now();
        s.copy(t0);

        let after = t0 + COOLDOWN;
        assert!(s.tick(after));
        assert_eq!(s.display_text(after), "Ab3");
    }
}
