//! View state and key dispatch.

use std::time::Instant;

use crossterm::event::KeyEvent;

use super::input::{Action, EditOutcome, LengthEditor, action_for};
use crate::clipboard::Clipboard;
use crate::rand::RandomSource;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct View<R, C> {
    pub session: Session<R, C>,
    pub editor: Option<LengthEditor>,
    pub show_help: bool,
}

impl<R: RandomSource, C: Clipboard> View<R, C> {
    pub fn new(session: Session<R, C>) -> Self {
        Self {
            session,
            editor: None,
            show_help: false,
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
        if let Some(editor) = self.editor.as_mut() {
            match editor.handle(key) {
                EditOutcome::Editing => {}
                EditOutcome::Commit(requested) => {
                    self.session.set_length(requested);
                    self.editor = None;
                }
                EditOutcome::Cancel => self.editor = None,
                EditOutcome::Quit => return Flow::Quit,
            }
            return Flow::Continue;
        }

        if self.show_help {
            // Any key closes help, quit keys still quit
            self.show_help = false;
            return match action_for(key) {
                Some(Action::Quit) => Flow::Quit,
                _ => Flow::Continue,
            };
        }

        match action_for(key) {
            Some(Action::Generate) => {
                self.session.generate();
            }
            Some(Action::Copy) => {
                self.session.copy(now);
            }
            Some(Action::Toggle(class)) => self.session.toggle_class(class),
            Some(Action::Step(delta)) => self.session.step_length(delta),
            Some(Action::EditLength) => {
                self.editor = Some(LengthEditor::new(self.session.settings.pass_length));
            }
            Some(Action::Help) => self.show_help = true,
            Some(Action::Quit) => return Flow::Quit,
            None => {}
        }
        Flow::Continue
    }
}
