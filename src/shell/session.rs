//! One contact book session: view switch, form and gallery over a shared store.

use super::command::{Command, HELP};
use crate::config::Config;
use crate::store::ContactStore;
use crate::ui::form::SUCCESS_MESSAGE;
use crate::ui::{ContactGallery, EntryForm, SubmitOutcome, View, ViewSwitch};
use std::sync::Arc;
use tracing::debug;

/// Whether the event loop keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Text to print after an event, and what to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub flow: Flow,
}

/// Session state. Form and gallery hold handles on the same store.
pub struct Session {
    views: ViewSwitch,
    form: EntryForm,
    gallery: ContactGallery,
}

impl Session {
    pub fn new(store: Arc<dyn ContactStore>, config: &Config) -> Self {
        Self {
            views: ViewSwitch::new(config.initial_view),
            form: EntryForm::new(store.clone()),
            gallery: ContactGallery::new(store, config.card_layout()),
        }
    }

    pub fn current_view(&self) -> View {
        self.views.current()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn gallery(&self) -> &ContactGallery {
        &self.gallery
    }

    /// Apply one input event and produce the next screen.
    pub fn handle(&mut self, command: Command) -> Reply {
        debug!(command = ?command, view = %self.views.current(), "Handling input");

        let mut notice = String::new();
        match command {
            Command::Quit => {
                return Reply {
                    text: "Bye.\n".to_string(),
                    flow: Flow::Exit,
                }
            }
            Command::Show(view) => {
                let previous = self.views.select(view);
                // Leaving the form discards what was typed into it.
                if previous == View::Form && view != View::Form {
                    self.form.reset();
                }
            }
            Command::SetName(value) => match self.views.current() {
                View::Form => self.form.set_name(value),
                View::Gallery => notice.push_str(Self::FORM_ONLY),
            },
            Command::SetEmail(value) => match self.views.current() {
                View::Form => self.form.set_email(value),
                View::Gallery => notice.push_str(Self::FORM_ONLY),
            },
            Command::Submit => match self.views.current() {
                View::Form => {
                    if let SubmitOutcome::Added(_) = self.form.submit() {
                        notice.push_str(&format!("✔ {}\n", SUCCESS_MESSAGE));
                    }
                }
                View::Gallery => notice.push_str(Self::FORM_ONLY),
            },
            Command::Help => notice.push_str(HELP),
            Command::Refresh => {}
            Command::Unknown(word) => {
                notice.push_str(&format!(
                    "Unknown command '{}'. Type `help` for the list of commands.\n",
                    word
                ));
            }
        }

        let mut text = notice;
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&self.screen());

        Reply {
            text,
            flow: Flow::Continue,
        }
    }

    /// Navigation bar followed by the current view.
    pub fn screen(&mut self) -> String {
        let body = match self.views.current() {
            View::Form => self.form.render(),
            View::Gallery => self.gallery.render().to_string(),
        };
        format!("{}\n\n{}\n> ", self.views.render_nav(), body)
    }

    const FORM_ONLY: &'static str = "The form is not shown. Type `:form` to open it.\n";
}
