use crate::data::LoadError;
use crate::engine::QuizEngine;
use crate::models::{Question, Screen};

/// The engine plus the presentation-only state the TUI keeps between
/// frames: the option cursor, the pagination width, and the last fetch
/// error (shown on the loading screen).
pub struct App {
    engine: QuizEngine,
    max_visible: usize,
    cursor: usize,
    fetch_error: Option<String>,
}

impl App {
    pub fn new(max_visible: usize) -> Self {
        Self {
            engine: QuizEngine::new(),
            max_visible: max_visible.max(1),
            cursor: 0,
            fetch_error: None,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn screen(&self) -> Screen {
        if !self.engine.is_loaded() {
            Screen::Loading
        } else if self.engine.is_completed() {
            Screen::Result
        } else {
            Screen::Quiz
        }
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Feed the resolved fetch into the engine. A failed fetch, or a list
    /// the engine rejects, leaves the app on the loading screen with the
    /// error shown.
    pub fn finish_load(&mut self, fetched: Result<Vec<Question>, LoadError>) {
        match fetched {
            Ok(questions) => {
                if let Err(e) = self.engine.load(questions) {
                    self.fetch_error = Some(e.to_string());
                } else {
                    self.cursor = 0;
                    self.fetch_error = None;
                }
            }
            Err(e) => self.fetch_error = Some(e.to_string()),
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(question) = self.engine.current_question() {
            self.cursor = (self.cursor + 1) % question.options.len();
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(question) = self.engine.current_question() {
            let count = question.options.len();
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// Answer the current question with the option under the cursor.
    pub fn choose(&mut self) {
        if self.engine.select_option(self.cursor).is_ok() {
            self.cursor = 0;
        }
    }

    /// Jump to a question; a rejected jump is an ignored click.
    pub fn jump_to(&mut self, index: usize) {
        if self.engine.jump_to(index).is_ok() {
            self.cursor = 0;
        }
    }

    pub fn previous_question(&mut self) {
        let index = self.engine.current_index();
        if index > 0 {
            self.jump_to(index - 1);
        }
    }

    pub fn next_question(&mut self) {
        self.jump_to(self.engine.current_index() + 1);
    }

    pub fn submit(&mut self) {
        let _ = self.engine.submit();
    }

    pub fn restart(&mut self) {
        self.engine.restart();
        self.cursor = 0;
    }
}
