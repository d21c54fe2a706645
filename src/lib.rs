//! # iq-quiz
//!
//! A terminal quiz with non-linear navigation through a bounded-width
//! pagination bar.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use iq_quiz::{AppError, FileSource, Quiz};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Questions come from a JSON file; the bar shows up to 10 buttons.
//!     let quiz = Quiz::new(FileSource::new("questions.json"), 10);
//!     quiz.run().await?;
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod engine;
mod error;
mod models;
mod pagination;
pub mod terminal;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tokio::sync::oneshot;

pub use app::App;
pub use data::{FileSource, LoadError, QuestionSource, parse_questions};
pub use engine::QuizEngine;
pub use error::QuizError;
pub use models::{Question, Screen};
pub use pagination::{PageButton, compute_window};

/// Error type for running the application.
#[derive(Debug)]
pub enum AppError {
    /// A quiz state transition was rejected.
    Quiz(QuizError),
    /// Error fetching or decoding questions.
    Load(LoadError),
    /// IO error during execution.
    Io(io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Quiz(e) => write!(f, "Quiz error: {}", e),
            AppError::Load(e) => write!(f, "Failed to load questions: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Quiz(e) => Some(e),
            AppError::Load(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        AppError::Quiz(err)
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        AppError::Load(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz<S> {
    source: S,
    app: App,
}

impl<S: QuestionSource> Quiz<S> {
    /// Create a quiz fed by `source`, with at most `max_visible` page
    /// buttons in the pagination bar.
    pub fn new(source: S, max_visible: usize) -> Self {
        Self {
            source,
            app: App::new(max_visible),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Takes over the terminal, kicks off the one-shot question fetch,
    /// and returns when the user quits.
    pub async fn run(mut self) -> Result<(), AppError> {
        let mut term = terminal::init()?;
        let result = self.event_loop(&mut term).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    async fn event_loop(&mut self, terminal: &mut terminal::AppTerminal) -> Result<(), AppError> {
        let (tx, mut rx) = oneshot::channel();
        let fetch = self.source.fetch_questions();
        tokio::spawn(async move {
            let _ = tx.send(fetch.await);
        });

        loop {
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            // The fetch resolves exactly once; after the value is taken the
            // channel reports Closed and this arm never fires again.
            if let Ok(fetched) = rx.try_recv() {
                self.app.finish_load(fetched);
                continue;
            }

            if !event::poll(Duration::from_millis(50))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut self.app, key.code) {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    handle_mouse(&mut self.app, area, mouse);
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Returns true if the app should exit.
fn handle_key(app: &mut App, key: KeyCode) -> bool {
    match app.screen() {
        Screen::Loading => handle_loading_key(key),
        Screen::Quiz => handle_quiz_key(app, key),
        Screen::Result => handle_result_key(app, key),
    }
}

fn handle_loading_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}

fn handle_quiz_key(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.previous_question();
            false
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.next_question();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.choose();
            false
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.submit();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_key(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

/// A left click on a page button becomes a jump; anything else is ignored.
fn handle_mouse(app: &mut App, area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if app.screen() != Screen::Quiz {
        return;
    }

    let engine = app.engine();
    let Ok(buttons) = compute_window(
        engine.total_questions(),
        engine.current_index(),
        app.max_visible(),
    ) else {
        return;
    };

    let bar = ui::quiz::pagination_area(area);
    if let Some(target) = ui::pagination::hit_test(&buttons, bar, mouse.column, mouse.row) {
        app.jump_to(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        (0..25)
            .map(|i| Question {
                prompt: format!("question {}", i + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_option_index: i % 4,
            })
            .collect()
    }

    fn loaded_app() -> App {
        let mut app = App::new(5);
        app.finish_load(Ok(questions()));
        app
    }

    #[test]
    fn quiz_keys_drive_the_engine() {
        let mut app = loaded_app();
        assert!(!handle_key(&mut app, KeyCode::Enter));
        assert_eq!(app.engine().current_index(), 1);
        assert_eq!(app.engine().score(), (1, 25));

        assert!(!handle_key(&mut app, KeyCode::Left));
        assert_eq!(app.engine().current_index(), 0);

        assert!(!handle_key(&mut app, KeyCode::Char('s')));
        assert_eq!(app.screen(), Screen::Result);
    }

    #[test]
    fn quit_keys_per_screen() {
        let mut app = App::new(5);
        assert!(handle_key(&mut app, KeyCode::Char('q')));

        let mut app = loaded_app();
        assert!(handle_key(&mut app, KeyCode::Char('q')));
        assert!(!handle_key(&mut app, KeyCode::Esc));

        app.submit();
        assert!(handle_key(&mut app, KeyCode::Esc));
    }

    #[test]
    fn restart_key_returns_to_the_quiz() {
        let mut app = loaded_app();
        handle_key(&mut app, KeyCode::Enter);
        handle_key(&mut app, KeyCode::Char('s'));
        assert!(!handle_key(&mut app, KeyCode::Char('r')));
        assert_eq!(app.screen(), Screen::Quiz);
        assert_eq!(app.engine().score(), (0, 25));
    }

    #[test]
    fn click_on_page_button_jumps() {
        let mut app = loaded_app();
        let area = Rect::new(0, 0, 80, 24);
        let bar = ui::quiz::pagination_area(area);

        // Window at the start is 1..=5; the third cell is label 3 at
        // columns 6..9 of the bar.
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: bar.x + 7,
            row: bar.y,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        handle_mouse(&mut app, area, mouse);
        assert_eq!(app.engine().current_index(), 2);
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let mut app = loaded_app();
        let area = Rect::new(0, 0, 80, 24);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: crossterm::event::KeyModifiers::NONE,
        };
        handle_mouse(&mut app, area, mouse);
        assert_eq!(app.engine().current_index(), 0);
    }
}
