//! Quiz progression state machine.
//!
//! [`QuizEngine`] owns the authoritative state: the immutable question
//! list, the current position, the running correct-answer count, and the
//! completion flag. Every mutation goes through one of the transition
//! methods below, each of which runs to completion before the next event
//! is handled (single writer, no locking).

use crate::error::QuizError;
use crate::models::Question;

/// The quiz state machine.
///
/// An engine starts unloaded; [`QuizEngine::load`] is the only way in.
/// Answering the last question does not finish the quiz on its own —
/// completion happens only through an explicit [`QuizEngine::submit`],
/// so the user can still navigate back and review before grading.
pub struct QuizEngine {
    questions: Vec<Question>,
    current_index: usize,
    correct_count: usize,
    completed: bool,
}

impl QuizEngine {
    /// Create an unloaded engine.
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            correct_count: 0,
            completed: false,
        }
    }

    /// Load the question list, replacing whatever was loaded before.
    ///
    /// Rejects an empty list, a question with fewer than two options, and
    /// a correct-option index that points past the options. On success the
    /// engine is positioned at the first question with a zero score.
    pub fn load(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if questions.is_empty() {
            return Err(QuizError::InvalidInput(
                "question list is empty".to_string(),
            ));
        }

        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(QuizError::InvalidInput(format!(
                    "question {} has {} option(s), need at least 2",
                    index + 1,
                    question.options.len()
                )));
            }
            if question.correct_option_index >= question.options.len() {
                return Err(QuizError::InvalidInput(format!(
                    "question {} marks option {} correct but only has {} options",
                    index + 1,
                    question.correct_option_index,
                    question.options.len()
                )));
            }
        }

        self.questions = questions;
        self.current_index = 0;
        self.correct_count = 0;
        self.completed = false;
        Ok(())
    }

    /// Answer the current question with the given option.
    ///
    /// Scoring is per call: revisiting a question and answering it again
    /// counts again. An option index that matches nothing scores nothing
    /// but still advances. On the last question the position stays put.
    pub fn select_option(&mut self, option_index: usize) -> Result<(), QuizError> {
        if !self.is_loaded() || self.completed {
            return Err(QuizError::NotReady);
        }

        if option_index == self.questions[self.current_index].correct_option_index {
            self.correct_count += 1;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        }
        Ok(())
    }

    /// Jump to an arbitrary question. Navigation never touches the score.
    pub fn jump_to(&mut self, index: usize) -> Result<(), QuizError> {
        if index >= self.questions.len() {
            return Err(QuizError::OutOfRange {
                index,
                total: self.questions.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Finish the quiz. Terminal until [`QuizEngine::restart`].
    pub fn submit(&mut self) -> Result<(), QuizError> {
        if !self.is_loaded() || self.completed {
            return Err(QuizError::NotReady);
        }
        self.completed = true;
        Ok(())
    }

    /// Reset position, score, and completion, keeping the loaded questions.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.correct_count = 0;
        self.completed = false;
    }

    /// Raw score as `(correct_count, total_questions)`.
    ///
    /// Any rescaled presentation of this fraction is the caller's business.
    pub fn score(&self) -> (usize, usize) {
        (self.correct_count, self.questions.len())
    }

    pub fn is_loaded(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question {
            prompt: format!("prompt {}", correct),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_option_index: correct,
        }
    }

    fn loaded_engine(count: usize) -> QuizEngine {
        let mut engine = QuizEngine::new();
        engine
            .load((0..count).map(|i| question(i % 4)).collect())
            .unwrap();
        engine
    }

    #[test]
    fn load_resets_to_initial_state() {
        let engine = loaded_engine(5);
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), (0, 5));
        assert!(!engine.is_completed());
    }

    #[test]
    fn load_rejects_empty_list() {
        let mut engine = QuizEngine::new();
        assert!(matches!(
            engine.load(Vec::new()),
            Err(QuizError::InvalidInput(_))
        ));
        assert!(!engine.is_loaded());
    }

    #[test]
    fn load_rejects_too_few_options() {
        let mut engine = QuizEngine::new();
        let bad = Question {
            prompt: "p".into(),
            options: vec!["only".into()],
            correct_option_index: 0,
        };
        assert!(matches!(
            engine.load(vec![bad]),
            Err(QuizError::InvalidInput(_))
        ));
    }

    #[test]
    fn load_rejects_correct_index_out_of_range() {
        let mut engine = QuizEngine::new();
        let bad = Question {
            prompt: "p".into(),
            options: vec!["a".into(), "b".into()],
            correct_option_index: 2,
        };
        assert!(matches!(
            engine.load(vec![bad]),
            Err(QuizError::InvalidInput(_))
        ));
    }

    #[test]
    fn correct_answer_scores_and_advances() {
        let mut engine = loaded_engine(3);
        engine.select_option(0).unwrap(); // question 0 is correct on 0
        assert_eq!(engine.score(), (1, 3));
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn wrong_answer_advances_without_scoring() {
        let mut engine = loaded_engine(3);
        engine.select_option(3).unwrap();
        assert_eq!(engine.score(), (0, 3));
        assert_eq!(engine.current_index(), 1);
    }

    #[test]
    fn answering_last_question_does_not_complete() {
        let mut engine = loaded_engine(2);
        engine.select_option(0).unwrap();
        engine.select_option(1).unwrap();
        assert_eq!(engine.current_index(), 1);
        assert!(!engine.is_completed());
        assert_eq!(engine.score(), (2, 2));
    }

    #[test]
    fn select_option_before_load_is_not_ready() {
        let mut engine = QuizEngine::new();
        assert_eq!(engine.select_option(0), Err(QuizError::NotReady));
    }

    #[test]
    fn select_option_after_submit_is_not_ready() {
        let mut engine = loaded_engine(2);
        engine.submit().unwrap();
        assert_eq!(engine.select_option(0), Err(QuizError::NotReady));
        assert_eq!(engine.score(), (0, 2));
    }

    #[test]
    fn jump_to_moves_without_touching_score() {
        let mut engine = loaded_engine(5);
        engine.select_option(0).unwrap();
        let score_before = engine.score();
        engine.jump_to(4).unwrap();
        assert_eq!(engine.current_index(), 4);
        assert_eq!(engine.score(), score_before);
        engine.jump_to(0).unwrap();
        assert_eq!(engine.score(), score_before);
    }

    #[test]
    fn jump_to_out_of_range_fails() {
        let mut engine = loaded_engine(3);
        assert_eq!(
            engine.jump_to(3),
            Err(QuizError::OutOfRange { index: 3, total: 3 })
        );
        assert_eq!(engine.current_index(), 0);
    }

    #[test]
    fn jump_to_on_unloaded_engine_fails() {
        let mut engine = QuizEngine::new();
        assert_eq!(
            engine.jump_to(0),
            Err(QuizError::OutOfRange { index: 0, total: 0 })
        );
    }

    // Pins the deliberate lack of de-duplication: answering a revisited
    // question scores it a second time.
    #[test]
    fn revisited_question_scores_again() {
        let mut engine = loaded_engine(3);
        engine.select_option(0).unwrap();
        engine.jump_to(0).unwrap();
        engine.select_option(0).unwrap();
        assert_eq!(engine.score(), (2, 3));
    }

    #[test]
    fn scoring_counts_only_matching_answers() {
        let mut engine = loaded_engine(4); // correct options 0, 1, 2, 3
        engine.select_option(0).unwrap(); // match
        engine.select_option(0).unwrap(); // miss (correct is 1)
        engine.select_option(2).unwrap(); // match
        engine.select_option(0).unwrap(); // miss (correct is 3)
        assert_eq!(engine.score(), (2, 4));
    }

    #[test]
    fn submit_completes_and_repeat_submit_fails() {
        let mut engine = loaded_engine(2);
        engine.submit().unwrap();
        assert!(engine.is_completed());
        assert_eq!(engine.submit(), Err(QuizError::NotReady));
        assert!(engine.is_completed());
    }

    #[test]
    fn submit_before_load_is_not_ready() {
        let mut engine = QuizEngine::new();
        assert_eq!(engine.submit(), Err(QuizError::NotReady));
    }

    #[test]
    fn restart_returns_to_post_load_state() {
        let mut engine = loaded_engine(4);
        engine.select_option(0).unwrap();
        engine.jump_to(3).unwrap();
        engine.submit().unwrap();
        engine.restart();
        assert_eq!(engine.current_index(), 0);
        assert_eq!(engine.score(), (0, 4));
        assert!(!engine.is_completed());
        assert!(engine.is_loaded());
    }
}
