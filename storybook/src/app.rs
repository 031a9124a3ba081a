//! Application state: panel navigation, mode, quiz progress, word popup.
//!
//! One explicit state record updated by pure transition methods, so the
//! whole controller is unit-testable without a rendering layer. Timed quiz
//! resets are expressed as data ([`AnswerOutcome`]): the driver sleeps for
//! the named delay, then applies the corresponding transition.

use std::time::Duration;

use crate::content::{QuizQuestion, VocabularyEntry};

/// Delay before advancing (or completing) after a correct answer.
pub const CORRECT_DELAY: Duration = Duration::from_millis(1500);
/// Shorter delay before clearing an incorrect selection for retry.
pub const RETRY_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Story,
    Quiz,
}

/// Progress through the quiz. Selection is immutable once made, until the
/// driver applies the advance or retry transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    pub current: usize,
    pub selected: Option<String>,
    pub correct: Option<bool>,
}

/// What the driver should do after an answer was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct; advance to the next question after the delay.
    Advance(Duration),
    /// Correct on the last question; quiz completes after the delay.
    Complete(Duration),
    /// Incorrect; clear the selection after the delay so the same question
    /// can be retried.
    Retry(Duration),
    /// A selection already exists (or the quiz index is exhausted); the
    /// input is dropped.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: Mode,
    pub panel_idx: usize,
    panel_count: usize,
    pub selected_word: Option<VocabularyEntry>,
    pub quiz: QuizState,
    narrating: bool,
}

impl AppState {
    pub fn new(panel_count: usize) -> Self {
        Self {
            mode: Mode::Story,
            panel_idx: 0,
            panel_count,
            selected_word: None,
            quiz: QuizState::default(),
            narrating: false,
        }
    }

    // ── Panel navigation ───────────────────────────────────────────

    pub fn at_first_panel(&self) -> bool {
        self.panel_idx == 0
    }

    pub fn at_last_panel(&self) -> bool {
        self.panel_idx + 1 >= self.panel_count
    }

    /// Advance one panel; no-op at the last panel.
    pub fn next_panel(&mut self) {
        if !self.at_last_panel() {
            self.panel_idx += 1;
        }
    }

    /// Go back one panel; no-op at the first panel.
    pub fn prev_panel(&mut self) {
        if !self.at_first_panel() {
            self.panel_idx -= 1;
        }
    }

    // ── Mode ───────────────────────────────────────────────────────

    /// Switch modes. The stored panel index is untouched; only quiz
    /// completion resets it.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // ── Word popup ─────────────────────────────────────────────────

    /// Open the popup for a resolved vocabulary entry. The popup stays
    /// open across panel navigation; only an explicit close clears it.
    pub fn select_word(&mut self, entry: VocabularyEntry) {
        self.selected_word = Some(entry);
    }

    pub fn close_word(&mut self) {
        self.selected_word = None;
    }

    // ── Quiz ───────────────────────────────────────────────────────

    /// Record an answer selection and compute correctness by exact,
    /// case-sensitive string equality against the question's answer.
    pub fn select_answer(&mut self, questions: &[QuizQuestion], answer: &str) -> AnswerOutcome {
        if self.quiz.selected.is_some() {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = questions.get(self.quiz.current) else {
            return AnswerOutcome::Ignored;
        };
        let correct = answer == question.correct_answer;
        self.quiz.selected = Some(answer.to_owned());
        self.quiz.correct = Some(correct);
        if !correct {
            AnswerOutcome::Retry(RETRY_DELAY)
        } else if self.quiz.current + 1 < questions.len() {
            AnswerOutcome::Advance(CORRECT_DELAY)
        } else {
            AnswerOutcome::Complete(CORRECT_DELAY)
        }
    }

    /// Move to the next question, resetting selection and correctness.
    pub fn advance_question(&mut self) {
        self.quiz.current += 1;
        self.quiz.selected = None;
        self.quiz.correct = None;
    }

    /// Clear an incorrect selection so the question can be retried.
    pub fn clear_selection(&mut self) {
        self.quiz.selected = None;
        self.quiz.correct = None;
    }

    /// Finish the quiz: back to the story at the first panel, quiz
    /// progress reset for a later run.
    pub fn complete_quiz(&mut self) {
        self.quiz = QuizState::default();
        self.mode = Mode::Story;
        self.panel_idx = 0;
    }

    // ── Narration guard ────────────────────────────────────────────

    /// Claim the single narration slot. Returns false when a request is
    /// already in flight; such requests are dropped, not queued.
    pub fn begin_narration(&mut self) -> bool {
        if self.narrating {
            return false;
        }
        self.narrating = true;
        true
    }

    pub fn end_narration(&mut self) {
        self.narrating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;

    #[test]
    fn panel_navigation_saturates_at_both_ends() {
        let mut app = AppState::new(5);
        assert!(app.at_first_panel());
        app.prev_panel();
        assert_eq!(app.panel_idx, 0);

        app.next_panel();
        assert_eq!(app.panel_idx, 1);
        assert!(!app.at_first_panel());

        for _ in 0..10 {
            app.next_panel();
        }
        assert_eq!(app.panel_idx, 4);
        assert!(app.at_last_panel());
    }

    #[test]
    fn popup_survives_panel_navigation() {
        let content = Content::load();
        let mut app = AppState::new(content.panels.len());
        let shoes = content.resolve("shoes").unwrap().clone();
        app.select_word(shoes.clone());

        app.next_panel();
        app.prev_panel();
        assert_eq!(app.selected_word, Some(shoes));

        app.close_word();
        assert_eq!(app.selected_word, None);
    }

    #[test]
    fn correct_answer_matching_is_exact_and_case_sensitive() {
        let content = Content::load();
        let mut app = AppState::new(content.panels.len());

        // "black" is not option-equal to "Black".
        let outcome = app.select_answer(&content.quiz, "black");
        assert_eq!(outcome, AnswerOutcome::Retry(RETRY_DELAY));
        assert_eq!(app.quiz.correct, Some(false));

        app.clear_selection();
        let outcome = app.select_answer(&content.quiz, "Black");
        assert_eq!(outcome, AnswerOutcome::Advance(CORRECT_DELAY));
        assert_eq!(app.quiz.correct, Some(true));
    }

    #[test]
    fn selection_is_immutable_until_reset() {
        let content = Content::load();
        let mut app = AppState::new(content.panels.len());

        assert_eq!(
            app.select_answer(&content.quiz, "Red"),
            AnswerOutcome::Retry(RETRY_DELAY)
        );
        // Second pick while a selection exists is dropped.
        assert_eq!(app.select_answer(&content.quiz, "Black"), AnswerOutcome::Ignored);
        assert_eq!(app.quiz.selected.as_deref(), Some("Red"));
    }

    #[test]
    fn full_quiz_run_completes_exactly_once_and_returns_to_panel_zero() {
        let content = Content::load();
        let mut app = AppState::new(content.panels.len());
        app.set_mode(Mode::Quiz);
        app.panel_idx = 3;

        // Q1 "Black" correct — advances after the longer delay.
        assert_eq!(
            app.select_answer(&content.quiz, "Black"),
            AnswerOutcome::Advance(CORRECT_DELAY)
        );
        app.advance_question();
        assert_eq!(app.quiz.current, 1);
        assert_eq!(app.quiz.selected, None);

        // Q2 "Sunny" incorrect — retried after the shorter delay.
        assert_eq!(
            app.select_answer(&content.quiz, "Sunny"),
            AnswerOutcome::Retry(RETRY_DELAY)
        );
        app.clear_selection();
        assert_eq!(app.quiz.current, 1);

        // Q2 "Windy" then Q3 "Jeff" — the final correct answer completes.
        assert_eq!(
            app.select_answer(&content.quiz, "Windy"),
            AnswerOutcome::Advance(CORRECT_DELAY)
        );
        app.advance_question();
        assert_eq!(
            app.select_answer(&content.quiz, "Jeff"),
            AnswerOutcome::Complete(CORRECT_DELAY)
        );
        // Completion can only fire once per selection window.
        assert_eq!(app.select_answer(&content.quiz, "Jeff"), AnswerOutcome::Ignored);

        app.complete_quiz();
        assert_eq!(app.mode, Mode::Story);
        assert_eq!(app.panel_idx, 0);
        assert_eq!(app.quiz, QuizState::default());
    }

    #[test]
    fn overlapping_narration_requests_are_dropped() {
        let mut app = AppState::new(5);
        assert!(app.begin_narration());
        assert!(!app.begin_narration());
        assert!(!app.begin_narration());
        app.end_narration();
        assert!(app.begin_narration());
    }

    #[test]
    fn story_scenario_from_panel_one() {
        let content = Content::load();
        let mut app = AppState::new(content.panels.len());

        // Panel 1 loads at index 0 with the back action disabled.
        assert_eq!(app.panel_idx, 0);
        assert!(app.at_first_panel());

        // Tapping "shoes" in "Put on your shoes, Jeff." opens the popup.
        let line = &content.panels[0].dialogues[1];
        let token = line
            .text
            .split(' ')
            .find(|t| line.is_highlighted(t))
            .expect("panel 1 line 2 should carry a highlighted token");
        let entry = content.resolve(token).expect("highlighted token resolves");
        assert_eq!(entry.translation, "鞋子");
        app.select_word(entry.clone());
        assert!(app.selected_word.is_some());

        // Next panel: index 1, back no longer disabled.
        app.next_panel();
        assert_eq!(app.panel_idx, 1);
        assert!(!app.at_first_panel());
    }
}
