//! Quiz State Machine
//!
//! A fixed sequence of multiple-choice questions presented one at a time.
//! The run is strictly linear: answer, see feedback, advance. No skipping,
//! no going back, no time limit.
//!
//! State transitions:
//!
//! ```text
//! Showing(i) --answer--> Answered(i) --advance--> Showing(i+1)
//!                                            \--> Finished   (i was last)
//! Finished --restart--> Showing(0), score 0, results cleared
//! ```

/// One selectable answer for a question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    /// Answer text shown to the user.
    pub text: String,
    /// Whether this is the one correct answer.
    pub correct: bool,
}

impl Answer {
    fn new(text: &str, correct: bool) -> Self {
        Self {
            text: text.to_string(),
            correct,
        }
    }
}

/// A multiple-choice question. Exactly one answer is correct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    /// Question text.
    pub text: String,
    /// Ordered answer options.
    pub answers: Vec<Answer>,
}

impl Question {
    /// Index of the correct answer.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.answers.iter().position(|a| a.correct).unwrap_or(0)
    }
}

/// Outcome recorded for one answered question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResult {
    /// The question that was answered.
    pub question_text: String,
    /// Whether the chosen answer was the correct one.
    pub was_correct: bool,
}

impl QuizResult {
    /// Summary line for the finished screen, e.g.
    /// `1. What does HTML stand for? — ✅ Correct`.
    #[must_use]
    pub fn summary_line(&self, number: usize) -> String {
        let verdict = if self.was_correct {
            "✅ Correct"
        } else {
            "❌ Wrong"
        };
        format!("{}. {} — {}", number, self.question_text, verdict)
    }
}

/// Where the quiz currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    /// Current question shown, waiting for an answer.
    Showing,
    /// Current question answered; options are locked until `advance`.
    Answered {
        /// Index of the option the user picked.
        selected: usize,
    },
    /// All questions answered; score summary is shown.
    Finished,
}

/// The quiz runner: question bank plus linear progress state.
#[derive(Clone, Debug)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    results: Vec<QuizResult>,
    phase: QuizPhase,
}

impl Quiz {
    /// Create a quiz over the given question bank, positioned at question 1.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            results: Vec::new(),
            phase: QuizPhase::Showing,
        }
    }

    /// Create a quiz with the built-in question bank.
    #[must_use]
    pub fn with_default_questions() -> Self {
        Self::new(default_questions())
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question currently shown, if the quiz is not finished.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            QuizPhase::Finished => None,
            _ => self.questions.get(self.current),
        }
    }

    /// Number of questions in the bank.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Number of correct answers so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Per-question outcomes in answer order.
    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    /// Answer the current question with the option at `index`.
    ///
    /// Only accepted in the `Showing` phase with a valid option index;
    /// anything else is ignored. A correct pick increments the score. The
    /// outcome is appended to the results and the quiz moves to `Answered`.
    /// Returns `true` if the answer was accepted.
    pub fn answer(&mut self, index: usize) -> bool {
        if self.phase != QuizPhase::Showing {
            return false;
        }
        let Some(question) = self.questions.get(self.current) else {
            return false;
        };
        let Some(option) = question.answers.get(index) else {
            return false;
        };

        let was_correct = option.correct;
        if was_correct {
            self.score += 1;
        }
        self.results.push(QuizResult {
            question_text: question.text.clone(),
            was_correct,
        });
        self.phase = QuizPhase::Answered { selected: index };
        true
    }

    /// Move past an answered question: to the next question, or to
    /// `Finished` when the answered question was the last. Ignored unless
    /// the quiz is in the `Answered` phase.
    pub fn advance(&mut self) {
        if !matches!(self.phase, QuizPhase::Answered { .. }) {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::Showing;
        } else {
            self.phase = QuizPhase::Finished;
        }
    }

    /// Start over: question 1, score 0, results cleared.
    pub fn restart(&mut self) {
        self.current = 0;
        self.score = 0;
        self.results.clear();
        self.phase = QuizPhase::Showing;
    }

    /// Score headline for the finished screen.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "🎯 You scored {} out of {}!",
            self.score,
            self.questions.len()
        )
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::with_default_questions()
    }
}

/// The built-in question bank.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    vec![
        Question {
            text: "What does HTML stand for?".to_string(),
            answers: vec![
                Answer::new("Hyper Text Markup Language", true),
                Answer::new("HighText Machine Language", false),
                Answer::new("Hyperlinking Text Management Language", false),
                Answer::new("Home Tool Markup Language", false),
            ],
        },
        Question {
            text: "Which language is used for styling web pages?".to_string(),
            answers: vec![
                Answer::new("HTML", false),
                Answer::new("CSS", true),
                Answer::new("Python", false),
                Answer::new("C++", false),
            ],
        },
        Question {
            text: "What does JS stand for?".to_string(),
            answers: vec![
                Answer::new("JavaScript", true),
                Answer::new("Java Source", false),
                Answer::new("Just Script", false),
                Answer::new("Junction Style", false),
            ],
        },
        Question {
            text: "Which tag is used to include JavaScript in HTML?".to_string(),
            answers: vec![
                Answer::new("<js>", false),
                Answer::new("<javascript>", false),
                Answer::new("<script>", true),
                Answer::new("<code>", false),
            ],
        },
    ]
}
