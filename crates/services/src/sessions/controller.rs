use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use tracing::{info, warn};

use quiz_core::model::{Question, QuizData, QuizResult, ResultDisplay, TypeTag};

use super::service::QuizSession;
use crate::resolver;

//
// ─── COMMANDS & SCREENS ────────────────────────────────────────────────────────
//

/// User-initiated events forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Start,
    Choose(TypeTag),
    Restart,
}

/// The question currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionScreen {
    /// 0-based position in the question list.
    pub index: usize,
    pub total: usize,
    pub question: Question,
}

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Question(QuestionScreen),
    Result(QuizResult),
}

impl QuizScreen {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizScreen::Start => "start",
            QuizScreen::Question(_) => "question",
            QuizScreen::Result(_) => "result",
        }
    }
}

/// Receives a notification after every screen change.
pub trait QuizObserver {
    fn screen_changed(&mut self, screen: &QuizScreen);
}

/// Logs screen transitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl QuizObserver for TracingObserver {
    fn screen_changed(&mut self, screen: &QuizScreen) {
        match screen {
            QuizScreen::Start => info!("showing start screen"),
            QuizScreen::Question(q) => {
                info!(number = q.index + 1, total = q.total, "showing question");
            }
            QuizScreen::Result(result) => info!(
                winning_type = %result.winning_type(),
                has_track = result.track().is_some(),
                "showing result"
            ),
        }
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Drives one quiz: takes commands, runs the session and resolver, reports screens.
pub struct QuizController {
    data: Arc<QuizData>,
    session: QuizSession,
    rng: StdRng,
    screen: QuizScreen,
    result: Option<QuizResult>,
    observers: Vec<Box<dyn QuizObserver>>,
}

impl QuizController {
    /// Create a controller on the start screen.
    #[must_use]
    pub fn new(data: Arc<QuizData>, rng: StdRng) -> Self {
        let session = QuizSession::new(Arc::clone(data.questions()));
        Self {
            data,
            session,
            rng,
            screen: QuizScreen::Start,
            result: None,
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl QuizObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn add_observer(&mut self, observer: impl QuizObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[must_use]
    pub fn data(&self) -> &QuizData {
        &self.data
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn screen(&self) -> &QuizScreen {
        &self.screen
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.screen {
            QuizScreen::Question(_) => self.session.current_question(),
            QuizScreen::Start | QuizScreen::Result(_) => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn result_display(&self) -> Option<ResultDisplay> {
        self.result.as_ref().map(QuizResult::display)
    }

    /// Apply a command and return the screen to show.
    pub fn dispatch(&mut self, command: QuizCommand) -> &QuizScreen {
        match command {
            QuizCommand::Start => self.start_quiz(),
            QuizCommand::Choose(tag) => self.submit_choice(tag),
            QuizCommand::Restart => self.restart(),
        }
    }

    /// Begin a fresh run, discarding any progress or result.
    pub fn start_quiz(&mut self) -> &QuizScreen {
        info!(questions = self.session.question_count(), "starting quiz");
        self.session.start();
        self.result = None;
        self.advance();
        &self.screen
    }

    /// Record a choice for the question on screen.
    ///
    /// Ignored unless a question is showing.
    pub fn submit_choice(&mut self, tag: TypeTag) -> &QuizScreen {
        if !matches!(self.screen, QuizScreen::Question(_)) {
            warn!(%tag, screen = self.screen.name(), "ignoring choice outside a question");
            return &self.screen;
        }

        if let Err(err) = self.session.record_choice(tag) {
            warn!(%tag, %err, "choice rejected");
            return &self.screen;
        }
        self.advance();
        &self.screen
    }

    /// Drop the current run and go back to the start screen.
    pub fn restart(&mut self) -> &QuizScreen {
        self.session.start();
        self.result = None;
        self.show(QuizScreen::Start);
        &self.screen
    }

    fn advance(&mut self) {
        let next = match self.session.current_question() {
            Some(question) => QuizScreen::Question(QuestionScreen {
                index: self.session.current_question_index(),
                total: self.session.question_count(),
                question: question.clone(),
            }),
            None => {
                let result =
                    resolver::resolve(self.session.tally(), self.data.catalog(), &mut self.rng);
                self.result = Some(result.clone());
                QuizScreen::Result(result)
            }
        };
        self.show(next);
    }

    fn show(&mut self, screen: QuizScreen) {
        self.screen = screen;
        for observer in &mut self.observers {
            observer.screen_changed(&self.screen);
        }
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("session", &self.session)
            .field("screen", &self.screen.name())
            .field("result", &self.result)
            .field("observers_len", &self.observers.len())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
