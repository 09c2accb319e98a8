use quiz_core::model::{QuizResult, TypeTag};
use services::{QuestionScreen, QuizCommand, QuizController, QuizError, QuizLoopService, QuizScreen};
use tracing::error;

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub text: String,
    pub tag: TypeTag,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub text: String,
    pub choices: Vec<ChoiceVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub type_label: String,
    pub title: String,
    pub artist: String,
    pub album_art_url: String,
    pub album_art_alt: String,
    pub link: String,
    pub has_track: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Start { question_count: usize },
    Question(QuestionVm),
    Result(ResultVm),
}

#[must_use]
pub fn map_question(screen: &QuestionScreen) -> QuestionVm {
    QuestionVm {
        progress_label: format!("Question {} of {}", screen.index + 1, screen.total),
        text: screen.question.text.clone(),
        choices: screen
            .question
            .choices
            .iter()
            .map(|choice| ChoiceVm {
                text: choice.text.clone(),
                tag: choice.tag,
            })
            .collect(),
    }
}

#[must_use]
pub fn map_result(result: &QuizResult) -> ResultVm {
    let display = result.display();
    ResultVm {
        type_label: result.winning_type().label().to_string(),
        title: display.title,
        artist: display.artist,
        album_art_url: display.album_art_url,
        album_art_alt: display.album_art_alt,
        link: display.link,
        has_track: result.track().is_some(),
    }
}

#[must_use]
pub fn map_screen(screen: &QuizScreen, question_count: usize) -> ScreenVm {
    match screen {
        QuizScreen::Start => ScreenVm::Start { question_count },
        QuizScreen::Question(question) => ScreenVm::Question(map_question(question)),
        QuizScreen::Result(result) => ScreenVm::Result(map_result(result)),
    }
}

/// Holds the loaded quiz for the lifetime of the window.
pub struct QuizVm {
    controller: QuizController,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self { controller }
    }

    pub fn dispatch(&mut self, command: QuizCommand) {
        self.controller.dispatch(command);
    }

    #[must_use]
    pub fn screen(&self) -> ScreenVm {
        map_screen(
            self.controller.screen(),
            self.controller.session().question_count(),
        )
    }
}

/// # Errors
///
/// Returns `ViewError::DataLoad` when the quiz data cannot be loaded.
/// Returns `ViewError::Unknown` for other failures.
pub async fn load_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    match quiz_loop.load().await {
        Ok(controller) => Ok(QuizVm::new(controller)),
        Err(QuizError::DataLoad(err)) => {
            error!(%err, "failed to load quiz data");
            Err(ViewError::DataLoad)
        }
        Err(err) => {
            error!(%err, "failed to prepare quiz");
            Err(ViewError::Unknown)
        }
    }
}
