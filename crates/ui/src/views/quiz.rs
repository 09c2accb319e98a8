use dioxus::prelude::*;

use services::QuizCommand;

use crate::context::AppContext;
use crate::views::{
    QuestionScreenView, ResultScreenView, StartScreenView, ViewError, ViewState,
    view_state_from_resource,
};
use crate::vm::{QuizVm, ScreenVm, load_quiz};

/// Loads the quiz once, then switches between the start, question and result screens.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();
    let vm = use_signal(|| None::<QuizVm>);

    let mut resource = use_resource(move || {
        let quiz_loop = quiz_loop.clone();
        let mut vm = vm;

        async move {
            let loaded = load_quiz(&quiz_loop).await?;
            vm.set(Some(loaded));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);
    let screen = vm.read().as_ref().map(QuizVm::screen);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "load-error",
                        p { "{err.message()}" }
                        button {
                            class: "primary",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => match screen {
                    Some(ScreenVm::Start { question_count }) => rsx! {
                        StartScreenView {
                            question_count,
                            on_start: move |_| dispatch(vm, QuizCommand::Start),
                        }
                    },
                    Some(ScreenVm::Question(question)) => rsx! {
                        QuestionScreenView {
                            question,
                            on_choose: move |tag| dispatch(vm, QuizCommand::Choose(tag)),
                        }
                    },
                    Some(ScreenVm::Result(result)) => rsx! {
                        ResultScreenView {
                            result,
                            on_restart: move |_| dispatch(vm, QuizCommand::Restart),
                        }
                    },
                    None => rsx! {
                        p { class: "loading", "Loading..." }
                    },
                },
            }
        }
    }
}

fn dispatch(mut vm: Signal<Option<QuizVm>>, command: QuizCommand) {
    if let Some(quiz) = vm.write().as_mut() {
        quiz.dispatch(command);
    }
}
