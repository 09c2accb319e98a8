use dioxus::prelude::*;

use quiz_core::model::TypeTag;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionScreenView(question: QuestionVm, on_choose: EventHandler<TypeTag>) -> Element {
    let choices = question
        .choices
        .iter()
        .map(|choice| (choice.tag, choice.text.clone()))
        .collect::<Vec<_>>();

    rsx! {
        section { class: "quiz-screen",
            p { class: "progress", "{question.progress_label}" }
            h2 { id: "question-text", "{question.text}" }
            div { class: "choices", id: "choices-container",
                for (index, (tag, text)) in choices.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "choice-button",
                        onclick: move |_| on_choose.call(tag),
                        "{text}"
                    }
                }
            }
        }
    }
}
