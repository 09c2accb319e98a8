use dioxus::prelude::*;

#[component]
pub fn StartScreenView(question_count: usize, on_start: EventHandler<()>) -> Element {
    rsx! {
        section { class: "start-screen",
            h1 { "Which song fits your mood?" }
            p { "Answer {question_count} quick questions and get a track picked for you." }
            button {
                class: "primary",
                id: "start-button",
                onclick: move |_| on_start.call(()),
                "Start"
            }
        }
    }
}
