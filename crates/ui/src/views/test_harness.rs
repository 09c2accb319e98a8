use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::QuizLoopService;
use storage::QuizDataSource;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionScreenView, QuizView, ResultScreenView, StartScreenView};
use crate::vm::ScreenVm;

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn title(&self) -> String {
        "Test Quiz".into()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[component]
fn ScreenHarness(screen: ScreenVm) -> Element {
    match screen {
        ScreenVm::Start { question_count } => rsx! {
            StartScreenView { question_count, on_start: |_| {} }
        },
        ScreenVm::Question(question) => rsx! {
            QuestionScreenView { question, on_choose: |_| {} }
        },
        ScreenVm::Result(result) => rsx! {
            ResultScreenView { result, on_restart: |_| {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(source: Arc<dyn QuizDataSource>) -> ViewHarness {
    let quiz_loop = Arc::new(QuizLoopService::new(source).with_seed(Some(1)));
    let app = Arc::new(TestApp { quiz_loop });
    let dom = VirtualDom::new_with_props(QuizHarness, QuizHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_screen_harness(screen: ScreenVm) -> ViewHarness {
    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen });
    ViewHarness { dom }
}
