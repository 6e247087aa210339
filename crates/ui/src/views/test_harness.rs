use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use tokio::sync::Semaphore;
use quiz_core::model::{
    AnswerKey, AnswerOption, Question, QuestionId, QuizParams, QuizRequest,
};
use services::{QuestionSource, QuestionSourceError, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

/// In-memory question source for view tests.
pub enum FakeSource {
    Questions(Vec<Question>),
    Down,
}

#[async_trait]
impl QuestionSource for FakeSource {
    async fn fetch(&self, _request: &QuizRequest) -> Result<Vec<Question>, QuestionSourceError> {
        match self {
            FakeSource::Questions(questions) => Ok(questions.clone()),
            FakeSource::Down => Err(QuestionSourceError::Unavailable("offline".to_string())),
        }
    }
}

/// Records every request, fails the first `failures` fetches and, when gated,
/// holds each fetch until the test releases it.
pub struct ScriptedSource {
    questions: Vec<Question>,
    failures: AtomicUsize,
    gate: Option<Semaphore>,
    requests: Mutex<Vec<QuizRequest>>,
}

impl ScriptedSource {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            failures: AtomicUsize::new(0),
            gate: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn gated(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    pub fn failing_first(self, failures: usize) -> Self {
        self.failures.store(failures, Ordering::SeqCst);
        self
    }

    /// Lets `count` held fetches complete.
    pub fn release(&self, count: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(count);
        }
    }

    pub fn requests(&self) -> Vec<QuizRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl QuestionSource for ScriptedSource {
    async fn fetch(&self, request: &QuizRequest) -> Result<Vec<Question>, QuestionSourceError> {
        self.requests.lock().expect("requests lock").push(*request);
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate open").forget();
        }
        let failed = self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
            .is_ok();
        if failed {
            return Err(QuestionSourceError::Unavailable("offline".to_string()));
        }
        Ok(self.questions.clone())
    }
}

#[derive(Clone)]
struct TestApp {
    quiz_service: Arc<QuizService>,
    default_params: QuizParams,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn default_params(&self) -> QuizParams {
        self.default_params
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Dispatch an intent and let any spawned fetch settle.
    pub async fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.drive_async().await;
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn score(&self) -> u32 {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| vm.read().session().score())
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

pub fn question(id: u64, correct: &str) -> Question {
    let options = [("answer_a", "Alpha"), ("answer_b", "Bravo"), ("answer_d", "Delta")]
        .into_iter()
        .map(|(key, text)| {
            AnswerOption::new(AnswerKey::new(key).expect("valid key"), text, key == correct)
        })
        .collect();
    Question::new(QuestionId::new(id), format!("Question number {id}"), options)
}

pub fn setup_view_harness(source: FakeSource, default_params: QuizParams) -> ViewHarness {
    setup_view_harness_with(Arc::new(source), default_params)
}

pub fn setup_view_harness_with(
    source: Arc<dyn QuestionSource>,
    default_params: QuizParams,
) -> ViewHarness {
    let quiz_service = Arc::new(QuizService::new(source));
    let app = Arc::new(TestApp {
        quiz_service,
        default_params,
    });
    let handles = QuizTestHandles::default();

    let mut harness = ViewHarness {
        dom: VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                handles: handles.clone(),
            },
        ),
        handles,
    };
    harness.rebuild();
    harness
}
