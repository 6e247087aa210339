use dioxus::prelude::*;
use log::debug;
use quiz_core::model::{Category, Difficulty, QuizParams, QuizRequest};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{QuestionVm, QuizIntent, QuizScreen, QuizVm, ScoreVm, start_quiz};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_service = ctx.quiz_service();
    let default_params = ctx.default_params();

    let vm = use_signal(|| QuizVm::new(default_params));
    let loading = use_signal(|| false);
    let error = use_signal(|| None::<ViewError>);
    let last_request = use_signal(|| None::<QuizRequest>);
    // Bumped by Go home so a fetch still in flight cannot restart the quiz.
    let generation = use_signal(|| 0_u64);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut loading = loading;
        let mut error = error;
        let mut last_request = last_request;
        let mut generation = generation;

        let request = match intent {
            QuizIntent::SetDifficulty(difficulty) => {
                vm.write().set_difficulty(difficulty);
                return;
            }
            QuizIntent::SetCategory(category) => {
                vm.write().set_category(category);
                return;
            }
            QuizIntent::Answer(key) => {
                if let Err(err) = vm.write().answer(&key) {
                    debug!("ignoring answer {key}: {err}");
                }
                return;
            }
            QuizIntent::GoHome => {
                vm.write().go_home();
                error.set(None);
                if loading() {
                    debug!("discarding quiz fetch still in flight");
                    loading.set(false);
                }
                *generation.write() += 1;
                return;
            }
            QuizIntent::StartRandom => QuizRequest::Random,
            QuizIntent::StartFiltered => vm.read().filtered_request(),
            QuizIntent::Retry => match last_request() {
                Some(request) => request,
                None => return,
            },
        };

        // One fetch at a time.
        if loading() {
            debug!("quiz fetch already in flight");
            return;
        }
        loading.set(true);
        error.set(None);
        last_request.set(Some(request));

        let started_in = generation();
        let quiz_service = quiz_service.clone();
        spawn(async move {
            let result = start_quiz(&quiz_service, &request).await;
            if generation() != started_in {
                debug!("dropping stale quiz fetch for {request:?}");
                return;
            }
            match result {
                Ok(session) => vm.write().begin(session),
                Err(err) => error.set(Some(err)),
            }
            loading.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, vm);
            }
        }
    }

    let screen = vm.read().screen();
    let params = vm.read().params();

    rsx! {
        div { class: "page quiz-page",
            button {
                id: "go-home",
                class: "btn btn-secondary home-button",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::GoHome),
                "Go home"
            }
            div { class: "quiz-card",
                match screen {
                    QuizScreen::Start => rsx! {
                        StartPanel {
                            params,
                            loading: loading(),
                            error: error(),
                            dispatch,
                        }
                    },
                    QuizScreen::Question(question) => rsx! {
                        QuestionPanel { question, dispatch }
                    },
                    QuizScreen::Score(score) => rsx! {
                        ScorePanel { score }
                    },
                }
            }
        }
    }
}

#[component]
fn StartPanel(
    params: QuizParams,
    loading: bool,
    error: Option<ViewError>,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let category_value = params.category.map_or("", Category::as_tag);

    rsx! {
        div { id: "start", class: "start-panel",
            h1 { class: "quiz-title", "Devquiz" }
            p { class: "quiz-intro",
                "You can start a completely random quiz or select difficulty and category"
            }
            form {
                class: "quiz-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(QuizIntent::StartFiltered);
                },
                div { class: "quiz-selects",
                    select {
                        id: "difficulty",
                        value: params.difficulty.as_query_value(),
                        onchange: move |evt: FormEvent| match evt.value().parse::<Difficulty>() {
                            Ok(difficulty) => dispatch.call(QuizIntent::SetDifficulty(difficulty)),
                            Err(err) => debug!("{err}"),
                        },
                        for difficulty in Difficulty::ALL {
                            option {
                                value: difficulty.as_query_value(),
                                selected: difficulty == params.difficulty,
                                "{difficulty.label()}"
                            }
                        }
                    }
                    select {
                        id: "category",
                        value: category_value,
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            let category = if value.is_empty() {
                                None
                            } else {
                                value.parse::<Category>().ok()
                            };
                            dispatch.call(QuizIntent::SetCategory(category));
                        },
                        option { value: "", "Select category" }
                        for category in Category::ALL {
                            option {
                                value: category.as_tag(),
                                selected: params.category == Some(category),
                                "{category.label()}"
                            }
                        }
                    }
                }
                div { class: "quiz-actions",
                    button {
                        id: "randomQuiz",
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| dispatch.call(QuizIntent::StartRandom),
                        "Get Random Quiz"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading,
                        "Get Quiz"
                    }
                }
            }
            if loading {
                p { class: "quiz-status", "Loading..." }
            }
            if let Some(err) = error {
                div { class: "quiz-error",
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| dispatch.call(QuizIntent::Retry),
                        "Retry"
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, dispatch: Callback<QuizIntent>) -> Element {
    let buttons = question.answers.iter().map(|answer| {
        let dom_key = answer.key.to_string();
        let key = answer.key.clone();
        let text = answer.text.clone();
        rsx! {
            button {
                key: "{dom_key}",
                class: "btn btn-primary answer-button",
                r#type: "button",
                onclick: move |_| dispatch.call(QuizIntent::Answer(key.clone())),
                p { class: "text-pretty", "{text}" }
            }
        }
    });

    rsx! {
        div { class: "question-panel",
            progress { class: "quiz-progress", max: "100", value: "{question.progress}" }
            p { class: "question-counter", "Question {question.number} of {question.total}" }
            p { class: "question-text", "{question.text}" }
            div { class: "answer-grid", {buttons} }
        }
    }
}

#[component]
fn ScorePanel(score: ScoreVm) -> Element {
    rsx! {
        div { class: "score-section", "{score.headline()}" }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
