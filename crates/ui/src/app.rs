use dioxus::prelude::*;
use dioxus_router::Router;
use log::error;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Devquiz" }

        main { class: "quiz-shell",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    error!("quiz view crashed: {errors:?}");
                    rsx! { QuizCrashed { report: format!("{errors:?}") } }
                },
                Router::<Route> {}
            }
        }
    }
}

/// Shown instead of the quiz when rendering fails; the running quiz is lost.
#[component]
fn QuizCrashed(report: String) -> Element {
    rsx! {
        div { class: "quiz-card quiz-crashed",
            h1 { class: "quiz-title", "Devquiz stopped" }
            p { "The quiz could not be shown. Restart the app to start a new quiz." }
            details {
                summary { "Error details" }
                pre { "{report}" }
            }
        }
    }
}
