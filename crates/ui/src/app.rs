use dioxus::prelude::*;

use crate::views::QuizWidget;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Trivia" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                QuizRoot {}
            }
        }
    }
}

/// Hosts the widget; "Play again" bumps the generation so it remounts fresh.
#[component]
pub fn QuizRoot() -> Element {
    let mut generation = use_signal(|| 0_u64);

    rsx! {
        main { class: "content",
            h1 { class: "title", "Trivia Quiz" }
            QuizWidget {
                key: "{generation}",
                on_play_again: move |()| generation.with_mut(|g| *g += 1),
            }
        }
    }
}
