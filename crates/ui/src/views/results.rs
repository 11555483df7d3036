use dioxus::prelude::*;

use crate::vm::ScoreVm;

#[component]
pub fn ResultsPanel(score: ScoreVm, on_play_again: EventHandler<()>) -> Element {
    rsx! {
        section { class: "panel results-panel",
            h2 { "Results" }
            p { class: "score", "{score.message}" }
            p { class: "muted", "Time: {score.elapsed}" }
            button {
                class: "btn btn-primary",
                id: "results-play-again",
                r#type: "button",
                onclick: move |_| on_play_again.call(()),
                "Play again"
            }
        }
    }
}
