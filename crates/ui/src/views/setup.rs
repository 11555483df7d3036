use dioxus::prelude::*;

use trivia_core::model::{Difficulty, MAX_AMOUNT, MIN_AMOUNT};

use crate::views::{ViewError, ViewState};
use crate::vm::{CategoryVm, SetupForm, parse_category_choice};

#[component]
pub fn SetupPanel(
    categories: ViewState<Vec<CategoryVm>>,
    form: SetupForm,
    starting: bool,
    notice: Option<ViewError>,
    on_start: EventHandler<()>,
) -> Element {
    let mut category = form.category;
    let mut amount = form.amount;
    let mut difficulty = form.difficulty;
    let selected_category = category().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        section { class: "panel setup-panel",
            h2 { "New quiz" }

            if let Some(err) = notice {
                div { class: "notice", role: "alert", "{err.message()}" }
            }

            label { r#for: "setup-category", "Category" }
            match categories {
                ViewState::Loading | ViewState::Idle => rsx! {
                    p { class: "muted", "Loading categories..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "muted", "{err.message()}" }
                },
                ViewState::Ready(list) => rsx! {
                    select {
                        id: "setup-category",
                        value: "{selected_category}",
                        onchange: move |evt: FormEvent| category.set(parse_category_choice(&evt.value())),
                        option { value: "", "Any category" }
                        for item in list {
                            option { key: "{item.id}", value: "{item.id}", "{item.name}" }
                        }
                    }
                },
            }

            label { r#for: "setup-amount", "Number of questions" }
            input {
                id: "setup-amount",
                r#type: "number",
                min: "{MIN_AMOUNT}",
                max: "{MAX_AMOUNT}",
                value: "{amount}",
                oninput: move |evt: FormEvent| amount.set(evt.value()),
            }

            fieldset { class: "difficulty",
                legend { "Difficulty" }
                for level in Difficulty::ALL {
                    label { key: "{level.as_str()}", class: "difficulty-option",
                        input {
                            r#type: "radio",
                            name: "difficulty",
                            value: level.as_str(),
                            checked: difficulty() == Some(level),
                            onchange: move |_| difficulty.set(Some(level)),
                        }
                        "{level.label()}"
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "setup-start",
                r#type: "button",
                disabled: starting,
                onclick: move |_| on_start.call(()),
                if starting { "Loading questions..." } else { "Start quiz" }
            }
        }
    }
}
