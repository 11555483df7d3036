use dioxus::prelude::*;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionPanel(
    question: QuestionVm,
    selection: Signal<Option<String>>,
    on_next: EventHandler<()>,
) -> Element {
    let mut selection = selection;
    let current = selection();

    rsx! {
        section { class: "panel question-panel",
            header { class: "question-header",
                h2 { "{question.heading}" }
                if !question.meta.is_empty() {
                    p { class: "question-meta", dangerous_inner_html: "{question.meta}" }
                }
            }
            p { class: "question-text", dangerous_inner_html: "{question.text_html}" }

            div { class: "answers", role: "radiogroup",
                for (index, option) in question.options.iter().cloned().enumerate() {
                    label { key: "{question.number}-{index}", class: "answer",
                        input {
                            r#type: "radio",
                            name: "answer-{question.number}",
                            checked: current.as_deref() == Some(option.value.as_str()),
                            onchange: {
                                let value = option.value.clone();
                                move |_| selection.set(Some(value.clone()))
                            },
                        }
                        span { dangerous_inner_html: "{option.label_html}" }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                id: "question-next",
                r#type: "button",
                onclick: move |_| on_next.call(()),
                "{question.next_label()}"
            }
        }
    }
}
