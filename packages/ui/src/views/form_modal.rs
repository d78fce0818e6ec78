use api::{FieldKind, FieldSpec};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input, Label, Textarea};

use super::ModalOverlay;

/// One rendered field with its current value.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldInput {
    pub spec: FieldSpec,
    pub value: String,
    pub required: bool,
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Password => "password",
        FieldKind::Url => "url",
        FieldKind::Text | FieldKind::Multiline => "text",
    }
}

/// Add/edit dialog. Knows nothing about the entity beyond its field list.
#[component]
pub fn FormModalView(
    title: String,
    fields: Vec<FieldInput>,
    error: Option<String>,
    saving: bool,
    on_input: EventHandler<(&'static str, String)>,
    on_submit: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let submit_label = if saving { "Saving..." } else { "Save" };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            locked: saving,
            form {
                class: "modal-body",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                h2 { class: "modal-title", "{title}" }

                if let Some(err) = error {
                    div { class: "form-error", role: "alert", "{err}" }
                }

                for field in fields {
                    div {
                        key: "{field.spec.name}",
                        class: "modal-field",
                        Label {
                            html_for: "field-{field.spec.name}",
                            "{field.spec.label}"
                            if field.required {
                                span { class: "required-mark", " *" }
                            }
                        }
                        if field.spec.kind == FieldKind::Multiline {
                            Textarea {
                                id: "field-{field.spec.name}",
                                rows: "4",
                                value: field.value.clone(),
                                placeholder: field.spec.placeholder.unwrap_or_default(),
                                disabled: saving,
                                oninput: move |evt: FormEvent| on_input.call((field.spec.name, evt.value())),
                            }
                        } else {
                            Input {
                                id: "field-{field.spec.name}",
                                r#type: input_type(field.spec.kind),
                                value: field.value.clone(),
                                placeholder: field.spec.placeholder.unwrap_or_default(),
                                disabled: saving,
                                oninput: move |evt: FormEvent| on_input.call((field.spec.name, evt.value())),
                            }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        r#type: "button",
                        disabled: saving,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: saving,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
