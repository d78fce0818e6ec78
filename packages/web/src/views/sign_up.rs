//! Registration page backed by `store::RegisterForm`.

use api::UserRole;
use dioxus::prelude::*;
use store::RegisterForm;
use ui::components::{Button, ButtonVariant, Input};
use ui::use_backend;

#[component]
pub fn SignUp() -> Element {
    let backend = use_backend();
    let mut form = use_signal(RegisterForm::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            let result = api::register(&backend, &request).await;
            form.write().finish_submit(result);
        });
    };

    let state = form.read().clone();
    let selected_role = state.role.map(UserRole::label).unwrap_or_default();

    rsx! {
        div {
            class: "auth-page",

            h1 { "Create Account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = state.error() {
                    div { class: "form-error", role: "alert", "{err}" }
                }
                if let Some(notice) = state.notice() {
                    div { class: "notice", "{notice}" }
                }

                Input {
                    r#type: "text",
                    placeholder: "Name",
                    value: state.name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: state.email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }

                select {
                    value: selected_role,
                    onchange: move |evt| form.write().role = UserRole::from_label(&evt.value()),
                    option { value: "", "Select user type" }
                    for role in UserRole::ALL {
                        option {
                            key: "{role:?}",
                            value: role.label(),
                            {role.label()}
                        }
                    }
                }

                Input {
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: state.password.clone(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: state.confirm_password.clone(),
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }

                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: state.agreed,
                        onchange: move |evt: FormEvent| form.write().agreed = evt.checked(),
                    }
                    "I agree to the terms and conditions"
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: state.is_submitting(),
                    if state.is_submitting() { "Creating account..." } else { "Sign up" }
                }
            }
        }
    }
}
