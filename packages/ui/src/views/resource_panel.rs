//! One card per entity: heading, table, add/edit dialog and delete confirmation.
//!
//! The panel owns two signals, a [`ResourceController`] and a [`FormModal`]. Event
//! handlers run the synchronous half of each step, release the signal, await the
//! backend in a spawned task, then write the result back.

use std::marker::PhantomData;

use api::EntityId;
use dioxus::prelude::*;
use store::{rows, FormModal, Reconcile, ResourceController, Tabular};

use crate::backend::{use_backend, AppBackend};
use crate::components::{Button, ButtonVariant, Spinner};

use super::{ConfirmDeleteDialog, FieldInput, FormModalView, ResourceTable, TableRow};

fn reload<E: Tabular>(mut controller: Signal<ResourceController<E>>, backend: AppBackend) {
    if !controller.write().begin_refresh() {
        return;
    }
    spawn(async move {
        let result = api::list::<E>(&backend).await;
        controller.write().finish_refresh(result);
    });
}

/// Table card for entity `E`, e.g. `ResourcePanel::<api::Hero> {}`.
#[component]
pub fn ResourcePanel<E: Tabular>(#[props(default)] resource: PhantomData<E>) -> Element {
    let _ = resource;
    let backend = use_backend();
    let mut controller = use_signal(ResourceController::<E>::new);
    let mut form = use_signal(FormModal::<E>::new);

    use_hook({
        let backend = backend.clone();
        move || reload(controller, backend)
    });

    let open_add = move |_| {
        controller.write().begin_add();
        form.write().open_add();
    };

    let open_edit = move |id: EntityId| {
        let Some(entity) = controller.read().get(&id).cloned() else {
            return;
        };
        if form.write().open_edit(&entity) {
            controller.write().begin_edit(entity);
        }
    };

    let close_form = move |_| {
        form.write().close();
        let mut ctrl = controller.write();
        ctrl.cancel_add();
        ctrl.cancel_edit();
    };

    let submit_backend = backend.clone();
    let submit = move |_| {
        let Some(submission) = form.write().begin_submit() else {
            return;
        };
        let backend = submit_backend.clone();
        spawn(async move {
            let result = submission.send(&backend).await;
            let saved = form.write().finish_submit(result);
            if let Some(saved) = saved {
                let reconcile = controller.write().apply_saved(saved);
                if reconcile == Reconcile::Refetch {
                    reload(controller, backend);
                }
            }
        });
    };

    let ask_delete = move |id: EntityId| {
        let Some(entity) = controller.read().get(&id).cloned() else {
            return;
        };
        controller.write().begin_delete(entity);
    };

    let delete_backend = backend.clone();
    let confirm_delete = move |_| {
        let Some(id) = controller.write().start_delete() else {
            return;
        };
        let backend = delete_backend.clone();
        spawn(async move {
            let result = api::delete::<E>(&backend, &id).await;
            controller.write().finish_delete(&id, result);
        });
    };

    let ctrl = controller.read();
    let table_rows: Vec<TableRow> = rows::<E>(&ctrl)
        .into_iter()
        .map(|row| TableRow {
            key: row.key,
            id: row.entity.id().cloned(),
            cells: row.cells,
            busy: row.busy,
        })
        .collect();
    let loading = ctrl.loading();
    let error = ctrl.error().map(str::to_string);
    let alert = ctrl.alert().map(str::to_string);
    let pending = ctrl.dialog().message().map(|message| {
        let busy = ctrl
            .dialog()
            .pending()
            .and_then(|e| e.id())
            .is_some_and(|id| ctrl.is_busy(id));
        (message, busy)
    });
    drop(ctrl);

    let modal = form.read();
    let modal_view = modal.is_open().then(|| {
        let fields: Vec<FieldInput> = modal
            .visible_fields()
            .map(|spec| FieldInput {
                spec: *spec,
                value: modal.field(spec.name).to_string(),
                required: spec.is_required(modal.mode()),
            })
            .collect();
        (modal.title(), fields, modal.error().map(str::to_string), modal.is_saving())
    });
    drop(modal);

    let heading = E::TITLE;
    let noun = E::NOUN;

    rsx! {
        section {
            class: "panel",
            header {
                class: "panel-header",
                h2 { class: "panel-title", "{heading}" }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: loading,
                    onclick: open_add,
                    "Add {noun}"
                }
            }

            if let Some(message) = alert {
                div {
                    class: "panel-alert",
                    role: "alert",
                    span { "{message}" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| controller.write().dismiss_alert(),
                        "Dismiss"
                    }
                }
            }

            if loading {
                Spinner {}
            } else if let Some(message) = error {
                div {
                    class: "panel-error",
                    span { "{message}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: {
                            let backend = backend.clone();
                            move |_| reload(controller, backend.clone())
                        },
                        "Retry"
                    }
                }
            } else {
                ResourceTable {
                    columns: E::COLUMNS.to_vec(),
                    rows: table_rows,
                    on_edit: open_edit,
                    on_delete: ask_delete,
                }
            }
        }

        if let Some((title, fields, error, saving)) = modal_view {
            FormModalView {
                title,
                fields,
                error,
                saving,
                on_input: move |(name, value): (&'static str, String)| form.write().set_field(name, value),
                on_submit: submit,
                on_close: close_form,
            }
        }

        if let Some((message, busy)) = pending {
            ConfirmDeleteDialog {
                message,
                busy,
                on_confirm: confirm_delete,
                on_cancel: move |_| controller.write().cancel_delete(),
            }
        }
    }
}
