use api::EntityId;
use dioxus::prelude::*;
use store::{Cell, Tone};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaPen, FaTrashCan};
use crate::Icon;

/// A row as the table renders it. Actions are bound to `id`; rows without one
/// have not been saved and offer no actions.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub key: String,
    pub id: Option<EntityId>,
    pub cells: Vec<Cell>,
    pub busy: bool,
}

fn initial(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

#[component]
fn CellView(cell: Cell) -> Element {
    match cell {
        Cell::Avatar {
            image_url,
            title,
            subtitle,
        } => rsx! {
            div {
                class: "cell-avatar",
                if let Some(url) = image_url {
                    img { class: "avatar", src: "{url}", alt: "{title}" }
                } else {
                    span { class: "avatar avatar-initial", {initial(&title)} }
                }
                div {
                    class: "cell-avatar-text",
                    span { class: "cell-title", "{title}" }
                    if let Some(sub) = subtitle {
                        span { class: "cell-subtitle", "{sub}" }
                    }
                }
            }
        },
        Cell::Text(text) => rsx! {
            span { class: "cell-text", "{text}" }
        },
        Cell::Badge { label, tone } => {
            let tone = match tone {
                Tone::Success => "badge badge-success",
                Tone::Muted => "badge badge-muted",
            };
            rsx! {
                span { class: tone, "{label}" }
            }
        }
    }
}

/// Entity table with an action column.
#[component]
pub fn ResourceTable(
    columns: Vec<&'static str>,
    rows: Vec<TableRow>,
    on_edit: EventHandler<EntityId>,
    on_delete: EventHandler<EntityId>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "table-empty", "Nothing here yet." }
        };
    }

    rsx! {
        table {
            class: "resource-table",
            thead {
                tr {
                    for column in columns {
                        th { key: "{column}", "{column}" }
                    }
                    th { class: "col-action", "action" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        key: "{row.key}",
                        class: if row.busy { "row-busy" } else { "" },
                        for (i, cell) in row.cells.into_iter().enumerate() {
                            td { key: "{i}", CellView { cell } }
                        }
                        td {
                            class: "col-action",
                            Button {
                                variant: ButtonVariant::Ghost,
                                title: "Edit",
                                disabled: row.busy || row.id.is_none(),
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| {
                                        if let Some(id) = id.clone() {
                                            on_edit.call(id);
                                        }
                                    }
                                },
                                Icon { icon: FaPen, width: 14, height: 14 }
                                span { "Edit" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                class: "danger",
                                title: "Delete",
                                disabled: row.busy || row.id.is_none(),
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| {
                                        if let Some(id) = id.clone() {
                                            on_delete.call(id);
                                        }
                                    }
                                },
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                                span { if row.busy { "Deleting..." } else { "Delete" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
