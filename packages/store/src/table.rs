//! Row view models for the entity tables.
//!
//! [`rows`] is a pure function of a controller's state: it reads the items and the
//! busy set and produces one [`RowView`] per item. The view binds the edit and delete
//! triggers to `RowView::entity`.

use api::{AboutUs, EntityId, Feature, Hero, Resource, Testimonial, User};

use crate::controller::ResourceController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Muted,
}

/// Content of one table cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// Picture (or initial) with a title and optional second line.
    Avatar {
        image_url: Option<String>,
        title: String,
        subtitle: Option<String>,
    },
    Text(String),
    Badge { label: String, tone: Tone },
}

impl Cell {
    fn text(value: &str) -> Self {
        Cell::Text(value.to_string())
    }

    fn avatar(image_url: &str, title: &str, subtitle: Option<&str>) -> Self {
        let image_url = image_url.trim();
        Cell::Avatar {
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
            title: title.to_string(),
            subtitle: subtitle.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowView<E> {
    /// Stable key for the renderer; the id, or the row index for unsaved items.
    pub key: String,
    pub cells: Vec<Cell>,
    /// A delete for this row is in flight.
    pub busy: bool,
    pub entity: E,
}

/// Column headings and cell rendering for an entity. The action column is added
/// by the view.
pub trait Tabular: Resource {
    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<Cell>;
}

pub fn rows<E: Tabular>(controller: &ResourceController<E>) -> Vec<RowView<E>> {
    controller
        .items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let id = item.id();
            RowView {
                key: id.map_or_else(|| format!("row-{index}"), EntityId::to_string),
                cells: item.cells(),
                busy: id.is_some_and(|id| controller.is_busy(id)),
                entity: item.clone(),
            }
        })
        .collect()
}

impl Tabular for User {
    const COLUMNS: &'static [&'static str] = &["user", "user type", "status"];

    fn cells(&self) -> Vec<Cell> {
        let user_type = if self.user_type.trim().is_empty() {
            "No Type"
        } else {
            self.user_type.as_str()
        };
        let status = if self.is_active() {
            Cell::Badge {
                label: "active".to_string(),
                tone: Tone::Success,
            }
        } else {
            Cell::Badge {
                label: "inactive".to_string(),
                tone: Tone::Muted,
            }
        };
        vec![
            Cell::avatar("", &self.name, Some(&self.email)),
            Cell::text(user_type),
            status,
        ]
    }
}

impl Tabular for Hero {
    const COLUMNS: &'static [&'static str] = &["hero", "title", "description"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::avatar(&self.image_url, &self.title, Some(&self.description)),
            Cell::text(&self.title),
            Cell::text(&self.description),
        ]
    }
}

impl Tabular for Feature {
    const COLUMNS: &'static [&'static str] = &["feature", "title", "description"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::avatar(&self.image_url, &self.title, Some(&self.description)),
            Cell::text(&self.title),
            Cell::text(&self.description),
        ]
    }
}

impl Tabular for Testimonial {
    const COLUMNS: &'static [&'static str] = &["testimonial", "name", "content"];

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::avatar(&self.image_url, &self.name, None),
            Cell::text(&self.name),
            Cell::text(&self.content),
        ]
    }
}

impl Tabular for AboutUs {
    const COLUMNS: &'static [&'static str] = &["title", "description"];

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::text(&self.title), Cell::text(&self.description)]
    }
}
