use serde::{Deserialize, Serialize};

use super::lenient;
use super::resource::{FieldKind, FieldSpec, FormMode, Resource};
use super::EntityId;

/// "About us" blurb. No image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutUs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::Multiline),
];

impl Resource for AboutUs {
    const PATH: &'static str = "/aboutus";
    const NOUN: &'static str = "about us entry";
    const PLURAL: &'static str = "about us entries";
    const TITLE: &'static str = "About Us";
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "title" => Some(&mut self.title),
            "description" => Some(&mut self.description),
            _ => None,
        }
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn required_message(_mode: FormMode) -> &'static str {
        "Title and description are required"
    }
}
