use serde::{Deserialize, Serialize};

use super::lenient;
use super::resource::{FieldKind, FieldSpec, FormMode, Resource};
use super::EntityId;

/// Landing-page hero banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Empty when the banner has no image.
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_url: String,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text),
    FieldSpec::new("description", "Description", FieldKind::Multiline),
    FieldSpec::new("imageUrl", "Image URL", FieldKind::Url)
        .optional()
        .placeholder("https://example.com/image.jpg"),
];

impl Resource for Hero {
    const PATH: &'static str = "/hero";
    const NOUN: &'static str = "hero";
    const PLURAL: &'static str = "heroes";
    const TITLE: &'static str = "Heroes";
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(&self.title),
            "description" => Some(&self.description),
            "imageUrl" => Some(&self.image_url),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "title" => Some(&mut self.title),
            "description" => Some(&mut self.description),
            "imageUrl" => Some(&mut self.image_url),
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
