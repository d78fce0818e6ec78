use serde::{Deserialize, Serialize};

use super::lenient;
use super::resource::{FieldKind, FieldSpec, FormMode, Resource};
use super::EntityId;

/// Customer testimonial.
///
/// Older backend builds stored these as `title`/`description`; both spellings are
/// read, `name`/`content` win when both are present, and writes always use
/// `name`/`content`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TestimonialWire")]
pub struct Testimonial {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: String,
    pub content: String,
    pub image_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialWire {
    #[serde(default)]
    id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    image_url: Option<String>,
}

fn prefer(primary: Option<String>, legacy: Option<String>) -> String {
    primary
        .filter(|s| !s.is_empty())
        .or(legacy)
        .unwrap_or_default()
}

impl From<TestimonialWire> for Testimonial {
    fn from(wire: TestimonialWire) -> Self {
        Self {
            id: wire.id,
            name: prefer(wire.name, wire.title),
            content: prefer(wire.content, wire.description),
            image_url: wire.image_url.unwrap_or_default(),
        }
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text),
    FieldSpec::new("content", "Content", FieldKind::Multiline),
    FieldSpec::new("imageUrl", "Image URL", FieldKind::Url)
        .optional()
        .placeholder("https://example.com/avatar.jpg"),
];

impl Resource for Testimonial {
    const PATH: &'static str = "/testimonials";
    const NOUN: &'static str = "testimonial";
    const PLURAL: &'static str = "testimonials";
    const TITLE: &'static str = "Testimonials";
    const FIELDS: &'static [FieldSpec] = FIELDS;

    fn id(&self) -> Option<&EntityId> {
        self.id.as_ref()
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "content" => Some(&self.content),
            "imageUrl" => Some(&self.image_url),
            _ => None,
        }
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut String> {
        match name {
            "name" => Some(&mut self.name),
            "content" => Some(&mut self.content),
            "imageUrl" => Some(&mut self.image_url),
            _ => None,
        }
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn required_message(_mode: FormMode) -> &'static str {
        "Name and content are required"
    }
}
