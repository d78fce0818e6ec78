use serde::{Deserialize, Serialize};

use super::lenient;
use super::resource::{FieldKind, FieldSpec, FormMode, Resource};
use super::EntityId;

/// Product feature card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    /// Empty when the card has no image.
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

impl Resource for Feature {
    const PATH: &'static str = "/features";
    const NOUN: &'static str = "feature";
    const PLURAL: &'static str = "features";
    const TITLE: &'static str = "Features";
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = Feature {
            title: "Fast".into(),
            description: "Loads quickly".into(),
            image_url: "https://example.com/fast.png".into(),
            ..Feature::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "title": "Fast",
                "description": "Loads quickly",
                "imageUrl": "https://example.com/fast.png",
            })
        );
    }

    #[test]
    fn test_missing_image_defaults_to_empty() {
        let feature: Feature =
            serde_json::from_value(json!({"id": 3, "title": "Fast", "description": null})).unwrap();
        assert_eq!(feature.id, Some(EntityId::from(3)));
        assert_eq!(feature.description, "");
        assert_eq!(feature.image_url, "");
        assert_eq!(Feature::item_path(feature.id.as_ref().unwrap()), "/features/3");
    }

    #[test]
    fn test_image_is_optional() {
        let draft = Feature {
            title: "Fast".into(),
            description: "Loads quickly".into(),
            ..Feature::default()
        };
        assert!(!draft.missing_required(FormMode::Create));
        assert!(Feature {
            title: "  ".into(),
            ..draft
        }
        .missing_required(FormMode::Edit));
    }
}
