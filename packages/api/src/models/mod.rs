//! Wire models for the managed content entities.
//!
//! Every entity implements [`Resource`], which carries the configuration the generic
//! controller and form need: endpoint, field list, validation messages and the
//! field used to name an item in confirmations.

mod about_us;
mod feature;
mod hero;
mod id;
mod register;
mod resource;
mod testimonial;
mod user;

pub use about_us::AboutUs;
pub use feature::Feature;
pub use hero::Hero;
pub use id::EntityId;
pub use register::{RegisterRequest, UserRole};
pub use resource::{FieldKind, FieldSpec, FormMode, Requirement, Resource};
pub use testimonial::Testimonial;
pub use user::User;

/// Deserializers for backends that send numbers or nulls where text is expected.
pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn render(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(render(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        Ok(render(Value::deserialize(deserializer)?))
    }
}
