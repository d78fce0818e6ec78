use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::EntityId;

/// Whether a form is creating a new entity or editing an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Input widget used to render a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Multiline,
    Url,
}

/// When a field must be filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Always,
    /// Required when creating; not shown at all when editing.
    OnCreate,
    Optional,
}

/// Static description of one editable field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            requirement: Requirement::Always,
            placeholder: None,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.requirement = Requirement::Optional;
        self
    }

    pub const fn create_only(mut self) -> Self {
        self.requirement = Requirement::OnCreate;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }

    pub fn is_required(&self, mode: FormMode) -> bool {
        match self.requirement {
            Requirement::Always => true,
            Requirement::OnCreate => mode == FormMode::Create,
            Requirement::Optional => false,
        }
    }

    pub fn is_visible(&self, mode: FormMode) -> bool {
        !(self.requirement == Requirement::OnCreate && mode == FormMode::Edit)
    }

    /// Passwords are sent exactly as typed.
    pub fn trims(&self) -> bool {
        self.kind != FieldKind::Password
    }
}

/// A content entity managed through the dashboard.
///
/// Implementors are plain serde structs whose [`Default`] value is the empty draft.
pub trait Resource:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + 'static
{
    /// Collection endpoint, e.g. `/hero`.
    const PATH: &'static str;
    /// Singular lowercase noun used in messages.
    const NOUN: &'static str;
    /// Plural lowercase noun used in messages.
    const PLURAL: &'static str;
    /// Heading for the entity's table.
    const TITLE: &'static str;
    const FIELDS: &'static [FieldSpec];
    /// Replacement for the generic 409 message.
    const CONFLICT_MESSAGE: Option<&'static str> = None;

    fn id(&self) -> Option<&EntityId>;

    fn field(&self, name: &str) -> Option<&str>;

    fn field_mut(&mut self, name: &str) -> Option<&mut String>;

    /// Text naming this item in confirmations and table cells.
    fn display_name(&self) -> &str;

    /// Message shown when a required field is blank.
    fn required_message(mode: FormMode) -> &'static str;

    /// Draft an edit form starts from.
    fn edit_draft(&self) -> Self {
        self.clone()
    }

    /// Last adjustments to a trimmed draft before it is sent.
    fn prepare(&mut self, _mode: FormMode) {}

    fn item_path(id: &EntityId) -> String {
        format!("{}/{}", Self::PATH, id)
    }

    /// True if any field required in `mode` is blank after trimming.
    fn missing_required(&self, mode: FormMode) -> bool {
        Self::FIELDS
            .iter()
            .filter(|spec| spec.is_required(mode))
            .any(|spec| self.field(spec.name).map_or(true, |v| v.trim().is_empty()))
    }
}
