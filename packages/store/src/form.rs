//! # Form modal state for adding and editing an entity
//!
//! A [`FormModal`] owns one draft. Submitting is split so a UI can release its
//! state handle while the request is in flight:
//!
//! ```text
//! begin_submit() ──► Submission::send(backend) ──► finish_submit(result)
//!   validate + trim        POST or PUT               close or show error
//! ```
//!
//! [`FormModal::submit`] runs all three for callers that hold the form mutably
//! across the await. Validation failures never reach the network.

use api::{Action, ApiError, Backend, EntityId, FieldSpec, FormMode, Resource};

/// A validated, trimmed payload ready to be sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission<E> {
    pub mode: FormMode,
    pub target: Option<EntityId>,
    pub payload: E,
}

impl<E: Resource> Submission<E> {
    /// Create sends `POST {PATH}`, edit sends `PUT {PATH}/{id}`.
    pub async fn send(&self, backend: &impl Backend) -> Result<Option<E>, ApiError> {
        match (self.mode, &self.target) {
            (FormMode::Edit, Some(id)) => api::update(backend, id, &self.payload).await,
            _ => api::create(backend, &self.payload).await,
        }
    }
}

/// Result of a successful submit, handed to the controller.
#[derive(Clone, Debug, PartialEq)]
pub struct Saved<E> {
    pub mode: FormMode,
    /// The server's representation, when it sent one.
    pub entity: Option<E>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormModal<E> {
    open: bool,
    mode: FormMode,
    draft: E,
    target: Option<EntityId>,
    saving: bool,
    error: Option<String>,
}

impl<E: Default> Default for FormModal<E> {
    fn default() -> Self {
        Self {
            open: false,
            mode: FormMode::Create,
            draft: E::default(),
            target: None,
            saving: false,
            error: None,
        }
    }
}

impl<E: Resource> FormModal<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &E {
        &self.draft
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn title(&self) -> String {
        let verb = match self.mode {
            FormMode::Create => "Add",
            FormMode::Edit => "Edit",
        };
        format!("{verb} {}", E::NOUN)
    }

    /// Open with an empty draft.
    pub fn open_add(&mut self) {
        *self = Self {
            open: true,
            ..Self::default()
        };
    }

    /// Open pre-filled from `entity`. Refuses entities the server has not saved.
    pub fn open_edit(&mut self, entity: &E) -> bool {
        let Some(id) = entity.id().cloned() else {
            return false;
        };
        *self = Self {
            open: true,
            mode: FormMode::Edit,
            draft: entity.edit_draft(),
            target: Some(id),
            saving: false,
            error: None,
        };
        true
    }

    /// Discard the draft and any error.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Fields rendered in the current mode.
    pub fn visible_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        E::FIELDS.iter().filter(move |spec| spec.is_visible(self.mode))
    }

    pub fn field(&self, name: &str) -> &str {
        self.draft.field(name).unwrap_or_default()
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        match self.draft.field_mut(name) {
            Some(slot) => *slot = value.into(),
            None => tracing::warn!(resource = E::NOUN, field = name, "unknown form field"),
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.draft.missing_required(self.mode) {
            Err(E::required_message(self.mode))
        } else {
            Ok(())
        }
    }

    /// Validate, trim and mark the form saving. Returns `None` without side
    /// effects other than the error text when nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<Submission<E>> {
        if self.saving {
            return None;
        }
        if let Err(message) = self.validate() {
            self.error = Some(message.to_string());
            return None;
        }

        let mut payload = self.draft.clone();
        for spec in E::FIELDS.iter().filter(|spec| spec.trims()) {
            if let Some(value) = payload.field_mut(spec.name) {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
            }
        }
        payload.prepare(self.mode);

        self.saving = true;
        self.error = None;
        Some(Submission {
            mode: self.mode,
            target: self.target.clone(),
            payload,
        })
    }

    /// Close on success, keep the draft and show the error on failure.
    pub fn finish_submit(&mut self, result: Result<Option<E>, ApiError>) -> Option<Saved<E>> {
        self.saving = false;
        match result {
            Ok(entity) => {
                tracing::info!(resource = E::NOUN, mode = ?self.mode, "saved");
                let saved = Saved {
                    mode: self.mode,
                    entity,
                };
                self.close();
                Some(saved)
            }
            Err(err) => {
                let action = match self.mode {
                    FormMode::Create => Action::Create,
                    FormMode::Edit => Action::Update,
                };
                tracing::error!(resource = E::NOUN, error = %err, "save failed");
                self.error = Some(err.describe(action, E::NOUN, E::CONFLICT_MESSAGE));
                None
            }
        }
    }

    pub async fn submit(&mut self, backend: &impl Backend) -> Option<Saved<E>> {
        let submission = self.begin_submit()?;
        let result = submission.send(backend).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Reconcile, ResourceController};
    use api::{AboutUs, ErrorBody, Feature, Hero, MemoryBackend, Resource, Testimonial, User};
    use serde_json::json;

    #[tokio::test]
    async fn test_add_hero_then_list_shows_it() {
        let backend = MemoryBackend::new();
        let mut ctrl = ResourceController::<Hero>::new();
        let mut form = FormModal::<Hero>::new();

        ctrl.begin_add();
        form.open_add();
        form.set_field("title", "Launch");
        form.set_field("description", "New launch");

        let saved = form.submit(&backend).await.unwrap();
        assert_eq!(ctrl.apply_saved(saved), Reconcile::Patched);
        assert!(!form.is_open());
        assert!(!ctrl.is_adding());

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/hero");
        assert_eq!(
            requests[0].body,
            Some(json!({"title": "Launch", "description": "New launch", "imageUrl": ""}))
        );

        assert_eq!(ctrl.items().len(), 1);
        assert_eq!(ctrl.items()[0].id, Some(EntityId::from("h1")));
        assert_eq!(ctrl.items()[0].title, "Launch");
    }

    #[tokio::test]
    async fn test_missing_password_sends_nothing() {
        let backend = MemoryBackend::new();
        let mut form = FormModal::<User>::new();
        form.open_add();
        form.set_field("name", "Ada");
        form.set_field("email", "ada@example.com");

        assert!(form.submit(&backend).await.is_none());
        assert!(backend.requests().is_empty());
        assert!(form.is_open());
        assert!(!form.is_saving());
        assert_eq!(form.error(), Some("Name, email and password are required"));
    }

    async fn assert_blank_rejected<E: Resource>(fields: &[(&str, &str)], message: &str) {
        let backend = MemoryBackend::new();
        let mut form = FormModal::<E>::new();
        form.open_add();
        for (name, value) in fields {
            form.set_field(name, *value);
        }

        assert!(form.submit(&backend).await.is_none(), "{}", E::NOUN);
        assert!(backend.requests().is_empty(), "{}", E::NOUN);
        assert!(form.is_open());
        assert!(!form.is_saving());
        assert_eq!(form.error(), Some(message));
    }

    #[tokio::test]
    async fn test_blank_required_field_sends_nothing_for_every_entity() {
        assert_blank_rejected::<User>(
            &[("name", "Ada"), ("email", "  "), ("password", "secret")],
            "Name, email and password are required",
        )
        .await;
        assert_blank_rejected::<Hero>(
            &[("title", "Launch"), ("description", "\t")],
            "Title and description are required",
        )
        .await;
        assert_blank_rejected::<Feature>(
            &[("title", " "), ("description", "Fast"), ("imageUrl", "https://x/f.png")],
            "Title and description are required",
        )
        .await;
        assert_blank_rejected::<Testimonial>(
            &[("name", "Grace"), ("content", "   ")],
            "Name and content are required",
        )
        .await;
        assert_blank_rejected::<AboutUs>(
            &[("title", ""), ("description", "Mission")],
            "Title and description are required",
        )
        .await;
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut form = FormModal::<Hero>::new();
        form.open_add();
        form.set_field("title", "   ");
        form.set_field("description", "Body");
        assert_eq!(form.validate(), Err("Title and description are required"));
    }

    #[test]
    fn test_submission_trims_text_but_not_password() {
        let mut form = FormModal::<User>::new();
        form.open_add();
        form.set_field("name", "  Ada ");
        form.set_field("email", " ada@example.com");
        form.set_field("password", " pw with spaces ");

        let submission = form.begin_submit().unwrap();
        assert!(form.is_saving());
        assert_eq!(submission.payload.name, "Ada");
        assert_eq!(submission.payload.email, "ada@example.com");
        assert_eq!(submission.payload.password, " pw with spaces ");
        assert_eq!(submission.payload.user_type, "User");

        assert!(form.begin_submit().is_none(), "no second submit while saving");
    }

    #[tokio::test]
    async fn test_edit_about_us_sends_full_payload() {
        let stored = AboutUs {
            id: Some(EntityId::from("a1")),
            title: "Who we are".into(),
            description: "Old".into(),
        };
        let backend = MemoryBackend::new().with_items("/aboutus", &[stored.clone()]);
        let mut ctrl = ResourceController::<AboutUs>::new();
        ctrl.refresh(&backend).await;

        let mut form = FormModal::<AboutUs>::new();
        assert!(form.open_edit(&stored));
        assert_eq!(form.title(), "Edit about us entry");
        form.set_field("description", "New");

        let saved = form.submit(&backend).await.unwrap();
        let put = backend.requests().pop().unwrap();
        assert_eq!(put.method, "PUT");
        assert_eq!(put.path, "/aboutus/a1");
        assert_eq!(
            put.body,
            Some(json!({"id": "a1", "title": "Who we are", "description": "New"}))
        );

        assert_eq!(ctrl.apply_saved(saved), Reconcile::Patched);
        assert_eq!(ctrl.items()[0].description, "New");
    }

    #[tokio::test]
    async fn test_empty_update_response_asks_for_refetch() {
        let stored = AboutUs {
            id: Some(EntityId::from("a1")),
            title: "Who we are".into(),
            description: "Old".into(),
        };
        let backend = MemoryBackend::new().with_items("/aboutus", &[stored.clone()]);
        backend.set_empty_writes(true);
        let mut ctrl = ResourceController::<AboutUs>::new();
        ctrl.refresh(&backend).await;

        let mut form = FormModal::<AboutUs>::new();
        form.open_edit(&stored);
        form.set_field("description", "New");
        let saved = form.submit(&backend).await.unwrap();

        assert_eq!(ctrl.apply_saved(saved), Reconcile::Refetch);
        assert_eq!(ctrl.items()[0].description, "Old");
        ctrl.refresh(&backend).await;
        assert_eq!(ctrl.items()[0].description, "New");
    }

    #[test]
    fn test_edit_user_hides_password() {
        let stored = User {
            id: Some(EntityId::from("u1")),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "leaked".into(),
            ..User::default()
        };
        let mut form = FormModal::<User>::new();
        form.open_edit(&stored);

        let names: Vec<_> = form.visible_fields().map(|spec| spec.name).collect();
        assert_eq!(names, ["name", "email", "userType"]);
        assert_eq!(form.field("password"), "");
        assert!(form.validate().is_ok());
    }

    #[tokio::test]
    async fn test_conflict_keeps_form_open() {
        let backend = MemoryBackend::new();
        backend.fail_next(ApiError::http(409, ErrorBody::default()));

        let mut form = FormModal::<User>::new();
        form.open_add();
        form.set_field("name", "Ada");
        form.set_field("email", "ada@example.com");
        form.set_field("password", "secret");

        assert!(form.submit(&backend).await.is_none());
        assert!(form.is_open());
        assert!(!form.is_saving());
        assert_eq!(form.field("name"), "Ada");
        assert_eq!(form.error(), Some("A user with this email already exists."));
    }

    #[test]
    fn test_open_edit_requires_saved_entity() {
        let mut form = FormModal::<Hero>::new();
        assert!(!form.open_edit(&Hero::default()));
        assert!(!form.is_open());
    }

    #[test]
    fn test_close_resets_draft() {
        let mut form = FormModal::<Hero>::new();
        form.open_add();
        form.set_field("title", "Draft");
        form.close();
        form.open_add();
        assert_eq!(form.field("title"), "");
        assert!(form.error().is_none());
    }
}
