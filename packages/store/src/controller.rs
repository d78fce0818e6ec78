//! # Resource controller — one entity's list and its CRUD workflows
//!
//! [`ResourceController`] is the single owner of the items shown in an entity's
//! table. The list only changes in answer to the backend:
//!
//! | Event | Effect on `items` |
//! |-------|-------------------|
//! | successful refresh | replaced |
//! | failed refresh | emptied, `error` set |
//! | add/edit saved with a full entity | appended / replaced by id ([`Reconcile::Patched`]) |
//! | add/edit saved without one | untouched, caller refetches ([`Reconcile::Refetch`]) |
//! | successful delete | the deleted id is filtered out |
//! | failed delete | untouched, `alert` set |
//!
//! The delete flow is idle → pending confirmation ([`begin_delete`]) → in flight
//! ([`start_delete`], id marked busy) → idle ([`finish_delete`], busy cleared and
//! the dialog closed whatever the outcome).
//!
//! [`begin_delete`]: ResourceController::begin_delete
//! [`start_delete`]: ResourceController::start_delete
//! [`finish_delete`]: ResourceController::finish_delete

use std::collections::HashSet;

use api::{Action, ApiError, Backend, EntityId, FormMode, Resource};

use crate::dialog::ConfirmDialog;
use crate::form::Saved;

/// How the list was brought up to date after a successful write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconcile {
    /// The server's representation was spliced into the list.
    Patched,
    /// The server sent nothing usable; the caller should refresh.
    Refetch,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceController<E> {
    items: Vec<E>,
    loading: bool,
    error: Option<String>,
    adding: bool,
    editing: Option<E>,
    dialog: ConfirmDialog<E>,
    busy: HashSet<EntityId>,
    alert: Option<String>,
}

impl<E> Default for ResourceController<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            adding: false,
            editing: None,
            dialog: ConfirmDialog::default(),
            busy: HashSet::new(),
            alert: None,
        }
    }
}

impl<E: Resource> ResourceController<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_adding(&self) -> bool {
        self.adding
    }

    /// The loaded item with this id.
    pub fn get(&self, id: &EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == Some(id))
    }

    pub fn editing(&self) -> Option<&E> {
        self.editing.as_ref()
    }

    pub fn dialog(&self) -> &ConfirmDialog<E> {
        &self.dialog
    }

    pub fn is_busy(&self, id: &EntityId) -> bool {
        self.busy.contains(id)
    }

    /// Blocking message from a failed delete, until dismissed.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    // --- refresh ---

    /// Mark a refresh as started. Returns `false` if one is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            tracing::debug!(resource = E::PLURAL, "refresh already in flight");
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<E>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                tracing::debug!(resource = E::PLURAL, count = items.len(), "list loaded");
                self.items = items;
                self.error = None;
            }
            Err(err) => {
                tracing::error!(resource = E::PLURAL, error = %err, "failed to load list");
                self.items.clear();
                self.error = Some(err.describe(Action::Load, E::PLURAL, None));
            }
        }
    }

    pub async fn refresh(&mut self, backend: &impl Backend) {
        if !self.begin_refresh() {
            return;
        }
        let result = api::list::<E>(backend).await;
        self.finish_refresh(result);
    }

    // --- add / edit ---

    pub fn begin_add(&mut self) {
        self.adding = true;
    }

    pub fn cancel_add(&mut self) {
        self.adding = false;
    }

    /// Apply a successful create. Never both patches and asks for a refetch.
    pub fn complete_add(&mut self, created: Option<E>) -> Reconcile {
        self.adding = false;
        let Some(entity) = created else {
            return Reconcile::Refetch;
        };
        let Some(id) = entity.id().cloned() else {
            return Reconcile::Refetch;
        };
        match self.position(&id) {
            Some(index) => self.items[index] = entity,
            None => self.items.push(entity),
        }
        Reconcile::Patched
    }

    pub fn begin_edit(&mut self, entity: E) {
        self.editing = Some(entity);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Apply a successful update. Replaces the item with the same id, or asks for
    /// a refetch when the response is empty or names an id we do not hold.
    pub fn complete_edit(&mut self, updated: Option<E>) -> Reconcile {
        self.editing = None;
        let Some(entity) = updated else {
            return Reconcile::Refetch;
        };
        let index = entity.id().and_then(|id| self.position(id));
        match index {
            Some(index) => {
                self.items[index] = entity;
                Reconcile::Patched
            }
            None => Reconcile::Refetch,
        }
    }

    /// Route a form's success to the add or edit path.
    pub fn apply_saved(&mut self, saved: Saved<E>) -> Reconcile {
        match saved.mode {
            FormMode::Create => self.complete_add(saved.entity),
            FormMode::Edit => self.complete_edit(saved.entity),
        }
    }

    // --- delete ---

    pub fn begin_delete(&mut self, entity: E) {
        self.dialog.request(entity);
    }

    pub fn cancel_delete(&mut self) {
        self.dialog.cancel();
    }

    /// Mark the pending entity busy and return its id, or `None` if there is
    /// nothing to delete or the same id is already in flight.
    pub fn start_delete(&mut self) -> Option<EntityId> {
        let Some(id) = self.dialog.pending().and_then(|e| e.id()).cloned() else {
            tracing::warn!(resource = E::NOUN, "delete confirmed without a saved entity");
            self.dialog.cancel();
            return None;
        };
        if !self.busy.insert(id.clone()) {
            return None;
        }
        Some(id)
    }

    pub fn finish_delete(&mut self, id: &EntityId, result: Result<(), ApiError>) {
        self.busy.remove(id);
        self.dialog.cancel();
        match result {
            Ok(()) => {
                tracing::info!(resource = E::NOUN, %id, "deleted");
                self.items.retain(|item| item.id() != Some(id));
            }
            Err(err) => {
                tracing::error!(resource = E::NOUN, %id, error = %err, "delete failed");
                self.alert = Some(err.describe(Action::Delete, E::NOUN, None));
            }
        }
    }

    /// Run the whole confirm step. Returns `true` if the item was deleted.
    pub async fn confirm_delete(&mut self, backend: &impl Backend) -> bool {
        let Some(id) = self.start_delete() else {
            return false;
        };
        let result = api::delete::<E>(backend, &id).await;
        let deleted = result.is_ok();
        self.finish_delete(&id, result);
        deleted
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AboutUs, ErrorBody, Hero, MemoryBackend, Testimonial, User};

    fn hero(id: &str, title: &str) -> Hero {
        Hero {
            id: Some(EntityId::from(id)),
            title: title.into(),
            description: format!("{title} description"),
            ..Hero::default()
        }
    }

    fn testimonial(id: &str, name: &str) -> Testimonial {
        Testimonial {
            id: Some(EntityId::from(id)),
            name: name.into(),
            content: "Great".into(),
            ..Testimonial::default()
        }
    }

    #[tokio::test]
    async fn test_refresh_loads_items() {
        let backend = MemoryBackend::new().with_items("/hero", &[hero("h1", "A"), hero("h2", "B")]);
        let mut ctrl = ResourceController::<Hero>::new();

        ctrl.refresh(&backend).await;
        assert!(!ctrl.loading());
        assert!(ctrl.error().is_none());
        assert_eq!(ctrl.items().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let backend = MemoryBackend::new().with_items("/hero", &[hero("h1", "A"), hero("h2", "B")]);
        let mut ctrl = ResourceController::<Hero>::new();

        ctrl.refresh(&backend).await;
        let first = ctrl.items().to_vec();
        ctrl.refresh(&backend).await;
        assert_eq!(ctrl.items(), first.as_slice());
    }

    #[tokio::test]
    async fn test_failed_refresh_empties_list_and_sets_error() {
        let backend = MemoryBackend::new().with_items("/hero", &[hero("h1", "A")]);
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.refresh(&backend).await;

        backend.fail_next(ApiError::Network("down".into()));
        ctrl.refresh(&backend).await;

        assert!(ctrl.items().is_empty());
        assert!(!ctrl.loading());
        assert_eq!(
            ctrl.error(),
            Some("Unable to reach the server. Please check your connection.")
        );

        ctrl.refresh(&backend).await;
        assert!(ctrl.error().is_none());
        assert_eq!(ctrl.items().len(), 1);
    }

    #[test]
    fn test_overlapping_refresh_is_refused() {
        let mut ctrl = ResourceController::<Hero>::new();
        assert!(ctrl.begin_refresh());
        assert!(!ctrl.begin_refresh());
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));
        assert!(ctrl.begin_refresh());
    }

    #[test]
    fn test_complete_add_appends_server_entity() {
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));
        ctrl.begin_add();

        assert_eq!(ctrl.complete_add(Some(hero("h2", "B"))), Reconcile::Patched);
        assert!(!ctrl.is_adding());
        assert_eq!(ctrl.items().len(), 2);
        assert_eq!(ctrl.items()[1].title, "B");
    }

    #[test]
    fn test_complete_add_without_entity_requests_refetch() {
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));

        assert_eq!(ctrl.complete_add(None), Reconcile::Refetch);
        assert_eq!(ctrl.complete_add(Some(Hero::default())), Reconcile::Refetch);
        assert_eq!(ctrl.items().len(), 1);
    }

    #[test]
    fn test_complete_edit_replaces_exactly_one() {
        let mut ctrl = ResourceController::<AboutUs>::new();
        let a1 = AboutUs {
            id: Some(EntityId::from("a1")),
            title: "Who we are".into(),
            description: "Old".into(),
        };
        let a2 = AboutUs {
            id: Some(EntityId::from("a2")),
            title: "Mission".into(),
            description: "Keep".into(),
        };
        ctrl.finish_refresh(Ok(vec![a1.clone(), a2.clone()]));
        ctrl.begin_edit(a1.clone());
        assert_eq!(ctrl.editing(), Some(&a1));

        let updated = AboutUs {
            description: "New".into(),
            ..a1
        };
        assert_eq!(ctrl.complete_edit(Some(updated.clone())), Reconcile::Patched);
        assert!(ctrl.editing().is_none());
        assert_eq!(ctrl.items(), &[updated, a2]);
    }

    #[test]
    fn test_complete_edit_unknown_id_requests_refetch() {
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));
        assert_eq!(ctrl.complete_edit(Some(hero("h9", "X"))), Reconcile::Refetch);
        assert_eq!(ctrl.complete_edit(None), Reconcile::Refetch);
        assert_eq!(ctrl.items(), &[hero("h1", "A")]);
    }

    #[tokio::test]
    async fn test_delete_removes_only_target() {
        let backend = MemoryBackend::new().with_items(
            "/testimonials",
            &[testimonial("t1", "Ada"), testimonial("t2", "Grace")],
        );
        let mut ctrl = ResourceController::<Testimonial>::new();
        ctrl.refresh(&backend).await;

        ctrl.begin_delete(ctrl.items()[0].clone());
        assert!(ctrl.dialog().is_open());

        assert!(ctrl.confirm_delete(&backend).await);
        assert_eq!(ctrl.items(), &[testimonial("t2", "Grace")]);
        assert!(ctrl.get(&EntityId::from("t1")).is_none());
        assert_eq!(ctrl.get(&EntityId::from("t2")), Some(&testimonial("t2", "Grace")));
        assert!(!ctrl.dialog().is_open());
        assert!(!ctrl.is_busy(&EntityId::from("t1")));
        assert!(ctrl.alert().is_none());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_items_and_alerts() {
        let backend = MemoryBackend::new().with_items("/testimonials", &[testimonial("t9", "Ada")]);
        let mut ctrl = ResourceController::<Testimonial>::new();
        ctrl.refresh(&backend).await;

        backend.fail_next(ApiError::http(404, ErrorBody::default()));
        ctrl.begin_delete(ctrl.items()[0].clone());
        assert!(!ctrl.confirm_delete(&backend).await);

        assert_eq!(ctrl.items(), &[testimonial("t9", "Ada")]);
        assert!(!ctrl.is_busy(&EntityId::from("t9")));
        assert!(!ctrl.dialog().is_open());
        assert_eq!(
            ctrl.alert(),
            Some("Testimonial not found. It may have been deleted.")
        );

        ctrl.dismiss_alert();
        assert!(ctrl.alert().is_none());
    }

    #[tokio::test]
    async fn test_delete_conflict_uses_generic_text() {
        let ada = User {
            id: Some(EntityId::from("u1")),
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..User::default()
        };
        let backend = MemoryBackend::new().with_items("/users", &[ada.clone()]);
        let mut ctrl = ResourceController::<User>::new();
        ctrl.refresh(&backend).await;

        backend.fail_next(ApiError::http(409, ErrorBody::default()));
        ctrl.begin_delete(ada.clone());
        assert!(!ctrl.confirm_delete(&backend).await);

        assert_eq!(
            ctrl.alert(),
            Some("This user conflicts with an existing record.")
        );
        assert_eq!(ctrl.items(), &[ada]);
    }

    #[test]
    fn test_delete_marks_busy_until_finished() {
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));
        ctrl.begin_delete(hero("h1", "A"));

        let id = ctrl.start_delete().unwrap();
        assert!(ctrl.is_busy(&id));
        assert!(ctrl.start_delete().is_none(), "second confirm while in flight");

        ctrl.finish_delete(&id, Ok(()));
        assert!(!ctrl.is_busy(&id));
        assert!(ctrl.items().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_delete_issues_no_request() {
        let backend = MemoryBackend::new();
        let mut ctrl = ResourceController::<Hero>::new();
        ctrl.finish_refresh(Ok(vec![hero("h1", "A")]));

        ctrl.begin_delete(hero("h1", "A"));
        ctrl.cancel_delete();
        assert!(!ctrl.confirm_delete(&backend).await);

        assert!(backend.requests().is_empty());
        assert_eq!(ctrl.items().len(), 1);
    }
}
