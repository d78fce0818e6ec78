use api::Resource;

/// Delete confirmation: holds the entity the user asked to delete until they
/// confirm or back out. Never touches the network itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfirmDialog<E> {
    pending: Option<E>,
}

impl<E> Default for ConfirmDialog<E> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<E: Resource> ConfirmDialog<E> {
    pub fn request(&mut self, entity: E) {
        self.pending = Some(entity);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&E> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Confirmation sentence naming the pending entity by its display field.
    pub fn message(&self) -> Option<String> {
        let entity = self.pending.as_ref()?;
        let name = entity.display_name().trim();
        let subject = if name.is_empty() {
            format!("this {}", E::NOUN)
        } else {
            name.to_string()
        };
        Some(format!(
            "Are you sure you want to delete {subject}? This action cannot be undone."
        ))
    }
}
