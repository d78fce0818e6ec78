mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDeleteDialog;

mod form_modal;
pub use form_modal::{FieldInput, FormModalView};

mod resource_table;
pub use resource_table::{ResourceTable, TableRow};

mod resource_panel;
pub use resource_panel::ResourcePanel;
