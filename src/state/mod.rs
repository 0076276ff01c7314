// State management module.
// Page navigation, note list/compose state, and toast reporting.

pub mod compose;
pub mod navigation;
pub mod notes;
pub mod toast;

pub use compose::{ComposeField, ComposeState};
pub use navigation::Page;
pub use notes::{LoadingState, NoteRow, NotesState, display_rows, preview};
pub use toast::{Toast, ToastLevel};
