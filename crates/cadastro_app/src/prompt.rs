//! Blocking dialog seam between the form logic and the desktop toolkit.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Modal feedback channel used by the form.
pub trait Prompt {
    /// Shows a warning and blocks until dismissed.
    fn warn(&mut self, title: &str, message: &str);
    /// Asks a yes/no question; `true` only for an explicit yes.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Native message boxes.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePrompt;

impl Prompt for NativePrompt {
    fn warn(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(answer, MessageDialogResult::Yes)
    }
}
