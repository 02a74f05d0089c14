//! Interaction port: modal confirm/notify dialogs.
//!
//! The controller never calls dialog APIs directly; it goes through this
//! trait so the state-transition logic stays testable without a real UI
//! environment. Both calls block inside the current update, which keeps
//! every transition a single synchronous step.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Blocking yes/no and informational dialogs
pub trait InteractionPort {
    /// Ask the user a yes/no question; true means confirmed
    fn confirm(&self, prompt: &str) -> bool;

    /// Show an informational text until dismissed
    fn notify(&self, text: &str);
}

/// Native dialogs via rfd
pub struct DialogPort;

impl InteractionPort for DialogPort {
    fn confirm(&self, prompt: &str) -> bool {
        let result = MessageDialog::new()
            .set_title("Grove")
            .set_description(prompt)
            .set_level(MessageLevel::Warning)
            .set_buttons(MessageButtons::YesNo)
            .show();
        matches!(result, MessageDialogResult::Yes)
    }

    fn notify(&self, text: &str) {
        MessageDialog::new()
            .set_title("Grove")
            .set_description(text)
            .set_level(MessageLevel::Info)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
