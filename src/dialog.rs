//! Native message box for fatal startup errors.

use crate::error::ViewportError;

/// Show `error` in a blocking critical message box.
pub fn show_startup_error(title: &str, error: &ViewportError) {
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(error.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
