use crate::error::Error;

/// Renders the message shown to the user for a breach count.
pub fn render(count: u64) -> String {
    if count > 0 {
        format!("Password has been leaked {} times, you should change it.", count)
    } else {
        "Password has NOT been leaked.".to_string()
    }
}

/// Renders a failed check for stderr, using the error's display text.
pub fn render_error(err: &Error) -> String {
    format!("Error: {}", err)
}
