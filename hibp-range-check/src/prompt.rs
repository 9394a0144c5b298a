use crate::error::Error;

/// Prompt shown before reading the password.
pub const PASSWORD_PROMPT: &str = "Enter the password you wish to check: ";

/// Reads a password from the terminal with echo turned off.
///
/// Nothing typed is rendered, so a mistyped password goes unnoticed. An empty
/// line is returned as an empty password.
pub fn read_password(prompt: &str) -> Result<String, Error> {
    Ok(rpassword::prompt_password(prompt)?)
}
