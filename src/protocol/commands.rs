//! Module `commands`
//!
//! Operations the request adapter understands and how they are named.

/// An operation requested by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Signup,  // Register a new account
    Login,   // Verify presented credentials
    Unknown, // Anything else
}

/// Resolves an operation name such as `/signup` or `login`.
///
/// Matching is case-insensitive and ignores one leading slash and
/// surrounding whitespace.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let name = trimmed.strip_prefix('/').unwrap_or(trimmed);

    match name.to_ascii_lowercase().as_str() {
        "signup" => Command::Signup,
        "login" => Command::Login,
        _ => Command::Unknown,
    }
}
