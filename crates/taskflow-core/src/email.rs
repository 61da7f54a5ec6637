//! Email normalization shared by every read and write path.

/// Normalizes an email address: trims surrounding whitespace and lowercases it.
///
/// Every lookup and insert keyed on an email goes through this function so
/// that `" A@B.com "` and `"a@b.com"` always resolve to the same user.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
