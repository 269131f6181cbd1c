//! Alias token generation and the external alias representation.
//!
//! A token is 10 characters drawn from `[a-zA-Z0-9_]`. The alias handed out to
//! clients wraps it as `https://{token}.com`.

use rand::Rng;

/// Number of characters in a generated token.
pub const TOKEN_LENGTH: usize = 10;

/// The 63-character token alphabet.
pub const TOKEN_ALPHABET: &[u8; 63] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

const ALIAS_SCHEME: &str = "https://";
const ALIAS_SUFFIX: &str = ".com";

/// Generates a random alias token.
///
/// Each position is sampled independently and uniformly from [`TOKEN_ALPHABET`]
/// using the thread-local generator. Uniqueness is best effort only; callers
/// must not rely on tokens being unguessable.
///
/// # Examples
///
/// ```ignore
/// let token = generate_token();
/// assert_eq!(token.len(), 10);
/// assert!(is_token(&token));
/// ```
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Wraps a token into its public alias form, `https://{token}.com`.
pub fn format(token: &str) -> String {
    format!("{ALIAS_SCHEME}{token}{ALIAS_SUFFIX}")
}

/// Extracts the token from an alias.
///
/// Accepts the full form (`https://abc.com`), the form without a scheme
/// (`abc.com`) and a bare token (`abc`). Returns `None` when the remainder is
/// not a well-formed token.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse("https://Ab_3456789.com"), Some("Ab_3456789"));
/// assert_eq!(parse("Ab_3456789.com"), Some("Ab_3456789"));
/// assert_eq!(parse("Ab_3456789"), Some("Ab_3456789"));
/// assert_eq!(parse("https://example.com/a"), None);
/// ```
pub fn parse(alias: &str) -> Option<&str> {
    let rest = alias.strip_prefix(ALIAS_SCHEME).unwrap_or(alias);
    let token = rest.strip_suffix(ALIAS_SUFFIX).unwrap_or(rest);

    is_token(token).then_some(token)
}

/// Returns true if `value` has the shape of a generated token.
pub fn is_token(value: &str) -> bool {
    value.len() == TOKEN_LENGTH && value.bytes().all(|b| TOKEN_ALPHABET.contains(&b))
}
