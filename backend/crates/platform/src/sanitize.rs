//! Text Sanitization
//!
//! Neutralizes HTML before user-supplied text is stored, so a value that is
//! later rendered into a page cannot carry markup or script. Backed by
//! `ammonia`'s whitelist cleaner.

/// Sanitize a single text value
///
/// Script-bearing elements are removed together with their content, event
/// handler attributes are dropped, and bare `<`, `>` and `&` are escaped.
/// Applying it twice gives the same result as applying it once.
pub fn sanitize_text(input: &str) -> String {
    ammonia::clean(input)
}
