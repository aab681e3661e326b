//! Value Objects
//!
//! Each registration field is checked against an anchored ASCII pattern.
//! Construction is the only way to obtain a value, so a held value is valid.

pub mod account_number;
pub mod customer_password;
pub mod full_name;
pub mod id_number;

use regex::RegexBuilder;

/// Full-string match with ASCII semantics (`\d` is `[0-9]` only)
pub(crate) fn matches_pattern(pattern: &str, value: &str) -> bool {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .is_ok_and(|re| re.is_match(value))
}
