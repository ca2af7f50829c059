// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use once_cell::sync::Lazy;
use regex::Regex;

/// Syntax of an address: a dot-atom or quoted local part, followed by either a dotted domain name or a bracketed IPv4
/// or general address literal.
const EMAIL_PATTERN: &str = concat!(
	r#"(?i-u)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
	r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")"#,
	r#"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?"#,
	r#"|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}"#,
	r#"(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9]"#,
	r#"|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
);

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern should compile"));

/// Checks whether the input is a syntactically valid email address. No lookup of the domain is done.
pub fn is_valid_email(input: &str) -> bool {
	EMAIL_REGEX.is_match(input)
}
