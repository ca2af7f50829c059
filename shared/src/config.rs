// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::messages::waitlist::WAITLIST_SPOT_PATH;
use crate::status::DEFAULT_VALIDATION_DELAY_MS;
use serde::{Deserialize, Serialize};

/// Settings for the waitlist client. Any field left out of a config document takes its default.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct WaitlistConfig {
	/// Scheme and host of the waitlist API, without a trailing path
	pub api_host: String,
	/// How long typing must pause before the email field is validated
	pub validation_delay_ms: u32,
	/// Number of additional attempts made after a 502 response
	pub retries: u32,
	pub retry_delay_ms: u32,
	/// Contact address given to users when signup fails in a way they can't fix
	pub support_contact: String,
}

impl Default for WaitlistConfig {
	fn default() -> Self {
		Self {
			api_host: String::from("https://voto.api.mpbell.dev"),
			validation_delay_ms: DEFAULT_VALIDATION_DELAY_MS,
			retries: 5,
			retry_delay_ms: 800,
			support_contact: String::from("voto@mpbell.dev"),
		}
	}
}

impl WaitlistConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	pub fn signup_endpoint(&self) -> String {
		format!("{}{}", self.api_host.trim_end_matches('/'), WAITLIST_SPOT_PATH)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_endpoint() {
		assert_eq!(
			WaitlistConfig::default().signup_endpoint(),
			"https://voto.api.mpbell.dev/waitlist/request-waitlist-spot"
		);
	}

	#[test]
	fn partial_document_keeps_defaults() {
		let config = WaitlistConfig::from_json(r#"{ "api_host": "http://localhost:8080/", "retries": 2 }"#).unwrap();
		assert_eq!(config.signup_endpoint(), "http://localhost:8080/waitlist/request-waitlist-spot");
		assert_eq!(config.retries, 2);
		assert_eq!(config.retry_delay_ms, 800);
		assert_eq!(config.validation_delay_ms, 100);
		assert_eq!(config.support_contact, "voto@mpbell.dev");
	}

	#[test]
	fn empty_document_is_default() {
		assert_eq!(WaitlistConfig::from_json("{}").unwrap(), WaitlistConfig::default());
	}

	#[test]
	fn malformed_document_is_an_error() {
		assert!(WaitlistConfig::from_json(r#"{ "retries": "five" }"#).is_err());
		assert!(WaitlistConfig::from_json("not json").is_err());
	}
}
