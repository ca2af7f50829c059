// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::dom::element_text;
use voto_waitlist_shared::config::WaitlistConfig;

/// ID of the optional JSON script element in the host page that overrides config defaults
const CONFIG_ELEMENT_ID: &str = "waitlist_config";

pub fn load_config() -> WaitlistConfig {
	let Some(config_json) = element_text(CONFIG_ELEMENT_ID) else {
		log::debug!("No config element found; using default config");
		return WaitlistConfig::default();
	};

	match WaitlistConfig::from_json(&config_json) {
		Ok(config) => config,
		Err(error) => {
			log::warn!("Ignoring malformed config element: {}", error);
			WaitlistConfig::default()
		}
	}
}
