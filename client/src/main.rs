// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use app::App;
use dom::app_root;
use sycamore::prelude::*;

mod app;
mod components;
mod config;
mod dom;
mod error;
mod http;
mod pages;
mod strings;
mod timers;

fn main() {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::default());

	let config = config::load_config();
	log::debug!("Signup requests will be sent to {}", config.signup_endpoint());

	let root = match app_root() {
		Ok(root) => root,
		Err(error) => {
			log::error!("Unable to load: {}", error);
			return;
		}
	};

	sycamore::render_to(
		|ctx| view! { ctx, App(config=config) },
		&root,
	);
}
