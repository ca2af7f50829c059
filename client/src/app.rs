// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::pages::home::HomeView;
use crate::pages::thanks::ThanksView;
use crate::pages::waitlist_form::WaitlistFormView;
use sycamore::prelude::*;
use voto_waitlist_shared::config::WaitlistConfig;
use voto_waitlist_shared::flow::{SignupFlow, SignupState};

#[derive(Prop)]
pub struct AppProps {
	pub config: WaitlistConfig,
}

/// Shows the screen for the current signup state. Screens move the flow along through the `Signal<SignupFlow>`
/// context.
#[component]
pub fn App<G: Html>(ctx: Scope<'_>, props: AppProps) -> View<G> {
	provide_context(ctx, props.config);
	let flow = provide_context_ref(ctx, create_signal(ctx, SignupFlow::new()));
	let state = create_memo(ctx, || flow.get().state());

	view! {
		ctx,
		div(id="app_container") {
			(match *state.get() {
				SignupState::Home => view! { ctx, HomeView },
				SignupState::Form => view! { ctx, WaitlistFormView },
				SignupState::Thanks => view! { ctx, ThanksView },
			})
		}
	}
}
