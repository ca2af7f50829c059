// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::cta_button::CtaButton;
use crate::components::email_input_group::EmailInputGroup;
use crate::components::title_banner::WaitlistSignupTitle;
use crate::dom::show_alert;
use crate::http::FetchTransport;
use crate::strings::localized_strings;
use crate::timers::{TimeoutScheduler, TimeoutSleep};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use voto_waitlist_shared::config::WaitlistConfig;
use voto_waitlist_shared::flow::SignupFlow;
use voto_waitlist_shared::form::SignupForm;
use voto_waitlist_shared::status::StatusIndicatorState;
use voto_waitlist_shared::submission::SubmissionClient;

#[component]
pub fn WaitlistFormView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating waitlist form view");

	let strings = localized_strings();
	let config: &WaitlistConfig = use_context(ctx);
	let flow: &Signal<SignupFlow> = use_context(ctx);

	// Timer callbacks outlive this scope's borrows, so state updates go through reference-counted signals.
	let status_signal = create_rc_signal(StatusIndicatorState::Disabled);
	let loading_signal = create_rc_signal(false);
	let form = create_ref(ctx, SignupForm::new(TimeoutScheduler, config.validation_delay_ms));
	form.tracker().on_status_change({
		let status_signal = status_signal.clone();
		move |status| status_signal.set(status)
	});
	form.on_loading_change({
		let loading_signal = loading_signal.clone();
		move |loading| loading_signal.set(loading)
	});
	on_cleanup(ctx, || form.tracker().cancel());
	let status_signal = create_ref(ctx, status_signal);
	let loading_signal = create_ref(ctx, loading_signal);

	let next_disabled = create_memo(ctx, || !status_signal.get().is_submittable());

	let submit_handler = move || {
		let Some(pending) = form.begin_submit() else {
			return;
		};

		spawn_local_scoped(ctx, async move {
			let client = SubmissionClient::from_config(FetchTransport, TimeoutSleep, config);
			let email = String::from(pending.email());
			let result = pending.send(&client).await;

			// Advancing tears down this view, so it has to be the last thing done here.
			match result.alert_message(&email, &config.support_contact) {
				Some(message) => show_alert(&message),
				None => {
					flow.modify().advance();
				}
			}
		});
	};

	view! {
		ctx,
		div(class="middle_modal") {
			WaitlistSignupTitle
			div(id="waitlist_form", class="middle_modal_content") {
				EmailInputGroup(tracker=form.tracker(), status=status_signal)
				CtaButton(
					title=strings.sign_up_cta,
					disabled=next_disabled,
					loading=loading_signal,
					on_press=Box::new(submit_handler)
				)
			}
		}
	}
}
