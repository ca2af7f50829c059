use super::status_indicator::StatusIndicator;
use crate::strings::localized_strings;
use crate::timers::TimeoutScheduler;
use sycamore::prelude::*;
use voto_waitlist_shared::status::{EmailStatusTracker, StatusIndicatorState};
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

#[derive(Prop)]
pub struct EmailInputGroupProps<'a> {
	tracker: &'a EmailStatusTracker<TimeoutScheduler>,
	status: &'a ReadSignal<StatusIndicatorState>,
}

#[component]
pub fn EmailInputGroup<'a, G: Html>(ctx: Scope<'a>, props: EmailInputGroupProps<'a>) -> View<G> {
	let strings = localized_strings();
	let tracker = props.tracker;

	let input_handler = move |event: WebEvent| {
		let Some(input) = event
			.target()
			.and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
		else {
			return;
		};
		tracker.input(&input.value());
	};

	view! {
		ctx,
		div(class="email_input_group") {
			label(for="waitlist_email") { (strings.email_ask) }
			div(class="email_input_row") {
				input(
					id="waitlist_email",
					type="email",
					autocomplete="email",
					spellcheck="false",
					placeholder=strings.email_placeholder,
					on:input=input_handler
				)
				StatusIndicator(status=props.status)
			}
		}
	}
}
