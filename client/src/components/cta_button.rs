// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct CtaButtonProps<'a> {
	title: &'static str,
	disabled: &'a ReadSignal<bool>,
	loading: &'a ReadSignal<bool>,
	on_press: Box<dyn Fn() + 'a>,
}

/// The main call-to-action button of a screen. While loading, the title is swapped for a spinner.
///
/// The click handler checks the disabled signal itself, so a press never goes through while disabled.
#[component]
pub fn CtaButton<'a, G: Html>(ctx: Scope<'a>, props: CtaButtonProps<'a>) -> View<G> {
	let title = props.title;
	let disabled = props.disabled;
	let loading = props.loading;
	let on_press = create_ref(ctx, props.on_press);

	let click_handler = move |_event: WebEvent| {
		if *disabled.get() {
			return;
		}
		on_press();
	};

	view! {
		ctx,
		button(type="button", class="cta_button", disabled=*disabled.get(), on:click=click_handler) {
			(if *loading.get() {
				view! { ctx, div(class="spinner_circle") }
			} else {
				view! { ctx, (title) }
			})
		}
	}
}
