use crate::strings::localized_strings;
use sycamore::prelude::*;

#[component]
pub fn TitleBanner<G: Html>(ctx: Scope<'_>) -> View<G> {
	let strings = localized_strings();

	view! {
		ctx,
		div(class="title_banner") {
			p(class="title_banner_subtitle") { (strings.welcome_to) }
			p(class="title_banner_title") { (strings.title) }
		}
	}
}

#[component]
pub fn WaitlistSignupTitle<G: Html>(ctx: Scope<'_>) -> View<G> {
	view! {
		ctx,
		p(class="container_title") { (localized_strings().waitlist_signup_title) }
	}
}
