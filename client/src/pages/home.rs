use crate::components::cta_button::CtaButton;
use crate::components::title_banner::TitleBanner;
use crate::strings::localized_strings;
use sycamore::prelude::*;
use voto_waitlist_shared::flow::SignupFlow;

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating home view");

	let strings = localized_strings();
	let flow: &Signal<SignupFlow> = use_context(ctx);
	let never = create_signal(ctx, false);

	view! {
		ctx,
		div(id="home_page") {
			TitleBanner
			p(class="explainer_text") { (strings.explainer) }
			CtaButton(
				title=strings.waitlist_cta,
				disabled=never,
				loading=never,
				on_press=Box::new(move || {
					flow.modify().advance();
				})
			)
		}
	}
}
