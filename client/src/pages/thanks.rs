use crate::components::cta_button::CtaButton;
use crate::components::title_banner::WaitlistSignupTitle;
use crate::strings::localized_strings;
use sycamore::prelude::*;
use voto_waitlist_shared::flow::SignupFlow;

#[component]
pub fn ThanksView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating thanks view");

	let strings = localized_strings();
	let flow: &Signal<SignupFlow> = use_context(ctx);
	let never = create_signal(ctx, false);

	view! {
		ctx,
		div(class="middle_modal") {
			WaitlistSignupTitle
			div(id="waitlist_thanks", class="middle_modal_content") {
				p(class="thanks_text") {
					(strings.thanks)
					(strings.see_you_soon)
				}
				CtaButton(
					title=strings.back_home_cta,
					disabled=never,
					loading=never,
					on_press=Box::new(move || {
						flow.modify().advance();
					})
				)
			}
		}
	}
}
