use sycamore::prelude::*;
use voto_waitlist_shared::status::StatusIndicatorState;

#[derive(Prop)]
pub struct StatusIndicatorProps<'a> {
	status: &'a ReadSignal<StatusIndicatorState>,
}

#[component]
pub fn StatusIndicator<'a, G: Html>(ctx: Scope<'a>, props: StatusIndicatorProps<'a>) -> View<G> {
	view! {
		ctx,
		div(class="status_indicator") {
			div(class="status_indicator_dot", style=format!("background-color: {}", props.status.get().color()))
		}
	}
}
