use crate::error::StartupError;
use web_sys::{Document, Element};

const ROOT_ELEMENT_ID: &str = "root";

fn document() -> Result<Document, StartupError> {
	let window = web_sys::window().ok_or(StartupError::NoWindow)?;
	window.document().ok_or(StartupError::NoDocument)
}

pub fn app_root() -> Result<Element, StartupError> {
	document()?
		.get_element_by_id(ROOT_ELEMENT_ID)
		.ok_or(StartupError::NoRootElement)
}

/// Gets the text of the element with the given ID, if the page has one.
pub fn element_text(id: &str) -> Option<String> {
	document().ok()?.get_element_by_id(id)?.text_content()
}

/// Shows a blocking message to the user.
pub fn show_alert(message: &str) {
	let Some(window) = web_sys::window() else {
		log::error!("Couldn't show alert without a window: {}", message);
		return;
	};
	if window.alert_with_message(message).is_err() {
		log::error!("Failed to show alert: {}", message);
	}
}
