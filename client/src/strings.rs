/// Display text for every piece of copy in the app
pub struct LocalizedStrings {
	pub welcome_to: &'static str,
	pub title: &'static str,
	pub explainer: &'static str,
	pub waitlist_cta: &'static str,
	pub waitlist_signup_title: &'static str,
	pub email_ask: &'static str,
	pub email_placeholder: &'static str,
	pub sign_up_cta: &'static str,
	pub thanks: &'static str,
	pub see_you_soon: &'static str,
	pub back_home_cta: &'static str,
}

static EN_US: LocalizedStrings = LocalizedStrings {
	welcome_to: "welcome to",
	title: "Voto",
	explainer: "Vote on photos - it's really that simple",
	waitlist_cta: "join the waitlist",
	waitlist_signup_title: "Waitlist Signup",
	email_ask: "Email:",
	email_placeholder: "email@example.com",
	sign_up_cta: "sign up",
	thanks: "Thank you! ",
	see_you_soon: "You're all signed up!",
	back_home_cta: "back home",
};

#[derive(Clone, Copy, Debug, Default)]
pub enum Locale {
	#[default]
	EnUs,
}

impl Locale {
	pub fn strings(&self) -> &'static LocalizedStrings {
		match self {
			Self::EnUs => &EN_US,
		}
	}
}

/// Only US English is supported for now.
pub fn localized_strings() -> &'static LocalizedStrings {
	Locale::default().strings()
}
