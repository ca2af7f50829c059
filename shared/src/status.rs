// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::debounce::{Debounced, Scheduler};
use crate::email::is_valid_email;
use std::cell::RefCell;

/// Validation delay used when nothing else is configured
pub const DEFAULT_VALIDATION_DELAY_MS: u32 = 100;

/// State of the indicator shown next to the email field
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StatusIndicatorState {
	/// Nothing has been typed yet
	#[default]
	Disabled,
	/// The user is typing; validation hasn't settled
	Processing,
	Error,
	Good,
}

impl StatusIndicatorState {
	pub fn color(&self) -> &'static str {
		match self {
			Self::Disabled => "rgba(255,255,255,0.25)",
			Self::Processing => "#FFF3D2",
			Self::Error => "#A62307",
			Self::Good => "#208c31",
		}
	}

	pub fn is_submittable(&self) -> bool {
		*self == Self::Good
	}

	fn resolve(email: &str) -> Self {
		if is_valid_email(email) {
			Self::Good
		} else {
			Self::Error
		}
	}
}

/// Tracks the text of the email field along with its validation status.
///
/// Each keystroke shows [`StatusIndicatorState::Processing`] immediately, while the resolution to `Good` or `Error`
/// waits for typing to pause.
pub struct EmailStatusTracker<S: Scheduler> {
	email: RefCell<String>,
	status: Debounced<StatusIndicatorState, S>,
}

impl<S: Scheduler + 'static> EmailStatusTracker<S> {
	pub fn new(scheduler: S, validation_delay_ms: u32) -> Self {
		Self {
			email: RefCell::new(String::new()),
			status: Debounced::new(StatusIndicatorState::Disabled, validation_delay_ms, scheduler),
		}
	}

	/// Registers the observer that receives every status change.
	pub fn on_status_change(&self, handler: impl Fn(StatusIndicatorState) + 'static) {
		self.status.on_change(handler);
	}

	/// Handles a change to the field's text.
	pub fn input(&self, text: &str) {
		{
			let mut email = self.email.borrow_mut();
			email.clear();
			email.push_str(text);
		}
		self.status.set_immediate(StatusIndicatorState::Processing);
		self.revalidate();
	}

	/// Queues validation of the current text. Nothing happens while the field is untouched.
	pub fn revalidate(&self) {
		if self.status.get() == StatusIndicatorState::Disabled {
			return;
		}
		let resolved = StatusIndicatorState::resolve(&self.email.borrow());
		self.status.set(resolved);
	}

	pub fn email(&self) -> String {
		self.email.borrow().clone()
	}

	pub fn status(&self) -> StatusIndicatorState {
		self.status.get()
	}

	pub fn is_submittable(&self) -> bool {
		self.status().is_submittable()
	}

	/// Stops any pending validation from resolving.
	pub fn cancel(&self) {
		self.status.cancel();
	}
}
