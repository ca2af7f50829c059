// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::debounce::Scheduler;
use crate::status::EmailStatusTracker;
use crate::submission::{Sleep, SubmissionClient, SubmissionResult, WaitlistTransport};
use std::cell::{Cell, RefCell};

type LoadingHandler = Box<dyn Fn(bool)>;

/// State of the signup form: the email field and whether a submission is in flight.
pub struct SignupForm<S: Scheduler> {
	tracker: EmailStatusTracker<S>,
	loading: Cell<bool>,
	on_loading_change: RefCell<Option<LoadingHandler>>,
}

impl<S: Scheduler + 'static> SignupForm<S> {
	pub fn new(scheduler: S, validation_delay_ms: u32) -> Self {
		Self {
			tracker: EmailStatusTracker::new(scheduler, validation_delay_ms),
			loading: Cell::new(false),
			on_loading_change: RefCell::new(None),
		}
	}

	pub fn tracker(&self) -> &EmailStatusTracker<S> {
		&self.tracker
	}

	pub fn is_loading(&self) -> bool {
		self.loading.get()
	}

	/// Registers the observer that receives every change to the loading state.
	pub fn on_loading_change(&self, handler: impl Fn(bool) + 'static) {
		*self.on_loading_change.borrow_mut() = Some(Box::new(handler));
	}

	/// Starts a submission of the current email.
	///
	/// Returns `None` unless the email has validated as good and no other submission is in flight. The form stays
	/// loading until the returned submission is sent or dropped.
	pub fn begin_submit(&self) -> Option<PendingSubmission<'_, S>> {
		if self.loading.get() || !self.tracker.is_submittable() {
			return None;
		}
		self.set_loading(true);
		Some(PendingSubmission {
			form: self,
			email: self.tracker.email(),
		})
	}

	fn set_loading(&self, loading: bool) {
		self.loading.set(loading);
		if let Some(handler) = self.on_loading_change.borrow().as_ref() {
			handler(loading);
		}
	}
}

/// A submission that has claimed the form's loading state
pub struct PendingSubmission<'f, S: Scheduler + 'static> {
	form: &'f SignupForm<S>,
	email: String,
}

impl<S: Scheduler + 'static> PendingSubmission<'_, S> {
	pub fn email(&self) -> &str {
		&self.email
	}

	/// Sends the email and releases the loading state once a result is in.
	pub async fn send<T: WaitlistTransport, Z: Sleep>(self, client: &SubmissionClient<T, Z>) -> SubmissionResult {
		client.submit(&self.email).await
	}
}

impl<S: Scheduler + 'static> Drop for PendingSubmission<'_, S> {
	fn drop(&mut self) {
		self.form.set_loading(false);
	}
}
