// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use voto_waitlist_shared::debounce::Scheduler;
use voto_waitlist_shared::submission::Sleep;

/// Schedules on the browser's timer queue. Dropping the returned [`Timeout`] clears it.
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
	type Handle = Timeout;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
		Timeout::new(delay_ms, callback)
	}
}

#[derive(Clone, Copy, Default)]
pub struct TimeoutSleep;

impl Sleep for TimeoutSleep {
	async fn sleep(&self, delay_ms: u32) {
		TimeoutFuture::new(delay_ms).await;
	}
}
