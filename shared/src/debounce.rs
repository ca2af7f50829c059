// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Something that can run a callback later on the event loop.
///
/// Dropping the returned handle must cancel the callback if it hasn't run yet. A delay of zero still defers the
/// callback to a later tick; it must never run synchronously inside `schedule`.
pub trait Scheduler {
	type Handle;

	fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

type ChangeHandler<T> = Box<dyn Fn(T)>;

struct DebouncedInner<T, S: Scheduler> {
	scheduler: S,
	delay_ms: u32,
	value: RefCell<T>,
	pending: RefCell<Option<S::Handle>>,
	generation: Cell<u64>,
	resolved_generation: Cell<u64>,
	on_change: RefCell<Option<ChangeHandler<T>>>,
}

/// A value whose updates only propagate after a quiet period.
///
/// Every call to [`Debounced::set`] replaces any pending update and restarts the delay, so only the most recent value
/// in a burst is ever propagated. [`Debounced::set_immediate`] skips the delay entirely.
pub struct Debounced<T, S: Scheduler> {
	inner: Rc<DebouncedInner<T, S>>,
}

impl<T: Clone + 'static, S: Scheduler + 'static> Debounced<T, S> {
	pub fn new(initial_value: T, delay_ms: u32, scheduler: S) -> Self {
		let inner = DebouncedInner {
			scheduler,
			delay_ms,
			value: RefCell::new(initial_value),
			pending: RefCell::new(None),
			generation: Cell::new(0),
			resolved_generation: Cell::new(0),
			on_change: RefCell::new(None),
		};
		Self { inner: Rc::new(inner) }
	}

	/// Registers the observer that receives every propagated value. Replaces any previous observer.
	pub fn on_change(&self, handler: impl Fn(T) + 'static) {
		*self.inner.on_change.borrow_mut() = Some(Box::new(handler));
	}

	/// Gets the propagated value.
	pub fn get(&self) -> T {
		self.inner.value.borrow().clone()
	}

	/// Queues a value to be propagated once the delay passes without another call to `set`.
	pub fn set(&self, value: T) {
		let generation = self.inner.generation.get() + 1;
		self.inner.generation.set(generation);

		let weak_inner: Weak<DebouncedInner<T, S>> = Rc::downgrade(&self.inner);
		let handle = self.inner.scheduler.schedule(
			self.inner.delay_ms,
			Box::new(move || {
				if let Some(inner) = weak_inner.upgrade() {
					inner.resolve(generation, value);
				}
			}),
		);

		// Replacing the handle drops the previous one, which cancels its callback.
		*self.inner.pending.borrow_mut() = Some(handle);
	}

	/// Overwrites the propagated value right away. A value queued by `set` is still propagated when its delay passes.
	pub fn set_immediate(&self, value: T) {
		self.inner.store(value);
	}

	/// Whether a value queued by `set` has yet to propagate.
	pub fn is_pending(&self) -> bool {
		self.inner.resolved_generation.get() != self.inner.generation.get()
	}

	/// Drops any queued value without propagating it.
	pub fn cancel(&self) {
		self.inner.pending.borrow_mut().take();
		self.inner.resolved_generation.set(self.inner.generation.get());
	}
}

impl<T: Clone, S: Scheduler> DebouncedInner<T, S> {
	fn resolve(&self, generation: u64, value: T) {
		if generation != self.generation.get() {
			return;
		}
		// The handle that ran this callback stays in `pending` until the next `set` or `cancel`.
		self.resolved_generation.set(generation);
		self.store(value);
	}

	fn store(&self, value: T) {
		*self.value.borrow_mut() = value.clone();
		// The handler may set this value again, so no borrow is held across the call.
		let handler = self.on_change.borrow_mut().take();
		if let Some(handler) = handler {
			handler(value);
			let mut on_change = self.on_change.borrow_mut();
			if on_change.is_none() {
				*on_change = Some(handler);
			}
		}
	}
}
