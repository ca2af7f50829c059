// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

/// The screen the signup flow is showing
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SignupState {
	#[default]
	Home,
	Form,
	Thanks,
}

impl SignupState {
	pub fn next(&self) -> Self {
		match self {
			Self::Home => Self::Form,
			Self::Form => Self::Thanks,
			Self::Thanks => Self::Home,
		}
	}
}

/// Owns the current screen. The state only moves when the active screen calls [`SignupFlow::advance`].
#[derive(Clone, Debug, Default)]
pub struct SignupFlow {
	state: SignupState,
}

impl SignupFlow {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn state(&self) -> SignupState {
		self.state
	}

	/// Moves to the next screen and returns it.
	pub fn advance(&mut self) -> SignupState {
		let next = self.state.next();
		log::debug!("Signup flow advancing from {:?} to {:?}", self.state, next);
		self.state = next;
		next
	}
}
