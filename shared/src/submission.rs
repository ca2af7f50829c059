// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::WaitlistConfig;
use crate::messages::waitlist::WaitlistSpotRequest;
use std::error::Error;
use std::fmt;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CONFLICT: u16 = 409;
/// The only status that's retried
pub const STATUS_BAD_GATEWAY: u16 = 502;

/// A request that failed before any response was received
#[derive(Debug)]
pub struct TransportError {
	detail: String,
}

impl TransportError {
	pub fn new(detail: impl fmt::Display) -> Self {
		Self {
			detail: detail.to_string(),
		}
	}
}

impl fmt::Display for TransportError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.detail)
	}
}

impl Error for TransportError {}

/// Sends a request body to the waitlist endpoint and reports the response status.
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
	async fn post(&self, url: &str, body: String) -> Result<u16, TransportError>;
}

/// Waits between attempts.
#[allow(async_fn_in_trait)]
pub trait Sleep {
	async fn sleep(&self, delay_ms: u32);
}

/// How a signup attempt ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionResult {
	Success,
	AlreadyRegistered,
	/// Every attempt got a 502
	RetriesExhausted,
	UnexpectedStatus(u16),
	NetworkError(String),
}

impl SubmissionResult {
	/// Gets the text to show the user for this result, if any. Success needs no message since the flow moves on.
	pub fn alert_message(&self, email: &str, support_contact: &str) -> Option<String> {
		match self {
			Self::Success => None,
			Self::AlreadyRegistered => Some(format!("{} is already registered. Please try again.", email)),
			Self::RetriesExhausted => Some(format!(
				"Please contact {} immediately. Failed to signup despite retries.",
				support_contact
			)),
			Self::UnexpectedStatus(status) => Some(format!(
				"Please contact {} immediately. Found an unexpected status. {}",
				support_contact, status
			)),
			Self::NetworkError(detail) => Some(format!(
				"Please contact {} immediately for resolution.  Error Occurred: {}",
				support_contact, detail
			)),
		}
	}

	fn from_status(status: u16) -> Self {
		match status {
			STATUS_OK => Self::Success,
			STATUS_CONFLICT => Self::AlreadyRegistered,
			STATUS_BAD_GATEWAY => Self::RetriesExhausted,
			other => Self::UnexpectedStatus(other),
		}
	}
}

/// Retry settings for signup requests
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
	/// Attempts allowed after the first
	pub retries: u32,
	pub delay_ms: u32,
}

impl RetryPolicy {
	pub fn should_retry(&self, status: u16, attempt: u32) -> bool {
		status == STATUS_BAD_GATEWAY && attempt < self.retries
	}
}

impl From<&WaitlistConfig> for RetryPolicy {
	fn from(config: &WaitlistConfig) -> Self {
		Self {
			retries: config.retries,
			delay_ms: config.retry_delay_ms,
		}
	}
}

/// Submits emails to the waitlist.
///
/// The client doesn't serialize calls itself; callers keep a single submission in flight by gating on their own busy
/// state.
pub struct SubmissionClient<T: WaitlistTransport, S: Sleep> {
	transport: T,
	sleeper: S,
	endpoint: String,
	policy: RetryPolicy,
}

impl<T: WaitlistTransport, S: Sleep> SubmissionClient<T, S> {
	pub fn new(transport: T, sleeper: S, endpoint: String, policy: RetryPolicy) -> Self {
		Self {
			transport,
			sleeper,
			endpoint,
			policy,
		}
	}

	pub fn from_config(transport: T, sleeper: S, config: &WaitlistConfig) -> Self {
		Self::new(transport, sleeper, config.signup_endpoint(), RetryPolicy::from(config))
	}

	/// Requests a waitlist spot for the given email.
	///
	/// A 502 response is retried up to the policy's retry count, waiting the policy's delay before each retry. Every
	/// other response, and any failure to get a response, ends the submission right away.
	pub async fn submit(&self, email: &str) -> SubmissionResult {
		let request = WaitlistSpotRequest {
			email: String::from(email),
		};
		let body = match serde_json::to_string(&request) {
			Ok(body) => body,
			Err(error) => return SubmissionResult::NetworkError(format!("Failed to encode request: {}", error)),
		};

		let mut attempt = 0;
		let status = loop {
			let status = match self.transport.post(&self.endpoint, body.clone()).await {
				Ok(status) => status,
				Err(error) => {
					log::warn!("Waitlist request failed: {}", error);
					return SubmissionResult::NetworkError(error.to_string());
				}
			};
			if !self.policy.should_retry(status, attempt) {
				break status;
			}
			attempt += 1;
			log::warn!(
				"Waitlist endpoint returned {}; retrying ({}/{})",
				status,
				attempt,
				self.policy.retries
			);
			self.sleeper.sleep(self.policy.delay_ms).await;
		};

		let result = SubmissionResult::from_status(status);
		match result {
			SubmissionResult::Success => log::info!("Waitlist signup succeeded"),
			_ => log::warn!("Waitlist signup ended with {:?}", result),
		}
		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;
	use std::cell::RefCell;
	use std::collections::VecDeque;

	/// Answers with scripted responses and records every request.
	#[derive(Default)]
	struct ScriptedTransport {
		responses: RefCell<VecDeque<Result<u16, TransportError>>>,
		requests: RefCell<Vec<(String, String)>>,
	}

	impl ScriptedTransport {
		fn with_statuses(statuses: &[u16]) -> Self {
			let transport = Self::default();
			transport
				.responses
				.borrow_mut()
				.extend(statuses.iter().map(|status| Ok(*status)));
			transport
		}

		fn calls(&self) -> usize {
			self.requests.borrow().len()
		}
	}

	impl WaitlistTransport for &ScriptedTransport {
		async fn post(&self, url: &str, body: String) -> Result<u16, TransportError> {
			self.requests.borrow_mut().push((String::from(url), body));
			self.responses
				.borrow_mut()
				.pop_front()
				.unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
		}
	}

	#[derive(Default)]
	struct RecordingSleep {
		delays: RefCell<Vec<u32>>,
	}

	impl Sleep for &RecordingSleep {
		async fn sleep(&self, delay_ms: u32) {
			self.delays.borrow_mut().push(delay_ms);
		}
	}

	fn submit_with<'a>(
		transport: &'a ScriptedTransport,
		sleeper: &'a RecordingSleep,
	) -> SubmissionClient<&'a ScriptedTransport, &'a RecordingSleep> {
		SubmissionClient::from_config(transport, sleeper, &WaitlistConfig::default())
	}

	#[test]
	fn success_on_first_call() {
		let transport = ScriptedTransport::with_statuses(&[200]);
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::Success);
		assert_eq!(transport.calls(), 1);
		assert!(sleeper.delays.borrow().is_empty());
	}

	#[test]
	fn sends_email_as_json_to_endpoint() {
		let transport = ScriptedTransport::with_statuses(&[200]);
		let sleeper = RecordingSleep::default();
		block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		let requests = transport.requests.borrow();
		let (url, body) = &requests[0];
		assert_eq!(url, "https://voto.api.mpbell.dev/waitlist/request-waitlist-spot");
		assert_eq!(body, r#"{"email":"user@example.com"}"#);
	}

	#[test]
	fn bad_gateway_is_retried_until_success() {
		let transport = ScriptedTransport::with_statuses(&[502, 502, 502, 200]);
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::Success);
		assert_eq!(transport.calls(), 4);
		assert_eq!(*sleeper.delays.borrow(), vec![800, 800, 800]);
	}

	#[test]
	fn bad_gateway_exhausts_retries() {
		let transport = ScriptedTransport::with_statuses(&[502; 7]);
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::RetriesExhausted);
		assert_eq!(transport.calls(), 6);
		assert_eq!(sleeper.delays.borrow().len(), 5);
	}

	#[test]
	fn conflict_is_not_retried() {
		let transport = ScriptedTransport::with_statuses(&[409, 200]);
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::AlreadyRegistered);
		assert_eq!(transport.calls(), 1);
	}

	#[test]
	fn other_server_errors_are_not_retried() {
		for status in [500, 503, 504, 404] {
			let transport = ScriptedTransport::with_statuses(&[status, 200]);
			let sleeper = RecordingSleep::default();
			let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

			assert_eq!(result, SubmissionResult::UnexpectedStatus(status));
			assert_eq!(transport.calls(), 1);
		}
	}

	#[test]
	fn network_failure_is_not_retried() {
		let transport = ScriptedTransport::default();
		transport
			.responses
			.borrow_mut()
			.push_back(Err(TransportError::new("connection refused")));
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::NetworkError(String::from("connection refused")));
		assert_eq!(transport.calls(), 1);
	}

	#[test]
	fn network_failure_after_bad_gateway_ends_submission() {
		let transport = ScriptedTransport::with_statuses(&[502]);
		transport
			.responses
			.borrow_mut()
			.push_back(Err(TransportError::new("connection reset")));
		let sleeper = RecordingSleep::default();
		let result = block_on(submit_with(&transport, &sleeper).submit("user@example.com"));

		assert_eq!(result, SubmissionResult::NetworkError(String::from("connection reset")));
		assert_eq!(transport.calls(), 2);
	}

	#[test]
	fn retry_count_follows_config() {
		let transport = ScriptedTransport::with_statuses(&[502; 4]);
		let sleeper = RecordingSleep::default();
		let config = WaitlistConfig {
			retries: 1,
			retry_delay_ms: 10,
			..WaitlistConfig::default()
		};
		let client = SubmissionClient::from_config(&transport, &sleeper, &config);
		let result = block_on(client.submit("user@example.com"));

		assert_eq!(result, SubmissionResult::RetriesExhausted);
		assert_eq!(transport.calls(), 2);
		assert_eq!(*sleeper.delays.borrow(), vec![10]);
	}

	#[test]
	fn alert_messages() {
		let support = "support@example.com";
		assert_eq!(SubmissionResult::Success.alert_message("a@b.co", support), None);
		assert_eq!(
			SubmissionResult::AlreadyRegistered.alert_message("a@b.co", support).unwrap(),
			"a@b.co is already registered. Please try again."
		);
		assert_eq!(
			SubmissionResult::RetriesExhausted.alert_message("a@b.co", support).unwrap(),
			"Please contact support@example.com immediately. Failed to signup despite retries."
		);
		assert_eq!(
			SubmissionResult::UnexpectedStatus(418).alert_message("a@b.co", support).unwrap(),
			"Please contact support@example.com immediately. Found an unexpected status. 418"
		);
		assert!(SubmissionResult::NetworkError(String::from("timed out"))
			.alert_message("a@b.co", support)
			.unwrap()
			.ends_with("Error Occurred: timed out"));
	}
}
