use serde::Serialize;

/// Path of the waitlist signup endpoint, relative to the API host
pub const WAITLIST_SPOT_PATH: &str = "/waitlist/request-waitlist-spot";

/// Request data sent by the client to claim a spot on the waitlist
#[derive(Debug, Serialize)]
pub struct WaitlistSpotRequest {
	pub email: String,
}
