use std::error::Error;
use std::fmt;

/// Problems with the browser context that keep the app from mounting
#[derive(Debug)]
pub enum StartupError {
	NoWindow,
	NoDocument,
	NoRootElement,
}

impl fmt::Display for StartupError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NoWindow => write!(f, "the browser window is inaccessible"),
			Self::NoDocument => write!(f, "the page document is inaccessible"),
			Self::NoRootElement => write!(f, "the page has no root element to render into"),
		}
	}
}

impl Error for StartupError {}
