// Construct Messenger test matchers
// Custom assertions for ids exchanged between client and server

#![warn(clippy::all)]

// Модули
pub mod config;
pub mod error;
pub mod expect;
pub mod matchers;
pub mod utils;

// Re-exports для удобства
pub use config::Config;
pub use error::{MatcherError, Result};
pub use expect::{expect, Expectation};
pub use matchers::{MatchResult, Matcher, MatcherContext, Matchers, Promise, MESSAGE_TARGET};
pub use utils::MatcherUtils;
