//! Matcher set: named predicates invoked by [`crate::expect::Expectation`].
//!
//! Matchers are plain functions registered explicitly into a [`Matchers`]
//! value. There is no global mutable registry; [`Matchers::shared`] is an
//! immutable builtin set built once on first use.

pub mod uuid_v4;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde_json::Value;

use crate::error::Result;
use crate::utils::MatcherUtils;

pub use uuid_v4::{to_be_uuid_v4, TO_BE_UUID_V4};

static SHARED_MATCHERS: OnceLock<Matchers> = OnceLock::new();

/// `tracing` target of the event emitted whenever a matcher renders its message.
pub const MESSAGE_TARGET: &str = "construct_matchers::message";

/// How the received value was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Promise {
    #[default]
    None,
    /// Value is the output of an awaited future that succeeded
    Resolves,
    /// Value is the error of an awaited future that failed
    Rejects,
}

impl Promise {
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Promise::None => None,
            Promise::Resolves => Some("resolves"),
            Promise::Rejects => Some("rejects"),
        }
    }
}

/// Outcome of a single matcher call. The message is rendered only on demand.
pub struct MatchResult {
    pub pass: bool,
    message: Box<dyn Fn() -> String + Send + Sync>,
}

impl MatchResult {
    pub fn new(pass: bool, message: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self {
            pass,
            message: Box::new(message),
        }
    }

    pub fn message(&self) -> String {
        (self.message)()
    }
}

impl fmt::Debug for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("pass", &self.pass)
            .finish_non_exhaustive()
    }
}

/// Context passed into every matcher invocation.
#[derive(Debug, Clone, Default)]
pub struct MatcherContext {
    pub is_not: bool,
    pub promise: Promise,
    pub utils: MatcherUtils,
}

pub type Matcher = fn(&MatcherContext, &Value) -> Result<MatchResult>;

#[derive(Clone, Default)]
pub struct Matchers {
    entries: BTreeMap<String, Matcher>,
}

impl Matchers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set with every matcher this crate ships.
    pub fn builtin() -> Self {
        let mut matchers = Self::new();
        matchers.register(TO_BE_UUID_V4, to_be_uuid_v4);
        matchers
    }

    /// Builtin set shared by [`crate::expect`]. Built once, never mutated.
    pub fn shared() -> &'static Matchers {
        SHARED_MATCHERS.get_or_init(Self::builtin)
    }

    /// Replaces any matcher previously registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, matcher: Matcher) -> &mut Self {
        let name = name.into();
        tracing::debug!(matcher = %name, "registering matcher");
        self.entries.insert(name, matcher);
        self
    }

    pub fn extend<N, I>(&mut self, matchers: I) -> &mut Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Matcher)>,
    {
        for (name, matcher) in matchers {
            self.register(name, matcher);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<Matcher> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Matchers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn always_pass(_ctx: &MatcherContext, _received: &Value) -> Result<MatchResult> {
        Ok(MatchResult::new(true, || "always".to_string()))
    }

    #[test]
    fn test_builtin_contains_uuid_v4() {
        let matchers = Matchers::builtin();
        assert!(matchers.contains("toBeUuidV4"));
        assert_eq!(matchers.len(), 1);
        assert!(Matchers::new().is_empty());
    }

    #[test]
    fn test_shared_is_builtin() {
        let shared = Matchers::shared();
        assert_eq!(
            shared.names().collect::<Vec<_>>(),
            Matchers::builtin().names().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut matchers = Matchers::builtin();
        matchers.register(TO_BE_UUID_V4, to_be_uuid_v4);
        matchers.register(TO_BE_UUID_V4, to_be_uuid_v4);
        assert_eq!(matchers.len(), 1);
    }

    #[test]
    fn test_extend_replaces_by_name() {
        let mut matchers = Matchers::builtin();
        matchers.extend([
            ("toBeUuidV4", always_pass as Matcher),
            ("toBeAnything", always_pass as Matcher),
        ]);
        assert_eq!(matchers.names().collect::<Vec<_>>(), vec!["toBeAnything", "toBeUuidV4"]);

        let matcher = matchers.get("toBeUuidV4").unwrap();
        let result = matcher(&MatcherContext::default(), &json!("not-a-uuid")).unwrap();
        assert!(result.pass);
        assert_eq!(result.message(), "always");
    }

    #[test]
    fn test_promise_label() {
        assert_eq!(Promise::None.label(), None);
        assert_eq!(Promise::Resolves.label(), Some("resolves"));
        assert_eq!(Promise::Rejects.label(), Some("rejects"));
    }
}
