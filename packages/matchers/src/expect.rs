//! `expect(value).not().to_be_uuid_v4()` style assertions.
//!
//! The `try_*` / [`Expectation::check`] forms return the outcome so that a
//! usage error ([`MatcherError::is_usage_error`]) can be told apart from a
//! failed assertion. The plain forms panic with the rendered message.

use serde::Serialize;
use serde_json::Value;

use crate::error::{MatcherError, Result};
use crate::matchers::{MatcherContext, Matchers, Promise, TO_BE_UUID_V4};
use crate::utils::MatcherUtils;

/// Start an assertion against the builtin matcher set.
pub fn expect(value: impl Into<Value>) -> Expectation<'static> {
    Matchers::shared().expect(value)
}

impl Matchers {
    /// Start an assertion against this set.
    pub fn expect(&self, value: impl Into<Value>) -> Expectation<'_> {
        Expectation::new(value.into(), self)
    }
}

#[derive(Debug, Clone)]
pub struct Expectation<'m> {
    received: Value,
    is_not: bool,
    promise: Promise,
    utils: Option<MatcherUtils>,
    matchers: &'m Matchers,
}

impl<'m> Expectation<'m> {
    pub fn new(received: Value, matchers: &'m Matchers) -> Self {
        Self {
            received,
            is_not: false,
            promise: Promise::None,
            utils: None,
            matchers,
        }
    }

    /// Lift any `Serialize` value, e.g. a `uuid::Uuid`, into a candidate.
    ///
    /// # Errors
    ///
    /// [`MatcherError::Serialization`] if the value cannot be represented as JSON.
    pub fn serialized<T: Serialize + ?Sized>(value: &T, matchers: &'m Matchers) -> Result<Self> {
        Ok(Self::new(serde_json::to_value(value)?, matchers))
    }

    pub fn not(mut self) -> Self {
        self.is_not = !self.is_not;
        self
    }

    /// The value is the output of an awaited future.
    pub fn resolves(mut self) -> Self {
        self.promise = Promise::Resolves;
        self
    }

    /// The value is the error of an awaited future.
    pub fn rejects(mut self) -> Self {
        self.promise = Promise::Rejects;
        self
    }

    /// Use explicit formatting utilities instead of the global config.
    pub fn with_utils(mut self, utils: MatcherUtils) -> Self {
        self.utils = Some(utils);
        self
    }

    pub fn received(&self) -> &Value {
        &self.received
    }

    fn context(&self) -> MatcherContext {
        MatcherContext {
            is_not: self.is_not,
            promise: self.promise,
            utils: self.utils.clone().unwrap_or_default(),
        }
    }

    /// Run the matcher registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`MatcherError::UnknownMatcher`] if `name` is not in the set
    /// - whatever usage error the matcher raises
    /// - [`MatcherError::AssertionFailed`] when the outcome contradicts `.not()`
    pub fn check(&self, name: &str) -> Result<()> {
        let matcher = self
            .matchers
            .get(name)
            .ok_or_else(|| MatcherError::UnknownMatcher(name.to_string()))?;

        let result = matcher(&self.context(), &self.received)?;
        if result.pass != self.is_not {
            return Ok(());
        }

        tracing::debug!(matcher = name, is_not = self.is_not, "assertion failed");
        Err(MatcherError::AssertionFailed(result.message()))
    }

    /// Panicking form of [`Expectation::check`].
    #[track_caller]
    pub fn assert(&self, name: &str) {
        if let Err(err) = self.check(name) {
            panic!("{}", err);
        }
    }

    /// # Errors
    ///
    /// See [`Expectation::check`].
    pub fn try_to_be_uuid_v4(&self) -> Result<()> {
        self.check(TO_BE_UUID_V4)
    }

    #[track_caller]
    pub fn to_be_uuid_v4(&self) {
        self.assert(TO_BE_UUID_V4)
    }
}
