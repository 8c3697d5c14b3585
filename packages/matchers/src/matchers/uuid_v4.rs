// Матчер toBeUuidV4

use serde_json::Value;

use crate::error::{MatcherError, Result};
use crate::matchers::{MatchResult, MatcherContext, Promise, MESSAGE_TARGET};
use crate::utils::uuid;
use crate::utils::{MatcherHintOptions, MatcherUtils};

pub const TO_BE_UUID_V4: &str = "toBeUuidV4";

const UUID_VERSION: usize = 4;

fn hint(utils: &MatcherUtils, is_not: bool, promise: Promise) -> String {
    let options = MatcherHintOptions {
        is_not,
        promise,
        ..Default::default()
    };
    utils.matcher_hint(TO_BE_UUID_V4, "received", "", &options)
}

/// Passes when `received` is a string holding a well-formed version 4 UUID.
///
/// # Errors
///
/// [`MatcherError::InvalidReceived`] when `received` is not a string.
pub fn to_be_uuid_v4(ctx: &MatcherContext, received: &Value) -> Result<MatchResult> {
    let Some(candidate) = received.as_str() else {
        let specific = ctx
            .utils
            .print_with_type("Received", received, MatcherUtils::print_received);
        let message = ctx.utils.matcher_error_message(
            &hint(&ctx.utils, ctx.is_not, ctx.promise),
            &format!("{} value must be a string", ctx.utils.received_color("received")),
            Some(&specific),
        );
        return Err(MatcherError::InvalidReceived(message));
    };

    let version = uuid::version(candidate);
    let pass = version == Some(UUID_VERSION);
    tracing::trace!(pass, ?version, "toBeUuidV4 evaluated");

    // Nothing is formatted until the runner asks for the message.
    let is_not = ctx.is_not;
    let promise = ctx.promise;
    let utils = ctx.utils.clone();
    let received = received.clone();

    Ok(MatchResult::new(pass, move || {
        tracing::trace!(target: MESSAGE_TARGET, matcher = TO_BE_UUID_V4, "rendering message");
        let mut message = format!(
            "{}\n\nExpected: {}a valid UUID v{}\nReceived: {}",
            hint(&utils, is_not, promise),
            if is_not { "not " } else { "" },
            UUID_VERSION,
            utils.print_received(&received),
        );
        if let Some(other) = version.filter(|v| !is_not && *v != UUID_VERSION) {
            message.push_str(&format!("\nReceived version: {}", utils.received_color(&other.to_string())));
        }
        message
    }))
}
