// Заголовок сообщения матчера: expect(received).not.toBeX(expected)

use crate::matchers::Promise;
use crate::utils::color::Palette;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatcherHintOptions {
    pub is_not: bool,
    pub promise: Promise,
    /// Appended as `// comment`
    pub comment: String,
    /// Rendered as `, second_argument` inside the call parentheses
    pub second_argument: String,
    /// Hint for `expect.name(...)` style helpers, without `expect(received)`
    pub is_direct_expect_call: bool,
}

pub fn matcher_hint(
    palette: &Palette,
    matcher_name: &str,
    received: &str,
    expected: &str,
    options: &MatcherHintOptions,
) -> String {
    let mut hint = String::new();
    let mut dim_string = String::from("expect");

    if !options.is_direct_expect_call && !received.is_empty() {
        hint.push_str(&palette.dim(&format!("{}(", dim_string)));
        hint.push_str(&palette.received(received));
        dim_string = String::from(")");
    }

    if let Some(label) = options.promise.label() {
        hint.push_str(&palette.dim(&format!("{}.", dim_string)));
        hint.push_str(label);
        dim_string.clear();
    }

    if options.is_not {
        hint.push_str(&palette.dim(&format!("{}.", dim_string)));
        hint.push_str("not");
        dim_string.clear();
    }

    if matcher_name.contains('.') {
        dim_string.push_str(matcher_name);
    } else {
        hint.push_str(&palette.dim(&format!("{}.", dim_string)));
        hint.push_str(matcher_name);
        dim_string.clear();
    }

    if expected.is_empty() {
        dim_string.push_str("()");
    } else {
        hint.push_str(&palette.dim(&format!("{}(", dim_string)));
        hint.push_str(&palette.expected(expected));
        if !options.second_argument.is_empty() {
            hint.push_str(&palette.dim(", "));
            hint.push_str(&palette.expected(&options.second_argument));
        }
        dim_string = String::from(")");
    }

    if !options.comment.is_empty() {
        dim_string.push_str(" // ");
        dim_string.push_str(&options.comment);
    }

    if !dim_string.is_empty() {
        hint.push_str(&palette.dim(&dim_string));
    }

    hint
}

pub fn matcher_error_message(
    palette: &Palette,
    hint: &str,
    generic: &str,
    specific: Option<&str>,
) -> String {
    let mut message = format!("{}\n\n{}: {}", hint, palette.bold("Matcher error"), generic);
    if let Some(specific) = specific {
        message.push_str("\n\n");
        message.push_str(specific);
    }
    message
}
