//! Message-formatting helpers handed to every matcher invocation.

pub mod color;
pub mod format;
pub mod hint;
pub mod logging;
pub mod uuid;

use serde_json::Value;

use crate::config::Config;
use color::Palette;
pub use hint::MatcherHintOptions;

/// Utilities bundle carried in [`crate::matchers::MatcherContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherUtils {
    palette: Palette,
    print_max_depth: usize,
    print_max_length: usize,
}

impl Default for MatcherUtils {
    fn default() -> Self {
        Self::new(Config::global())
    }
}

impl MatcherUtils {
    pub fn new(config: &Config) -> Self {
        Self {
            palette: Palette::new(config.colors),
            print_max_depth: config.print_max_depth,
            print_max_length: config.print_max_length,
        }
    }

    pub fn matcher_hint(
        &self,
        matcher_name: &str,
        received: &str,
        expected: &str,
        options: &MatcherHintOptions,
    ) -> String {
        hint::matcher_hint(&self.palette, matcher_name, received, expected, options)
    }

    pub fn matcher_error_message(&self, hint: &str, generic: &str, specific: Option<&str>) -> String {
        hint::matcher_error_message(&self.palette, hint, generic, specific)
    }

    pub fn received_color(&self, text: &str) -> String {
        self.palette.received(text)
    }

    pub fn expected_color(&self, text: &str) -> String {
        self.palette.expected(text)
    }

    pub fn stringify(&self, value: &Value) -> String {
        format::stringify(value, self.print_max_depth, self.print_max_length)
    }

    pub fn print_received(&self, value: &Value) -> String {
        self.received_color(&format::replace_trailing_spaces(&self.stringify(value)))
    }

    pub fn print_expected(&self, value: &Value) -> String {
        self.expected_color(&format::replace_trailing_spaces(&self.stringify(value)))
    }

    /// `"<name> has type:  <type>\n<name> has value: <printed>"`; no type line for null.
    pub fn print_with_type(
        &self,
        name: &str,
        value: &Value,
        print: impl Fn(&Self, &Value) -> String,
    ) -> String {
        let has_value = format!("{} has value: {}", name, print(self, value));
        if value.is_null() {
            return has_value;
        }
        format!("{} has type:  {}\n{}", name, format::get_type(value), has_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utils() -> MatcherUtils {
        MatcherUtils::new(&Config::default())
    }

    #[test]
    fn test_print_with_type() {
        let printed = utils().print_with_type("Received", &json!(12345), MatcherUtils::print_received);
        assert_eq!(printed, "Received has type:  number\nReceived has value: 12345");
    }

    #[test]
    fn test_print_with_type_null() {
        let printed = utils().print_with_type("Received", &json!(null), MatcherUtils::print_received);
        assert_eq!(printed, "Received has value: null");
    }

    #[test]
    fn test_print_received_and_expected() {
        assert_eq!(utils().print_received(&json!("abc")), "\"abc\"");
        assert_eq!(utils().print_expected(&json!([1, 2])), "[1, 2]");
    }

    #[test]
    fn test_respects_print_depth() {
        let config = Config {
            print_max_depth: 1,
            ..Config::default()
        };
        let utils = MatcherUtils::new(&config);
        assert_eq!(utils.stringify(&json!([[1]])), "[[Array]]");
    }

    #[test]
    fn test_colored_received() {
        let config = Config {
            colors: true,
            ..Config::default()
        };
        let utils = MatcherUtils::new(&config);
        assert_ne!(utils.print_received(&json!("x")), "\"x\"");
    }
}
