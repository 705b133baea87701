//! Version extraction from raw source text
//!
//! The wikitext of a `Latest_stable_software_release` template looks like:
//!
//! ```text
//! {{Infobox software/simple
//! | latest release version = 131.0.3
//! | latest release date = {{Start date and age|2024|10|14}}
//! }}
//! ```

use regex::Regex;

/// Strategy for pulling a raw version string out of source text
pub trait VersionExtractor: Send + Sync {
    /// Returns the raw version found in `text`, or `None` when the text
    /// does not carry one
    fn extract(&self, text: &str) -> Option<String>;
}

/// Extractor for the `latest release version = X` template parameter
pub struct WikitextExtractor {
    /// Matches `latest release version = <value> [<token>]`, words separated
    /// by whitespace or underscores
    release_re: Regex,
    /// First run of digits and dots inside the value
    version_re: Regex,
}

impl WikitextExtractor {
    pub fn new() -> Self {
        Self {
            release_re: Regex::new(r"latest[\s_]release[\s_]version = (\S+(?: \S+)?)").unwrap(),
            version_re: Regex::new(r"[.0-9]+").unwrap(),
        }
    }
}

impl Default for WikitextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionExtractor for WikitextExtractor {
    fn extract(&self, text: &str) -> Option<String> {
        let caps = self.release_re.captures(text)?;
        let value = caps.get(1)?.as_str();
        self.version_re
            .find(value)
            .map(|m| m.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("| latest release version = 131.0.3", Some("131.0.3"))]
    #[case("|latest_release_version = 18.0.1", Some("18.0.1"))]
    #[case("latest\trelease\nversion = 115.0.5322.68", Some("115.0.5322.68"))]
    #[case("| latest release version = 130.0.6723.58/59/60 (Windows)", Some("130.0.6723.58"))]
    #[case("| latest release version = v2.1.0", Some("2.1.0"))]
    #[case("| latest release version = {{wikidata}} 17.6", Some("17.6"))]
    #[case("| latest release version = unknown", None)]
    #[case("| Latest release version = 1.0", None)]
    #[case("| latest release date = {{Start date|2024|10|14}}", None)]
    #[case("", None)]
    fn extract_returns_expected(#[case] text: &str, #[case] expected: Option<&str>) {
        let extractor = WikitextExtractor::new();
        assert_eq!(extractor.extract(text).as_deref(), expected);
    }

    #[test]
    fn extract_reads_first_parameter_in_multiline_template() {
        let text = "{{Infobox software/simple\n\
                    | latest release version = 18.0.1\n\
                    | latest release date = {{Start date and age|2024|10|03}}\n\
                    }}";
        let extractor = WikitextExtractor::new();

        assert_eq!(extractor.extract(text).as_deref(), Some("18.0.1"));
    }
}
