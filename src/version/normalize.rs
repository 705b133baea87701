use crate::browser::NormalizationLevel;

/// Reduce a raw version string to the granularity of `level`.
///
/// Returns `None` when the version lacks the components the level needs.
///
/// Examples:
/// - ("14.0.2", Major) -> "14"
/// - ("14.0.2", MajorMinor) -> "14.0"
/// - ("14.0.2", MajorMinorTrimmed) -> "14"
/// - ("14.2.1", MajorMinorTrimmed) -> "14.2"
/// - ("14.2.1", Raw) -> "14.2.1"
pub fn normalize_version(version: &str, level: NormalizationLevel) -> Option<String> {
    match level {
        NormalizationLevel::Raw => Some(version.to_string()),
        NormalizationLevel::Major => leading_digits(version).map(str::to_string),
        NormalizationLevel::MajorMinor => {
            let (major, minor) = major_minor(version)?;
            Some(format!("{}.{}", major, minor))
        }
        NormalizationLevel::MajorMinorTrimmed => {
            let (major, minor) = major_minor(version)?;
            if minor == "0" {
                Some(major.to_string())
            } else {
                Some(format!("{}.{}", major, minor))
            }
        }
    }
}

/// Leading run of ASCII digits, if any
fn leading_digits(s: &str) -> Option<&str> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    (end > 0).then(|| &s[..end])
}

/// First two dot-delimited numeric components
fn major_minor(version: &str) -> Option<(&str, &str)> {
    let major = leading_digits(version)?;
    let rest = version[major.len()..].strip_prefix('.')?;
    let minor = leading_digits(rest)?;
    Some((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("14.0.2", NormalizationLevel::Major, Some("14"))]
    #[case("14.0.2", NormalizationLevel::MajorMinor, Some("14.0"))]
    #[case("14.0.2", NormalizationLevel::MajorMinorTrimmed, Some("14"))]
    #[case("14.2.1", NormalizationLevel::MajorMinorTrimmed, Some("14.2"))]
    #[case("14.2.1", NormalizationLevel::Raw, Some("14.2.1"))]
    #[case("130.0.6723.58", NormalizationLevel::Major, Some("130"))]
    #[case("18.0", NormalizationLevel::MajorMinorTrimmed, Some("18"))]
    #[case("18.10", NormalizationLevel::MajorMinorTrimmed, Some("18.10"))]
    #[case("17", NormalizationLevel::Major, Some("17"))]
    #[case("17.", NormalizationLevel::Raw, Some("17."))]
    fn normalize_version_reduces_to_level(
        #[case] version: &str,
        #[case] level: NormalizationLevel,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            normalize_version(version, level).as_deref(),
            expected
        );
    }

    #[rstest]
    #[case("17", NormalizationLevel::MajorMinor)]
    #[case("17", NormalizationLevel::MajorMinorTrimmed)]
    #[case("17.", NormalizationLevel::MajorMinor)]
    #[case(".5", NormalizationLevel::Major)]
    #[case("", NormalizationLevel::Major)]
    fn normalize_version_returns_none_for_missing_components(
        #[case] version: &str,
        #[case] level: NormalizationLevel,
    ) {
        assert_eq!(normalize_version(version, level), None);
    }
}
