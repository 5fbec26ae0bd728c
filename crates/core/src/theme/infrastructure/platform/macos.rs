use crate::theme::domain::color_scheme_signal::SignalError;

/// `AppleInterfaceStyle` is only set (to "Dark") while dark mode is on;
/// in light mode the read exits non-zero with empty stdout, so the status is
/// not an error here.
pub fn prefers_dark() -> Result<bool, SignalError> {
    let output = super::run("defaults", &["read", "-g", "AppleInterfaceStyle"])?;
    Ok(parse(String::from_utf8_lossy(&output.stdout).trim()))
}

fn parse(stdout: &str) -> bool {
    stdout.eq_ignore_ascii_case("dark")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(parse("Dark"));
        assert!(!parse(""));
    }
}
