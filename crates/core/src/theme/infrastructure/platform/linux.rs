use crate::theme::domain::color_scheme_signal::SignalError;

/// GNOME and most freedesktop portals mirror the preference into
/// `org.gnome.desktop.interface color-scheme` ('default' | 'prefer-dark' | 'prefer-light').
/// Older GNOME releases lack the key; gsettings then exits non-zero.
pub fn prefers_dark() -> Result<bool, SignalError> {
    let stdout =
        super::checked_stdout("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"])?;
    Ok(parse(&stdout))
}

fn parse(stdout: &str) -> bool {
    stdout.trim_matches('\'') == "prefer-dark"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(parse("'prefer-dark'"));
        assert!(!parse("'default'"));
        assert!(!parse("'prefer-light'"));
    }
}
