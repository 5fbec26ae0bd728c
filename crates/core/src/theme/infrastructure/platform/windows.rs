use crate::theme::domain::color_scheme_signal::SignalError;

pub fn prefers_dark() -> Result<bool, SignalError> {
    // HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize
    // AppsUseLightTheme: DWORD 0 = dark, 1 = light
    // `reg query` exits non-zero when the value is absent.
    let stdout = super::checked_stdout(
        "reg",
        &[
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ],
    )?;
    Ok(parse(&stdout))
}

fn parse(stdout: &str) -> bool {
    stdout.contains("0x0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert!(parse("AppsUseLightTheme    REG_DWORD    0x0"));
        assert!(!parse("AppsUseLightTheme    REG_DWORD    0x1"));
    }
}
