#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use crate::theme::domain::color_scheme_signal::SignalError;

/// Ask the operating system whether the user prefers a dark color scheme.
pub fn prefers_dark() -> Result<bool, SignalError> {
    #[cfg(target_os = "macos")]
    {
        macos::prefers_dark()
    }
    #[cfg(target_os = "windows")]
    {
        windows::prefers_dark()
    }
    #[cfg(target_os = "linux")]
    {
        linux::prefers_dark()
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    {
        Err(SignalError::Unsupported)
    }
}

/// Run a preference query command.
#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
fn run(program: &str, args: &[&str]) -> Result<std::process::Output, SignalError> {
    std::process::Command::new(program)
        .args(args)
        .output()
        .map_err(|e| SignalError::Detection(format!("{program}: {e}")))
}

/// Trimmed stdout of a query command that must exit successfully.
#[cfg(any(target_os = "windows", target_os = "linux"))]
fn checked_stdout(program: &str, args: &[&str]) -> Result<String, SignalError> {
    let output = run(program, args)?;
    if !output.status.success() {
        return Err(SignalError::Detection(format!(
            "{program} exited with {}",
            output.status
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
