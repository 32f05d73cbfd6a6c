//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::BreathboxError;

/// Generate shell completions for the named shell.
///
/// # Errors
///
/// Returns a configuration error for unknown shell names.
pub fn completions(shell: &str) -> Result<String, BreathboxError> {
    let shell = shell_from_str(shell).ok_or_else(|| {
        BreathboxError::Config(format!(
            "Unknown shell '{shell}' (expected bash, zsh, fish, powershell, or elvish)"
        ))
    })?;

    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "breathbox", &mut buf);
    String::from_utf8(buf).map_err(|e| BreathboxError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_shells() {
        assert_eq!(shell_from_str("zsh"), Some(Shell::Zsh));
        assert_eq!(shell_from_str("pwsh"), Some(Shell::PowerShell));
        assert_eq!(shell_from_str("tcsh"), None);
    }

    #[test]
    fn test_completions_output() {
        let script = completions("bash").unwrap();
        assert!(script.contains("breathbox"));
    }

    #[test]
    fn test_unknown_shell_is_an_error() {
        assert!(completions("tcsh").is_err());
    }
}
