// src/cli/completion.rs
use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Writes the completion script for `shell` to stdout.
///
/// ```bash
/// eval "$(bookmarker completion bash)"
/// ```
#[instrument(level = "debug")]
pub fn generate_completion(shell: &str) -> io::Result<()> {
    generate_completion_to(shell, &mut io::stdout())
}

/// Writes the completion script for `shell` ("bash", "zsh" or "fish") to `out`
pub fn generate_completion_to<W: Write>(shell: &str, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    match shell.to_lowercase().as_str() {
        "bash" => {
            debug!("Generating bash completion");
            generate(Bash, &mut cmd, bin_name, out);
        }
        "zsh" => {
            debug!("Generating zsh completion");
            generate(Zsh, &mut cmd, bin_name, out);
        }
        "fish" => {
            debug!("Generating fish completion");
            generate(Fish, &mut cmd, bin_name, out);
        }
        _ => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                    shell
                ),
            ))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("bash", "COMPREPLY")]
    #[case("zsh", "#compdef")]
    #[case("fish", "-c bookmarker")]
    #[case("BASH", "COMPREPLY")]
    fn given_supported_shell_when_generate_then_script_written(
        #[case] shell: &str,
        #[case] marker: &str,
    ) -> io::Result<()> {
        let mut buffer = Vec::new();

        generate_completion_to(shell, &mut buffer)?;

        let content = String::from_utf8_lossy(&buffer);
        assert!(content.contains(marker), "missing {marker} in {shell} script");
        Ok(())
    }

    #[test]
    fn given_unknown_shell_when_generate_then_invalid_input() {
        let mut buffer = Vec::new();

        let err = generate_completion_to("tcsh", &mut buffer).unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(err.to_string().contains("Unsupported shell"));
        assert!(buffer.is_empty());
    }
}
