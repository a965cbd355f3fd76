//! Builder for running external tool commands.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use markcut_common::{Error, Result};

/// A builder for constructing and running an external tool invocation.
///
/// The child inherits stdin and stderr so ffmpeg's progress output and
/// overwrite prompts reach the user. Its stdout is sent to our stderr,
/// which keeps stdout free for the cut report.
///
/// # Example
///
/// ```no_run
/// use markcut_av::ToolCommand;
/// use std::path::PathBuf;
///
/// let status = ToolCommand::new(PathBuf::from("ffmpeg"))
///     .arg("-version")
///     .run()?;
/// assert!(status.success());
/// # Ok::<(), markcut_common::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(s.as_ref().to_os_string());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl AsRef<OsStr>>) -> &mut Self {
        self.args
            .extend(iter.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// The arguments collected so far.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Short tool name used in error messages (the program's file name).
    pub fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Render the invocation as a single shell-like line for logging.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|part| shell_quote(&part.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command to completion.
    ///
    /// # Errors
    ///
    /// - [`Error::ToolNotFound`] if the program does not exist.
    /// - [`Error::ExternalTool`] if spawning fails for another reason or the
    ///   process exits with a non-zero status.
    pub fn run(&self) -> Result<ExitStatus> {
        let tool = self.tool_name();

        #[cfg(feature = "tracing")]
        tracing::info!("[CMD] {}", self.command_line());

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(std::io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::tool_not_found(tool.clone())
                } else {
                    Error::external_tool(tool.clone(), format!("failed to spawn: {e}"))
                }
            })?;

        if !status.success() {
            #[cfg(feature = "tracing")]
            tracing::warn!("{} exited with {}", tool, status);

            return Err(Error::external_tool(tool, format!("exited with {status}")));
        }

        Ok(status)
    }
}

/// Quote a single argument for display if it contains characters a shell
/// would split on or interpret.
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markcut_common::ErrorKind;

    #[test]
    fn command_line_quotes_awkward_arguments() {
        let mut cmd = ToolCommand::new(PathBuf::from("ffmpeg"));
        cmd.args(["-ss", "15", "-i", "my video.mp4", "-t", "10", "it's.mp4", ""]);
        assert_eq!(
            cmd.command_line(),
            r"ffmpeg -ss 15 -i 'my video.mp4' -t 10 'it'\''s.mp4' ''"
        );
    }

    #[test]
    fn tool_name_is_file_name() {
        let cmd = ToolCommand::new(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"));
        assert_eq!(cmd.tool_name(), "ffmpeg");
    }

    #[test]
    fn run_nonexistent_tool() {
        let err = ToolCommand::new(PathBuf::from("nonexistent_tool_xyz_12345"))
            .run()
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_success() {
        let status = ToolCommand::new(PathBuf::from("sh"))
            .args(["-c", "exit 0"])
            .run()
            .unwrap();
        assert!(status.success());
    }

    #[cfg(unix)]
    #[test]
    fn run_surfaces_non_zero_exit() {
        let err = ToolCommand::new(PathBuf::from("sh"))
            .args(["-c", "exit 3"])
            .run()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExternalTool);
        assert!(err.to_string().starts_with("sh failed: exited with"), "{err}");
    }
}
