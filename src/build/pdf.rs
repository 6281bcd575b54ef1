//! PDF export through an external HTML-to-PDF renderer.
//!
//! The renderer is invoked as `<command> <args...> <input.html> <output.pdf>`
//! and blocks until it exits. Its exit status is checked and a missing
//! output file is reported as an error.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::config::PdfConfig;

/// The unclassed body tag the page template must contain.
pub const BODY_PATCH_TARGET: &str = r#"body class="""#;

#[derive(thiserror::Error, Debug)]
pub enum PdfError {
    #[error("PDF renderer '{0}' not found on PATH")]
    RendererNotFound(String),

    #[error("failed to start PDF renderer '{program}': {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("PDF renderer '{program}' failed ({status}){}", stderr_suffix(.stderr))]
    RendererFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("PDF renderer exited successfully but did not produce {0}")]
    MissingOutput(PathBuf),

    #[error("failed to remove stale PDF {0}: {1}")]
    RemoveStale(PathBuf, std::io::Error),
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

pub struct PdfExporter {
    command: String,
    args: Vec<String>,
    body_class: String,
}

impl PdfExporter {
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            body_class: config.body_class.clone(),
        }
    }

    /// Add the print class to the page's `<body class="">`.
    ///
    /// Returns `None` when the HTML has no unclassed body tag.
    pub fn patch_body_class(&self, html: &str) -> Option<String> {
        if !html.contains(BODY_PATCH_TARGET) {
            return None;
        }
        let replacement = format!(r#"body class="{}""#, self.body_class);
        Some(html.replace(BODY_PATCH_TARGET, &replacement))
    }

    /// The command line as shown to the user.
    pub fn display_command(&self, input: &Path, output: &Path) -> String {
        let mut line = self.command.clone();
        for arg in &self.args {
            let _ = write!(line, " {arg}");
        }
        let _ = write!(line, " {} {}", input.display(), output.display());
        line
    }

    fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.command);
        command.args(&self.args).arg(input).arg(output);
        command
    }

    /// Run the renderer on `input`, producing `output`.
    pub fn render(&self, input: &Path, output: &Path) -> Result<(), PdfError> {
        // A PDF left over from an earlier run would hide a renderer that
        // exits successfully without writing anything
        match std::fs::remove_file(output) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(PdfError::RemoveStale(output.to_path_buf(), e)),
        }

        let result = self.command(input, output).output().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                PdfError::RendererNotFound(self.command.clone())
            } else {
                PdfError::Spawn {
                    program: self.command.clone(),
                    source,
                }
            }
        })?;

        if !result.status.success() {
            return Err(PdfError::RendererFailed {
                program: self.command.clone(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        if !output.is_file() {
            return Err(PdfError::MissingOutput(output.to_path_buf()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exporter(command: &str, args: &[&str]) -> PdfExporter {
        PdfExporter::new(&PdfConfig {
            command: command.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            ..PdfConfig::default()
        })
    }

    #[test]
    fn test_patch_body_class() {
        let exporter = PdfExporter::new(&PdfConfig::default());
        let patched = exporter
            .patch_body_class("<html><body class=\"\"><p>x</p></body></html>")
            .unwrap();
        assert_eq!(patched, "<html><body class=\"pdf\"><p>x</p></body></html>");
    }

    #[test]
    fn test_patch_body_class_missing_target() {
        let exporter = PdfExporter::new(&PdfConfig::default());
        assert_eq!(exporter.patch_body_class("<body class=\"page\">"), None);
        assert_eq!(exporter.patch_body_class("<body>"), None);
    }

    #[test]
    fn test_display_command() {
        let exporter = exporter("wkhtmltopdf", &["--quiet", "-s", "Letter"]);
        assert_eq!(
            exporter.display_command(Path::new("resume/x-print.html"), Path::new("resume/x.pdf")),
            "wkhtmltopdf --quiet -s Letter resume/x-print.html resume/x.pdf"
        );
    }

    #[test]
    fn test_renderer_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter("resume-build-no-such-renderer", &[]);
        let result = exporter.render(&dir.path().join("in.html"), &dir.path().join("out.pdf"));
        assert!(matches!(result, Err(PdfError::RendererNotFound(p)) if p == "resume-build-no-such-renderer"));
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter("sh", &["-c", "echo boom >&2; exit 3", "sh"]);
        let err = exporter
            .render(&dir.path().join("in.html"), &dir.path().join("out.pdf"))
            .unwrap_err();

        assert!(matches!(err, PdfError::RendererFailed { .. }));
        assert!(err.to_string().contains("boom"), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        std::fs::write(&output, "stale").unwrap();

        let exporter = exporter("sh", &["-c", "exit 0", "sh"]);
        let result = exporter.render(&dir.path().join("in.html"), &output);
        assert!(matches!(result, Err(PdfError::MissingOutput(p)) if p == output));
    }

    #[cfg(unix)]
    #[test]
    fn test_renderer_success() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.html");
        let output = dir.path().join("out.pdf");
        std::fs::write(&input, "<body class=\"pdf\">").unwrap();

        let exporter = exporter("sh", &["-c", r#"cp "$1" "$2""#, "sh"]);
        exporter.render(&input, &output).unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "<body class=\"pdf\">");
    }
}
