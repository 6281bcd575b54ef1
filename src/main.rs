use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod build;
mod commands;
mod config;

/// Build a styled HTML page, stylesheet, site fragment and optional PDF
/// from a Markdown résumé.
#[derive(Parser, Debug)]
#[command(name = "resume-build", version, about)]
struct Args {
    /// The Markdown résumé to build, e.g. resume/resume.md
    #[arg(short, long)]
    source: PathBuf,

    /// Make the HTML page reload itself while editing
    #[arg(short, long, default_value = "false")]
    refresh: bool,

    /// Also export a PDF through the external renderer
    #[arg(short, long, default_value = "false")]
    pdf: bool,

    /// The path to the configuration file [default: resume.yaml, if present]
    #[arg(short, long = "config")]
    config_file: Option<PathBuf>,

    /// Show progress diagnostics
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    commands::build::run(&args)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn test_source_is_required() {
        let err = Args::try_parse_from(["resume-build"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(err.to_string().contains("--source"));
    }

    #[test]
    fn test_short_flags() {
        let args = Args::try_parse_from(["resume-build", "-s", "resume/x.md", "-r", "-p"]).unwrap();
        assert_eq!(args.source, PathBuf::from("resume/x.md"));
        assert!(args.refresh);
        assert!(args.pdf);
        assert!(args.config_file.is_none());
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "resume-build",
            "--source",
            "cv.md",
            "--config",
            "site/resume.yaml",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.source, PathBuf::from("cv.md"));
        assert!(!args.refresh);
        assert!(!args.pdf);
        assert_eq!(args.config_file, Some(PathBuf::from("site/resume.yaml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
