//! Pipeline context for sharing state across stages.

use std::fmt;
use std::path::{Path, PathBuf};

use super::PipelineError;
use crate::build::paths::OutputPaths;
use crate::build::render::Renderer;
use crate::config::Config;

/// The kinds of file a build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Markdown,
    Html,
    Css,
    PrintHtml,
    Pdf,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArtifactKind::Markdown => "markdown",
            ArtifactKind::Html => "html",
            ArtifactKind::Css => "css",
            ArtifactKind::PrintHtml => "print html",
            ArtifactKind::Pdf => "pdf",
        };
        f.write_str(label)
    }
}

/// Files produced by a build, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub artifacts: Vec<(ArtifactKind, PathBuf)>,
}

impl BuildReport {
    pub fn contains(&self, path: &Path) -> bool {
        self.artifacts.iter().any(|(_, p)| p == path)
    }

    pub fn path_of(&self, kind: ArtifactKind) -> Option<&Path> {
        self.artifacts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
    }
}

/// Shared context for pipeline stages.
pub struct PipelineContext<'a> {
    /// Loaded configuration
    pub config: &'a Config,

    /// Base path that relative config paths resolve against
    pub base_path: &'a Path,

    /// Where each artifact is written
    pub paths: &'a OutputPaths,

    /// Template renderer
    pub renderer: &'a Renderer,

    /// Bake the reload flag into the HTML page
    pub reload: bool,

    report: BuildReport,
}

impl<'a> PipelineContext<'a> {
    pub fn new(
        config: &'a Config,
        base_path: &'a Path,
        paths: &'a OutputPaths,
        renderer: &'a Renderer,
        reload: bool,
    ) -> Self {
        Self {
            config,
            base_path,
            paths,
            renderer,
            reload,
            report: BuildReport::default(),
        }
    }

    /// Write an artifact, creating parent directories as needed.
    ///
    /// Each path may be written at most once per build.
    pub fn write(
        &mut self,
        kind: ArtifactKind,
        path: &Path,
        contents: &str,
    ) -> Result<(), PipelineError> {
        self.write_scratch(path, contents)?;
        self.record(kind, path);
        Ok(())
    }

    /// Write an intermediate file that is removed before the build ends.
    ///
    /// Scratch files are not reported and not announced.
    pub fn write_scratch(&mut self, path: &Path, contents: &str) -> Result<(), PipelineError> {
        if self.report.contains(path) {
            return Err(PipelineError::DuplicateWrite(path.to_path_buf()));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Record an artifact produced outside of `write` (e.g. by a subprocess).
    pub fn record(&mut self, kind: ArtifactKind, path: &Path) {
        println!("Wrote {} to {}", kind, path.display());
        self.report.artifacts.push((kind, path.to_path_buf()));
    }

    pub fn into_report(self) -> BuildReport {
        self.report
    }
}
