use std::path::PathBuf;

use crate::config::Config;

use super::paths::{OutputPaths, PathError};
use super::pipeline::{BuildReport, Pipeline, PipelineContext, PipelineError, ResumeDocument};
use super::render::{RenderError, Renderer};

#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("source document not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("output {0} would overwrite the source document")]
    OutputIsSource(PathBuf),

    #[error("path error: {0}")]
    Path(#[from] PathError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What to build and how.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// The Markdown résumé
    pub source: PathBuf,
    /// Bake the reload flag into the HTML page
    pub refresh: bool,
    /// Also export a PDF
    pub pdf: bool,
}

pub struct Builder {
    config: Config,
    /// Base path for resolving relative paths (typically the config file's directory)
    base_path: PathBuf,
}

impl Builder {
    pub fn new(config: Config, base_path: PathBuf) -> Self {
        Self { config, base_path }
    }

    pub fn build(&self, options: &BuildOptions) -> Result<BuildReport, BuildError> {
        // Nothing is written unless the source exists
        if !options.source.is_file() {
            return Err(BuildError::SourceNotFound(options.source.clone()));
        }

        let paths = OutputPaths::for_source(&options.source)?;
        if let Some(output) = paths.colliding_output(&options.source)? {
            return Err(BuildError::OutputIsSource(output.to_path_buf()));
        }
        let markdown = std::fs::read_to_string(&options.source)?;

        let templates_dir = self.config.templates_dir(&self.base_path);
        let renderer = Renderer::new(&templates_dir)?;

        let mut pipeline = Pipeline::default_pipeline();
        if options.pdf {
            pipeline = pipeline.with_pdf();
        }

        let mut doc = ResumeDocument::new(options.source.clone(), markdown);
        let mut ctx = PipelineContext::new(
            &self.config,
            &self.base_path,
            &paths,
            &renderer,
            options.refresh,
        );

        tracing::info!(
            source = %options.source.display(),
            basename = %paths.basename,
            stages = ?pipeline.stage_names(),
            "building résumé"
        );
        pipeline.run(&mut doc, &mut ctx)?;

        Ok(ctx.into_report())
    }
}
