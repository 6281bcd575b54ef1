//! Build pipeline for the résumé document.
//!
//! The pipeline transforms the document through a series of stages:
//! 1. Stylesheet (glob, concatenate, preprocess)
//! 2. Markdown rendering (to HTML with smart punctuation)
//! 3. Title extraction (first h1 and h2)
//! 4. Template rendering (site fragment, page, stylesheet)
//! 5. File writing (output to disk)
//! 6. PDF export (only when requested)

mod context;
mod document;
mod error;
mod stages;

pub use context::{ArtifactKind, BuildReport, PipelineContext};
pub use document::ResumeDocument;
pub use error::PipelineError;

use stages::{MarkdownStage, PdfStage, StylesheetStage, TemplateStage, TitleStage, WriteStage};

/// A stage in the document processing pipeline.
///
/// Stages transform the document sequentially, modifying it in place
/// before passing it to the next stage.
pub trait Stage {
    /// Unique name for this stage (used for insertion points).
    fn name(&self) -> &'static str;

    /// Process the document through this stage.
    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError>;
}

/// The document processing pipeline.
///
/// The default pipeline is: stylesheet → markdown → title → template → write.
/// `with_pdf` appends the PDF export stage.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// Create an empty pipeline with no stages.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Create the default pipeline with standard stages.
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(StylesheetStage);
        pipeline.add_stage(MarkdownStage);
        pipeline.add_stage(TitleStage);
        pipeline.add_stage(TemplateStage);
        pipeline.add_stage(WriteStage);
        pipeline
    }

    /// Add the PDF export stage after writing.
    pub fn with_pdf(mut self) -> Self {
        self.insert_after("write", PdfStage);
        self
    }

    /// Add a stage to the end of the pipeline.
    pub fn add_stage<S: Stage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Insert a stage after the named stage.
    ///
    /// # Panics
    ///
    /// Panics if no stage with the given name exists.
    pub fn insert_after<S: Stage + 'static>(&mut self, name: &str, stage: S) -> &mut Self {
        let pos = self
            .stages
            .iter()
            .position(|s| s.name() == name)
            .unwrap_or_else(|| panic!("stage '{}' not found in pipeline", name));
        self.stages.insert(pos + 1, Box::new(stage));
        self
    }

    /// Run the pipeline on the document.
    pub fn run(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), "running stage");
            stage.process(doc, ctx)?;
        }
        Ok(())
    }

    /// Get the names of all stages in order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
