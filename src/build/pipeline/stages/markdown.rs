//! Markdown rendering stage.

use crate::build::markdown::render_markdown;
use crate::build::pipeline::{PipelineContext, PipelineError, ResumeDocument, Stage};

/// Stage that renders the source markdown to an HTML fragment.
pub struct MarkdownStage;

impl Stage for MarkdownStage {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.html = render_markdown(&doc.markdown, &ctx.config.markdown)?;
        Ok(())
    }
}
