//! Title extraction stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ResumeDocument, Stage};
use crate::build::title::extract_title;

/// Stage that builds `doc.title` from the rendered HTML.
pub struct TitleStage;

impl Stage for TitleStage {
    fn name(&self) -> &'static str {
        "title"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        _ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        doc.title = extract_title(&doc.html);
        tracing::info!(title = %doc.title, "extracted page title");
        Ok(())
    }
}
