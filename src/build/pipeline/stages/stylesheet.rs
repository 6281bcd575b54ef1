//! Stylesheet building stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ResumeDocument, Stage};
use crate::build::stylesheet::build_stylesheet;

/// Stage that concatenates and preprocesses the CSS assets.
///
/// After this stage, `doc.stylesheet` contains plain CSS.
pub struct StylesheetStage;

impl Stage for StylesheetStage {
    fn name(&self) -> &'static str {
        "stylesheet"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let pattern = ctx.config.stylesheet_pattern(ctx.base_path);
        doc.stylesheet = build_stylesheet(&pattern)?;
        Ok(())
    }
}
