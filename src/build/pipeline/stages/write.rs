//! File writing stage.

use crate::build::pipeline::{ArtifactKind, PipelineContext, PipelineError, ResumeDocument, Stage};

/// Stage that writes the rendered artifacts to their output paths.
///
/// Order: site fragment, HTML page, stylesheet.
pub struct WriteStage;

impl Stage for WriteStage {
    fn name(&self) -> &'static str {
        "write"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let paths = ctx.paths;
        let outputs = [
            (ArtifactKind::Markdown, &paths.markdown, &doc.site_fragment),
            (ArtifactKind::Html, &paths.html, &doc.page_html),
            (ArtifactKind::Css, &paths.css, &doc.css),
        ];

        for (kind, path, contents) in outputs {
            let contents = contents.as_deref().ok_or_else(|| {
                PipelineError::stage(
                    "write",
                    format!(
                        "{} for '{}' was not rendered (was template stage run?)",
                        kind,
                        doc.source_path.display()
                    ),
                )
            })?;
            ctx.write(kind, path, contents)?;
        }

        Ok(())
    }
}
