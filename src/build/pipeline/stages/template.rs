//! Template rendering stage.

use crate::build::pipeline::{PipelineContext, PipelineError, ResumeDocument, Stage};
use crate::build::render::{PageContext, SiteFragmentContext, StylesheetContext};

/// Stage that renders all three templates.
///
/// After this stage, `doc.site_fragment`, `doc.page_html` and `doc.css`
/// hold the final file contents.
pub struct TemplateStage;

impl Stage for TemplateStage {
    fn name(&self) -> &'static str {
        "template"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let extra = &ctx.config.extra;

        let site_fragment = ctx.renderer.render_site_fragment(&SiteFragmentContext {
            title: doc.title.clone(),
            resume: doc.html.clone(),
            extra: extra.clone(),
        })?;

        let page_html = ctx.renderer.render_page(&PageContext {
            title: doc.title.clone(),
            cssfile: ctx.paths.stylesheet_href.clone(),
            resume: doc.html.clone(),
            reload: ctx.reload,
            extra: extra.clone(),
        })?;

        let css = ctx.renderer.render_stylesheet(&StylesheetContext {
            style: doc.stylesheet.clone(),
            extra: extra.clone(),
        })?;

        doc.site_fragment = Some(site_fragment);
        doc.page_html = Some(page_html);
        doc.css = Some(css);

        Ok(())
    }
}
