//! PDF export stage.

use crate::build::pdf::PdfExporter;
use crate::build::pipeline::{ArtifactKind, PipelineContext, PipelineError, ResumeDocument, Stage};

/// Stage that writes the print HTML and renders it to PDF.
///
/// The print HTML is the page with the configured class added to
/// `<body class="">`. The renderer's exit status is checked.
pub struct PdfStage;

impl Stage for PdfStage {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn process(
        &self,
        doc: &mut ResumeDocument,
        ctx: &mut PipelineContext,
    ) -> Result<(), PipelineError> {
        let page_html = doc.page_html.as_deref().ok_or_else(|| {
            PipelineError::stage("pdf", "page HTML was not rendered (was template stage run?)")
        })?;

        let config = ctx.config;
        let pdf_config = &config.pdf;
        let paths = ctx.paths;
        let exporter = PdfExporter::new(pdf_config);

        let print_html = match exporter.patch_body_class(page_html) {
            Some(patched) => patched,
            None => {
                tracing::warn!(
                    "page template has no <body class=\"\">, print HTML is left unclassed"
                );
                page_html.to_string()
            }
        };
        if pdf_config.keep_print_html {
            ctx.write(ArtifactKind::PrintHtml, &paths.print_html, &print_html)?;
        } else {
            ctx.write_scratch(&paths.print_html, &print_html)?;
        }

        println!(
            "\ncommand (might freeze): {}",
            exporter.display_command(&paths.print_html, &paths.pdf)
        );
        let rendered = exporter.render(&paths.print_html, &paths.pdf);

        if !pdf_config.keep_print_html {
            std::fs::remove_file(&paths.print_html)?;
            tracing::info!(path = %paths.print_html.display(), "removed print html");
        }
        rendered?;

        ctx.record(ArtifactKind::Pdf, &paths.pdf);
        Ok(())
    }
}
