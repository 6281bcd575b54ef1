//! Default pipeline stages.
//!
//! 1. **StylesheetStage** - Build the preprocessed stylesheet from the CSS assets
//! 2. **MarkdownStage** - Convert markdown to HTML with smart punctuation
//! 3. **TitleStage** - Derive the page title from the first headings
//! 4. **TemplateStage** - Render the site fragment, page and stylesheet templates
//! 5. **WriteStage** - Write the rendered artifacts to their output paths
//! 6. **PdfStage** - Export a PDF through the external renderer (optional)

mod markdown;
mod pdf;
mod stylesheet;
mod template;
mod title;
mod write;

pub use markdown::MarkdownStage;
pub use pdf::PdfStage;
pub use stylesheet::StylesheetStage;
pub use template::TemplateStage;
pub use title::TitleStage;
pub use write::WriteStage;
