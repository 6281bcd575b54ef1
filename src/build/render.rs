use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("failed to read template {0}: {1}")]
    Read(std::path::PathBuf, std::io::Error),
}

/// Template for the static-site (Jekyll) fragment.
pub const SITE_FRAGMENT_TEMPLATE: &str = "jekyll.md";
/// Template for the standalone HTML page.
pub const PAGE_TEMPLATE: &str = "page.html";
/// Template wrapping the preprocessed stylesheet.
pub const STYLESHEET_TEMPLATE: &str = "resume_style.css";

const BUILTIN_TEMPLATES: [(&str, &str); 3] = [
    (
        SITE_FRAGMENT_TEMPLATE,
        include_str!("../../assets/templates/jekyll.md"),
    ),
    (PAGE_TEMPLATE, include_str!("../../assets/templates/page.html")),
    (
        STYLESHEET_TEMPLATE,
        include_str!("../../assets/templates/resume_style.css"),
    ),
];

/// The template renderer, wrapping Tera.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Create a renderer from the built-in templates only.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        for (name, content) in BUILTIN_TEMPLATES {
            tera.add_raw_template(name, content)?;
        }
        Ok(Self { tera })
    }

    /// Create a renderer loading templates from the given directory.
    ///
    /// Each template missing from the directory (or the whole directory)
    /// falls back to the built-in version.
    pub fn new(templates_path: &Path) -> Result<Self, RenderError> {
        if !templates_path.is_dir() {
            tracing::debug!(path = %templates_path.display(), "no template directory, using builtins");
            return Self::builtin();
        }

        let mut tera = Tera::default();
        for (name, builtin) in BUILTIN_TEMPLATES {
            let path = templates_path.join(name);
            if path.is_file() {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| RenderError::Read(path.clone(), e))?;
                tracing::debug!(template = name, path = %path.display(), "using custom template");
                tera.add_raw_template(name, &content)?;
            } else {
                tera.add_raw_template(name, builtin)?;
            }
        }
        Ok(Self { tera })
    }

    /// Render the site fragment (`index.md`).
    pub fn render_site_fragment(&self, context: &SiteFragmentContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("title", &context.title);
        tera_context.insert("resume", &context.resume);
        tera_context.insert("extra", &context.extra);

        Ok(self.tera.render(SITE_FRAGMENT_TEMPLATE, &tera_context)?)
    }

    /// Render the standalone HTML page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("title", &context.title);
        tera_context.insert("cssfile", &context.cssfile);
        tera_context.insert("resume", &context.resume);
        tera_context.insert("reload", &context.reload);
        tera_context.insert("extra", &context.extra);

        Ok(self.tera.render(PAGE_TEMPLATE, &tera_context)?)
    }

    /// Render the stylesheet wrapper.
    pub fn render_stylesheet(&self, context: &StylesheetContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("style", &context.style);
        tera_context.insert("extra", &context.extra);

        Ok(self.tera.render(STYLESHEET_TEMPLATE, &tera_context)?)
    }
}

/// Context passed to the site fragment template.
#[derive(Debug, Serialize)]
pub struct SiteFragmentContext {
    pub title: String,
    /// Rendered résumé HTML
    pub resume: String,
    pub extra: serde_json::Value,
}

/// Context passed to the page template.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub title: String,
    /// Stylesheet href, relative to the page
    pub cssfile: String,
    pub resume: String,
    /// Development mode: the page reloads itself periodically
    pub reload: bool,
    pub extra: serde_json::Value,
}

/// Context passed to the stylesheet template.
#[derive(Debug, Serialize)]
pub struct StylesheetContext {
    /// Preprocessed CSS
    pub style: String,
    pub extra: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page(reload: bool) -> PageContext {
        PageContext {
            title: "Jane <Doe> | Engineer".to_string(),
            cssfile: "../css/jane-resume.css".to_string(),
            resume: "<h1>Jane</h1>".to_string(),
            reload,
            extra: serde_json::Value::Null,
        }
    }

    #[test]
    fn test_builtin_page() {
        let renderer = Renderer::builtin().unwrap();
        let html = renderer.render_page(&page(false)).unwrap();

        assert!(html.contains("<title>Jane &lt;Doe&gt; | Engineer</title>"));
        assert!(html.contains(r#"href="../css/jane-resume.css""#));
        assert!(html.contains("<h1>Jane</h1>"), "content must not be escaped");
        assert!(html.contains(r#"<body class="">"#));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_reload_flag() {
        let renderer = Renderer::builtin().unwrap();
        let html = renderer.render_page(&page(true)).unwrap();
        assert!(html.contains(r#"<meta http-equiv="refresh""#));
    }

    #[test]
    fn test_builtin_site_fragment() {
        let renderer = Renderer::builtin().unwrap();
        let md = renderer
            .render_site_fragment(&SiteFragmentContext {
                title: "Jane \"JD\" Doe | Engineer".to_string(),
                resume: "<p>Rust &amp; C</p>".to_string(),
                extra: serde_json::Value::Null,
            })
            .unwrap();

        assert!(md.starts_with("---\nlayout: resume\n"));
        assert!(md.contains(r#"title: "Jane \"JD\" Doe | Engineer""#), "{md}");
        assert!(md.contains("<p>Rust &amp; C</p>"));
    }

    #[test]
    fn test_builtin_stylesheet() {
        let renderer = Renderer::builtin().unwrap();
        let css = renderer
            .render_stylesheet(&StylesheetContext {
                style: "a > b { color: red; }".to_string(),
                extra: serde_json::Value::Null,
            })
            .unwrap();
        assert!(css.contains("a > b { color: red; }"));
    }

    #[test]
    fn test_custom_template_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PAGE_TEMPLATE),
            "{{ title }}|{{ extra.email }}",
        )
        .unwrap();

        let renderer = Renderer::new(dir.path()).unwrap();
        let mut context = page(false);
        context.title = "Jane".to_string();
        context.extra = serde_json::json!({ "email": "jane@example.com" });

        let html = renderer.render_page(&context).unwrap();
        assert_eq!(html, "Jane|jane@example.com");

        // Templates not present in the directory fall back to the builtins
        let css = renderer
            .render_stylesheet(&StylesheetContext {
                style: "p {}".to_string(),
                extra: serde_json::Value::Null,
            })
            .unwrap();
        assert!(css.contains("p {}"));
    }

    #[test]
    fn test_missing_directory_uses_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = Renderer::new(&dir.path().join("missing")).unwrap();
        assert!(renderer.render_page(&page(false)).is_ok());
    }

    #[test]
    fn test_invalid_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PAGE_TEMPLATE), "{% if %}").unwrap();

        let result = Renderer::new(dir.path());
        assert!(matches!(result, Err(RenderError::Template(_))));
    }
}
