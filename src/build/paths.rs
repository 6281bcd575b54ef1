//! Output path derivation.
//!
//! Every artifact lands at a fixed location relative to the source
//! document's directory `D` and basename `B`:
//!
//! - `D/../resume/index.md`     site fragment
//! - `D/../resume/B.html`       HTML page
//! - `D/../css/B-resume.css`    stylesheet
//! - `D/../resume/B-print.html` print HTML (pdf only)
//! - `D/../resume/B.pdf`        PDF (pdf only)

use std::path::{Component, Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum PathError {
    #[error("source path has no file name: {0}")]
    NoBasename(PathBuf),
}

/// The set of output locations for one source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub basename: String,
    pub markdown: PathBuf,
    pub html: PathBuf,
    pub css: PathBuf,
    pub print_html: PathBuf,
    pub pdf: PathBuf,
    /// Stylesheet link as written into the HTML page (relative to the page)
    pub stylesheet_href: String,
}

impl OutputPaths {
    /// Derive all output paths from the source document path.
    pub fn for_source(source: &Path) -> Result<Self, PathError> {
        let basename = basename(source)?;
        let root = project_root(source.parent().unwrap_or(Path::new("")));
        let resume_dir = root.join("resume");

        Ok(Self {
            markdown: resume_dir.join("index.md"),
            html: resume_dir.join(format!("{basename}.html")),
            css: root.join("css").join(format!("{basename}-resume.css")),
            print_html: resume_dir.join(format!("{basename}-print.html")),
            pdf: resume_dir.join(format!("{basename}.pdf")),
            stylesheet_href: format!("../css/{basename}-resume.css"),
            basename,
        })
    }

    /// Every output location, in write order.
    pub fn outputs(&self) -> [&Path; 5] {
        [
            self.markdown.as_path(),
            self.html.as_path(),
            self.css.as_path(),
            self.print_html.as_path(),
            self.pdf.as_path(),
        ]
    }

    /// The output that would overwrite `source`, if any.
    ///
    /// Parent directories are canonicalized on both sides, so `resume/./x.md`
    /// and `resume/x.md` are the same file. Outputs whose directory does not
    /// exist yet cannot collide.
    pub fn colliding_output(&self, source: &Path) -> std::io::Result<Option<&Path>> {
        let source = source.canonicalize()?;
        Ok(self
            .outputs()
            .into_iter()
            .find(|output| canonical_location(output).as_deref() == Some(source.as_path())))
    }
}

fn canonical_location(path: &Path) -> Option<PathBuf> {
    let file_name = path.file_name()?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    parent.canonicalize().ok().map(|dir| dir.join(file_name))
}

/// The source file name without directory or its last extension.
///
/// `resume/jane.md` -> `jane`, `jane.v2.md` -> `jane.v2`
pub fn basename(source: &Path) -> Result<String, PathError> {
    source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .ok_or_else(|| PathError::NoBasename(source.to_path_buf()))
}

/// `D/..`, taken lexically when `D` ends in a normal component.
fn project_root(source_dir: &Path) -> PathBuf {
    match source_dir.components().next_back() {
        Some(Component::Normal(_)) => source_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
        _ => source_dir.join(".."),
    }
}
