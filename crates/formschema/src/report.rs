//! Human-readable error reports.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use formschema_decl::ImportError;

use crate::DocumentSyntaxError;

/// Render an import failure against the declaration text it came from,
/// underlining the offending line.
pub fn render_import_error(
    error: &ImportError,
    source: &str,
    path: &str,
    styled: bool,
) -> String {
    let title = error.kind.to_string();
    let span = line_span(source, error.line);
    render(&title, source, path, span, styled)
}

/// Render a document syntax error, pointing at the reported column.
pub fn render_syntax_error(
    error: &DocumentSyntaxError,
    source: &str,
    path: &str,
    styled: bool,
) -> String {
    let at = match source_line(source, error.line) {
        Some((offset, content)) => offset + error.column.saturating_sub(1).min(content.len()),
        None => source.len(),
    };
    render(&error.message, source, path, (at, at), styled)
}

fn render(title: &str, source: &str, path: &str, span: (usize, usize), styled: bool) -> String {
    let (start, end) = span;
    let groups = [Level::ERROR.primary_title(title).element(
        Snippet::source(source)
            .line_start(1)
            .path(path)
            .annotation(AnnotationKind::Primary.span(start..end).label(title)),
    )];

    let renderer = if styled {
        Renderer::styled()
    } else {
        Renderer::plain()
    };
    renderer.render(&groups).to_string()
}

/// Byte offset and content, without line terminator, of 1-indexed `line`.
fn source_line(source: &str, line: usize) -> Option<(usize, &str)> {
    let mut offset = 0;
    for (index, raw) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            return Some((offset, raw.trim_end_matches(['\n', '\r'])));
        }
        offset += raw.len();
    }
    None
}

/// Byte range of the trimmed content of 1-indexed `line`.
///
/// Lines past the end resolve to an empty span at the end of `source`.
fn line_span(source: &str, line: usize) -> (usize, usize) {
    let Some((offset, content)) = source_line(source, line) else {
        return (source.len(), source.len());
    };
    let leading = content.len() - content.trim_start().len();
    let start = offset + leading;
    let end = (offset + content.trim_end().len()).max(start);
    (start, end)
}
