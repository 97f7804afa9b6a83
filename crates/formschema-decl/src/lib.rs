//! Declaration importer for formschema
//!
//! Turns informally written, TypeScript-flavoured field declarations into a
//! field tree, one `name: type;` per line:
//!
//! ```text
//! id: string;
//! role: "ADMIN" | "USER";   // enum in declaration order
//! dept: string | null;      // nullable, and therefore optional
//! ```
//!
//! Unlike the schema decoder, the importer is strict: the first line it
//! cannot read aborts the import with an [`ImportError`] naming that line, and
//! no partial result is returned.

mod error;
mod line;


pub use error::{ImportError, ImportErrorKind};

use formschema_tree::Field;
use tracing::debug;

use crate::line::{Line, parse_line};

/// Import declaration text as a list of top-level fields.
pub fn import_declarations(text: &str) -> Result<Vec<Field>, ImportError> {
    let mut fields = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        match parse_line(raw) {
            Ok(Line::Blank | Line::Wrapper) => {}
            Ok(Line::Field(field)) => fields.push(field),
            Err(kind) => {
                let error = ImportError {
                    line: index + 1,
                    text: raw.to_string(),
                    kind,
                };
                debug!(%error, "declaration import aborted");
                return Err(error);
            }
        }
    }
    debug!(count = fields.len(), "imported declarations");
    Ok(fields)
}
