//! Single-line declaration grammar.
//!
//! ```text
//! line     := wrapper | name ["?"] ":" union [";" | ","]
//! union    := ["|"] member ("|" member)*
//! member   := "null" | primitive | "\"" literal "\""
//! wrapper  := ["export"] ("interface" ident | "type" ident "=") "{"  |  "}" [";"]
//! ```

use std::sync::LazyLock;

use formschema_tree::{EnumValues, Field, FieldKind, FieldType};
use regex::Regex;

use crate::error::ImportErrorKind;

static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap()
});

static OPEN_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:export\s+)?(?:interface\s+[A-Za-z_$][\w$]*(?:\s+extends\s+[\w$.,<>\s]+?)?|type\s+[A-Za-z_$][\w$]*\s*=)\s*\{$",
    )
    .unwrap()
});

static CLOSE_WRAPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\}\s*[;,]?$").unwrap());

/// What a physical line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Line {
    /// Empty or comment-only.
    Blank,
    /// `interface Name {`, `}` and friends.
    Wrapper,
    Field(Field),
}

pub(crate) fn parse_line(raw: &str) -> Result<Line, ImportErrorKind> {
    let code = strip_comment(raw).trim();
    if code.is_empty() {
        return Ok(Line::Blank);
    }
    if OPEN_WRAPPER.is_match(code) || CLOSE_WRAPPER.is_match(code) {
        return Ok(Line::Wrapper);
    }

    let body = code
        .strip_suffix(';')
        .or_else(|| code.strip_suffix(','))
        .unwrap_or(code)
        .trim_end();
    let Some((name_part, type_part)) = split_field(body) else {
        return Err(ImportErrorKind::MissingColon);
    };

    let (name, optional) = parse_name(name_part.trim())?;
    let type_expr = type_part.trim();
    if type_expr.is_empty() {
        return Err(ImportErrorKind::EmptyType);
    }
    let (kind, nullable) = parse_type(type_expr)?;

    // Nullable declarations are optional in this dialect.
    Ok(Line::Field(
        Field::new(name, kind)
            .with_allow_null(nullable)
            .with_required(!optional && !nullable),
    ))
}

/// Cut a trailing `// comment`, ignoring `//` inside double quotes.
fn strip_comment(raw: &str) -> &str {
    let mut in_literal = false;
    let mut escaped = false;
    let mut prev_slash = false;
    for (index, ch) in raw.char_indices() {
        if in_literal {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_literal = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => {
                in_literal = true;
                prev_slash = false;
            }
            '/' if prev_slash => return &raw[..index - 1],
            '/' => prev_slash = true,
            _ => prev_slash = false,
        }
    }
    raw
}

/// Split `name: type` at the first colon outside a quoted name.
fn split_field(body: &str) -> Option<(&str, &str)> {
    let mut in_literal = false;
    let mut escaped = false;
    for (index, ch) in body.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_literal => escaped = true,
            '"' => in_literal = !in_literal,
            ':' if !in_literal => return Some((&body[..index], &body[index + 1..])),
            _ => {}
        }
    }
    None
}

fn parse_name(part: &str) -> Result<(String, bool), ImportErrorKind> {
    let (name, optional) = match part.strip_suffix('?') {
        Some(name) => (name.trim_end(), true),
        None => (part, false),
    };
    if let Some(quoted) = name
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        && !quoted.is_empty()
        && !quoted.contains('"')
    {
        return Ok((quoted.to_string(), optional));
    }
    if NAME.is_match(name) {
        Ok((name.to_string(), optional))
    } else {
        Err(ImportErrorKind::InvalidName(name.to_string()))
    }
}

/// Resolve a type expression to a field kind and its nullability.
fn parse_type(expr: &str) -> Result<(FieldKind, bool), ImportErrorKind> {
    let mut members = split_union(expr)?;
    let nullable = members.contains(&"null");
    members.retain(|member| *member != "null");

    match members.as_slice() {
        [] => Err(ImportErrorKind::UnknownType(expr.to_string())),
        [single] if !single.starts_with('"') => Ok((primitive(single)?, nullable)),
        _ if !members.iter().any(|member| member.starts_with('"')) => {
            Err(ImportErrorKind::UnknownType(expr.to_string()))
        }
        _ => {
            let mut values = EnumValues::new();
            for member in &members {
                if !member.starts_with('"') {
                    return Err(ImportErrorKind::MixedUnion(expr.to_string()));
                }
                values.insert(literal(member)?);
            }
            Ok((FieldKind::Enum { values }, nullable))
        }
    }
}

/// Split on `|` outside double quotes. A single leading `|` is allowed.
fn split_union(expr: &str) -> Result<Vec<&str>, ImportErrorKind> {
    let mut members = Vec::new();
    let mut start = 0;
    let mut in_literal = false;
    let mut escaped = false;
    for (index, ch) in expr.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_literal => escaped = true,
            '"' => in_literal = !in_literal,
            '|' if !in_literal => {
                members.push(expr[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    if in_literal {
        return Err(ImportErrorKind::UnterminatedLiteral);
    }
    members.push(expr[start..].trim());

    if members.len() > 1 && members[0].is_empty() {
        members.remove(0);
    }
    if members.iter().any(|member| member.is_empty()) {
        return Err(ImportErrorKind::UnknownType(expr.to_string()));
    }
    Ok(members)
}

fn primitive(token: &str) -> Result<FieldKind, ImportErrorKind> {
    let array_of = |item_type| FieldKind::Array {
        item_type,
        item_fields: Vec::new(),
    };
    Ok(match token {
        "string" | "Date" => FieldKind::String,
        "number" => FieldKind::Number,
        "boolean" => FieldKind::Boolean,
        "object" => FieldKind::empty(FieldType::Object),
        "array" | "any[]" | "string[]" => array_of(FieldType::String),
        "number[]" => array_of(FieldType::Number),
        "boolean[]" => array_of(FieldType::Boolean),
        other => return Err(ImportErrorKind::UnknownType(other.to_string())),
    })
}

fn literal(member: &str) -> Result<String, ImportErrorKind> {
    let inner = member
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ImportErrorKind::UnterminatedLiteral)?;
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => value.extend(chars.next()),
            '"' => return Err(ImportErrorKind::UnknownType(member.to_string())),
            _ => value.push(ch),
        }
    }
    Ok(value)
}
