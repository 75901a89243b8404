//! Canonical formatting pass for rendered Go source.
//!
//! Stands in for the standard formatter downstream of the templates:
//!
//! - re-parses the rendered text and rejects it when the tree contains
//!   syntax errors (degenerate signatures surface here, per unit, and the
//!   run continues with the other units),
//! - compacts the import block: specs deduplicated, grouped stdlib-first,
//!   sorted within each group,
//! - collapses blank-line runs, trims trailing whitespace, and ends the
//!   file with exactly one newline.

use tree_sitter::{Node, Parser};

/// Normalize rendered source, or explain why it is not valid Go.
pub(crate) fn canonicalize(source: &str) -> Result<String, String> {
    verify_syntax(source)?;
    let rewritten = rewrite_imports(source);
    Ok(tidy_whitespace(&rewritten))
}

fn verify_syntax(source: &str) -> Result<(), String> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| e.to_string())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| "parser produced no tree".to_string())?;

    let root = tree.root_node();
    if !root.has_error() {
        return Ok(());
    }

    match first_error(&root) {
        Some(node) => {
            let position = node.start_position();
            Err(format!(
                "syntax error at line {}, column {}",
                position.row + 1,
                position.column + 1
            ))
        }
        None => Err("syntax error".to_string()),
    }
}

fn first_error<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(error) = first_error(&child) {
            return Some(error);
        }
    }
    None
}

/// Rewrite the first `import ( … )` block: dedup, group, sort.
fn rewrite_imports(source: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();

    let Some(open) = lines.iter().position(|line| line.trim() == "import (") else {
        return source.to_string();
    };
    let Some(close_offset) = lines[open + 1..]
        .iter()
        .position(|line| line.trim() == ")")
    else {
        return source.to_string();
    };
    let close = open + 1 + close_offset;

    let mut specs: Vec<&str> = lines[open + 1..close]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();
    specs.sort_by_key(|spec| (!is_std_import(spec), import_path(spec).to_string()));
    specs.dedup();

    let mut out: Vec<String> = lines[..=open].iter().map(|s| s.to_string()).collect();
    let mut previous_std = None;
    for spec in specs {
        let std = is_std_import(spec);
        if previous_std == Some(true) && !std {
            out.push(String::new());
        }
        out.push(format!("\t{spec}"));
        previous_std = Some(std);
    }
    out.extend(lines[close..].iter().map(|s| s.to_string()));
    out.join("\n")
}

/// Standard-library imports have no dot in their first path segment.
fn is_std_import(spec: &str) -> bool {
    let path = import_path(spec);
    !path.split('/').next().unwrap_or("").contains('.')
}

/// The quoted path of an import spec, alias stripped.
fn import_path(spec: &str) -> &str {
    spec.rsplit('"')
        .nth(1)
        .unwrap_or(spec)
}

fn tidy_whitespace(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut blank_run = 0usize;

    for line in source.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            out.push('\n');
        } else {
            blank_run = 0;
            out.push_str(trimmed);
            out.push('\n');
        }
    }

    // Exactly one trailing newline, and no leading blank line.
    let trimmed = out.trim_start_matches('\n').trim_end_matches('\n');
    format!("{trimmed}\n")
}
