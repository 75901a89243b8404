//! Go interface extractor built on tree-sitter.
//!
//! Walks every `*_grpc.pb.go` file in a directory, finds interface
//! declarations matching the generated-server naming convention, and
//! returns their method signatures in raw shape form. Name and import
//! resolution happen later, in the core builder.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};
use tree_sitter::{Node, Parser};

use svcgen_core::{
    application::{ApplicationError, ports::InterfaceSource},
    domain::{RawInterface, RawMethod, SourceFile, TypeRef},
    error::SvcgenResult,
};

/// File suffix of generated gRPC server sources.
const SOURCE_SUFFIX: &str = "_grpc.pb.go";

/// Generated-but-unwanted interface name prefixes.
const SKIPPED_PREFIXES: &[&str] = &["Unimplemented", "Unsafe"];

/// The embedding-marker method name reserved by the interface convention.
///
/// The skip below asks whether a method name is a prefix of this marker —
/// the generated marker method carries the service name as a suffix and is
/// therefore longer than the marker itself, so it passes through. Observed
/// behavior, kept as-is.
const EMBED_MARKER: &str = "mustEmbedUnimplemented";

/// Production interface source: one flat directory of generated Go files.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoInterfaceSource;

impl GoInterfaceSource {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceSource for GoInterfaceSource {
    #[instrument(skip_all, fields(dir = %dir.display()))]
    fn scan(&self, dir: &Path) -> SvcgenResult<Vec<SourceFile>> {
        let entries = fs::read_dir(dir).map_err(|e| ApplicationError::SourceScan {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_source_suffix(path))
            .collect();
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let source = fs::read_to_string(&path).map_err(|e| ApplicationError::ParseFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            let file = parse_source(&path, &source)?;
            debug!(file = %file.path.display(), interfaces = file.interfaces.len(), "file parsed");
            files.push(file);
        }

        Ok(files)
    }
}

fn has_source_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SOURCE_SUFFIX))
}

/// Parse one file's text into its raw findings.
fn parse_source(path: &Path, source: &str) -> SvcgenResult<SourceFile> {
    let mut parser = Parser::new();
    parser
        .set_language(tree_sitter_go::language())
        .map_err(|e| ApplicationError::ParseFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ApplicationError::ParseFailed {
            path: path.to_path_buf(),
            reason: "parser produced no tree".into(),
        })?;

    let root = tree.root_node();
    let mut package = String::new();
    let mut interfaces = Vec::new();

    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        match child.kind() {
            "package_clause" => {
                if let Some(name) = package_name(&child, source) {
                    package = name;
                }
            }
            "type_declaration" => {
                collect_interfaces(&child, source, &mut interfaces);
            }
            _ => {}
        }
    }

    Ok(SourceFile {
        path: path.to_path_buf(),
        package,
        interfaces,
    })
}

fn package_name(clause: &Node, source: &str) -> Option<String> {
    let mut cursor = clause.walk();
    clause
        .children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")
        .map(|node| node_text(&node, source))
}

fn collect_interfaces(declaration: &Node, source: &str, interfaces: &mut Vec<RawInterface>) {
    let mut cursor = declaration.walk();
    for spec in declaration.children(&mut cursor) {
        if spec.kind() != "type_spec" {
            continue;
        }
        let Some(name_node) = spec.child_by_field_name("name") else {
            continue;
        };
        let Some(type_node) = spec.child_by_field_name("type") else {
            continue;
        };
        if type_node.kind() != "interface_type" {
            continue;
        }

        let name = node_text(&name_node, source);
        if !qualifies(&name) {
            continue;
        }

        interfaces.push(RawInterface {
            methods: interface_methods(&type_node, source),
            name,
        });
    }
}

/// Interface name filter of the generated-server convention.
fn qualifies(name: &str) -> bool {
    name.ends_with("Server") && !SKIPPED_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

fn interface_methods(interface: &Node, source: &str) -> Vec<RawMethod> {
    let mut methods = Vec::new();
    let mut cursor = interface.walk();
    for child in interface.children(&mut cursor) {
        if child.kind() != "method_spec_list" {
            continue;
        }
        let mut spec_cursor = child.walk();
        for spec in child.children(&mut spec_cursor) {
            if spec.kind() != "method_spec" {
                continue;
            }
            let Some(name_node) = spec.child_by_field_name("name") else {
                continue;
            };
            let name = node_text(&name_node, source);
            if name.is_empty() || EMBED_MARKER.starts_with(name.as_str()) {
                continue;
            }

            methods.push(RawMethod {
                params: spec
                    .child_by_field_name("parameters")
                    .map(|params| parameter_types(&params, source))
                    .unwrap_or_default(),
                results: spec
                    .child_by_field_name("result")
                    .map(|result| result_types(&result, source))
                    .unwrap_or_default(),
                name,
            });
        }
    }
    methods
}

fn parameter_types(parameter_list: &Node, source: &str) -> Vec<TypeRef> {
    let mut types = Vec::new();
    let mut cursor = parameter_list.walk();
    for declaration in parameter_list.children(&mut cursor) {
        if declaration.kind() != "parameter_declaration" {
            continue;
        }
        if let Some(type_node) = declaration.child_by_field_name("type") {
            types.push(classify(&type_node, source));
        }
    }
    types
}

/// A result is either a parenthesized parameter list or a single bare type.
fn result_types(result: &Node, source: &str) -> Vec<TypeRef> {
    if result.kind() == "parameter_list" {
        parameter_types(result, source)
    } else {
        vec![classify(result, source)]
    }
}

/// Classify a type expression into one of the recognized shapes.
fn classify(type_node: &Node, source: &str) -> TypeRef {
    match type_node.kind() {
        "qualified_type" => {
            let package = type_node
                .child_by_field_name("package")
                .map(|node| node_text(&node, source));
            let name = type_node
                .child_by_field_name("name")
                .map(|node| node_text(&node, source));
            match (package, name) {
                (Some(package), Some(name)) => TypeRef::Selector { package, name },
                _ => TypeRef::Unsupported,
            }
        }
        "pointer_type" => match type_node.named_child(0) {
            Some(target) if target.kind() == "type_identifier" => TypeRef::Pointer {
                name: node_text(&target, source),
            },
            _ => TypeRef::Unsupported,
        },
        "type_identifier" => TypeRef::Ident {
            name: node_text(type_node, source),
        },
        _ => TypeRef::Unsupported,
    }
}

fn node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or_default().to_string()
}
