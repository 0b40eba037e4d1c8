//! # Lambda Kit Python Source Scanner (`common::python`)
//!
//! File: cli/src/common/python/mod.rs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production packaging yet.
//!

//! ## Overview
//!
//! Decides whether a Python source file defines a Lambda-style handler by
//! parsing it with the tree-sitter Python grammar and inspecting the
//! module's top-level function definitions. Working on the syntax tree means
//! handler-like text inside comments or strings never counts.
//!
//! ## Architecture
//!
//! - `HandlerRules`: which annotations make a signature "handler-shaped".
//! - `PythonScanner`: owns a `tree_sitter::Parser` configured for Python and
//!   reuses it across files.
//! - `SourceScan`: result of scanning one file. A file whose tree contains
//!   syntax errors, or Python 2 only `print`/`exec` statements the grammar
//!   still accepts, is reported as `InvalidSyntax` instead of failing, so one
//!   broken sibling cannot hide a valid handler elsewhere.
//! - `signature`: node-level checks on parameter lists and annotations.
//!
//! ## Usage
//!
//! ```rust
//! let mut scanner = PythonScanner::new()?;
//! let rules = HandlerRules::default();
//! let found = scanner.contains_lambda_handler_code(
//!     "def handler(event: dict, context: lambda_context.Context): ...",
//!     &rules,
//! )?;
//! assert!(found);
//! ```
//!
mod signature;

use crate::core::error::{LambdaKitError, Result};
use tracing::debug;
use tree_sitter::{Language, Node, Parser};

/// Annotation names the handler signature check accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerRules {
    /// Bare type names allowed on the first (event) parameter.
    pub mapping_types: Vec<String>,
    /// Required final component of the second (context) parameter's
    /// attribute-style annotation.
    pub context_type: String,
}

impl Default for HandlerRules {
    fn default() -> Self {
        HandlerRules {
            mapping_types: ["dict", "Dict", "Mapping", "MutableMapping"]
                .into_iter()
                .map(String::from)
                .collect(),
            context_type: "Context".to_string(),
        }
    }
}

/// A top-level definition with a handler-shaped signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerDefinition {
    pub name: String,
    /// 1-based line of the `def` keyword.
    pub line: usize,
}

/// Outcome of scanning a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceScan {
    /// The source does not parse as Python.
    InvalidSyntax,
    /// The source parsed; these are its handler-shaped definitions, in order.
    Parsed(Vec<HandlerDefinition>),
}

impl SourceScan {
    pub fn handlers(&self) -> &[HandlerDefinition] {
        match self {
            SourceScan::InvalidSyntax => &[],
            SourceScan::Parsed(found) => found,
        }
    }
}

/// A reusable tree-sitter parser loaded with the Python grammar.
pub struct PythonScanner {
    parser: Parser,
}

impl PythonScanner {
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| LambdaKitError::Parser(format!("Failed to load Python grammar: {}", e)))?;
        Ok(PythonScanner { parser })
    }

    /// Lists every top-level handler-shaped definition in `source`.
    pub fn scan(&mut self, source: &str, rules: &HandlerRules) -> Result<SourceScan> {
        self.scan_inner(source, rules, false)
    }

    /// Returns `true` as soon as one handler-shaped definition is found.
    /// Source that does not parse yields `false`.
    pub fn contains_lambda_handler_code(
        &mut self,
        source: &str,
        rules: &HandlerRules,
    ) -> Result<bool> {
        let scan = self.scan_inner(source, rules, true)?;
        Ok(!scan.handlers().is_empty())
    }

    fn scan_inner(
        &mut self,
        source: &str,
        rules: &HandlerRules,
        stop_at_first: bool,
    ) -> Result<SourceScan> {
        let tree = self.parser.parse(source, None).ok_or_else(|| {
            LambdaKitError::Parser("tree-sitter returned no syntax tree".to_string())
        })?;
        let root = tree.root_node();
        if root.has_error() {
            debug!("Source contains syntax errors; treating it as non-Python.");
            return Ok(SourceScan::InvalidSyntax);
        }
        if let Some(legacy) = find_python2_statement(root) {
            debug!(
                "Python 2 '{}' at line {}; treating the source as invalid.",
                legacy.kind(),
                legacy.start_position().row + 1
            );
            return Ok(SourceScan::InvalidSyntax);
        }

        let bytes = source.as_bytes();
        let mut found = Vec::new();
        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            let Some(function) = top_level_function(statement) else {
                continue;
            };
            if let Some(definition) = signature::handler_definition(function, bytes, rules) {
                debug!(
                    "Handler-shaped definition '{}' at line {}",
                    definition.name, definition.line
                );
                found.push(definition);
                if stop_at_first {
                    break;
                }
            }
        }
        Ok(SourceScan::Parsed(found))
    }
}

/// Statement forms the grammar still accepts although Python 3 rejects them.
const PYTHON2_STATEMENTS: [&str; 2] = ["print_statement", "exec_statement"];

/// Depth-first search for the first Python 2 only statement below `root`.
fn find_python2_statement(root: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if PYTHON2_STATEMENTS.contains(&node.kind()) && !is_chevron_print(node) {
            return Some(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// `print >>f, x` is also a valid Python 3 expression statement (a tuple).
fn is_chevron_print(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let chevron = node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "chevron");
    chevron
}

/// Unwraps decorators so `@decorator\ndef handler(...)` is still seen.
fn top_level_function(statement: Node<'_>) -> Option<Node<'_>> {
    match statement.kind() {
        "function_definition" => Some(statement),
        "decorated_definition" => statement
            .child_by_field_name("definition")
            .filter(|d| d.kind() == "function_definition"),
        _ => None,
    }
}
