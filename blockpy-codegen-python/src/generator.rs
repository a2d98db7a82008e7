//! Python generation driver.

use std::collections::HashSet;

use blockpy_codegen::{Indent, NameKind, NameTable, prefix_lines};
use blockpy_ir::{Block, BlockKind, FieldValue, Program};
use indexmap::IndexMap;

use crate::order::Order;
use crate::reserved::RESERVED_WORDS;
use crate::{Error, Result};

/// Rendered output of one block.
#[derive(Debug, Clone, PartialEq)]
pub enum Code {
    /// Expression text plus the binding strength it reports.
    Expr(String, Order),
    /// Statement text, newline terminated by convention.
    Stmt(String),
}

/// Generates Python source from a block program.
///
/// A generator is reusable: every [`generate`](Self::generate) call is an
/// independent pass that resets the name table first, so rendering the same
/// program twice yields byte-identical output.
#[derive(Debug, Clone)]
pub struct PythonGenerator {
    pub(crate) name_table: NameTable,
    definitions: IndexMap<String, String>,
    indent: Indent,
    pub(crate) statement_prefix: Option<String>,
    pub(crate) statement_suffix: Option<String>,
    developer_variables: Vec<String>,
}

impl PythonGenerator {
    /// Create a generator with the standard Python reserved-word set.
    pub fn new() -> Self {
        Self {
            name_table: NameTable::new(RESERVED_WORDS),
            definitions: IndexMap::new(),
            indent: Indent::PYTHON,
            statement_prefix: None,
            statement_suffix: None,
            developer_variables: Vec::new(),
        }
    }

    /// Instrumentation text emitted before every conditional construct.
    /// `%1` expands to the quoted block id.
    pub fn with_statement_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.statement_prefix = Some(prefix.into());
        self
    }

    /// Instrumentation text injected at the top of every conditional branch.
    /// `%1` expands to the quoted block id.
    pub fn with_statement_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.statement_suffix = Some(suffix.into());
        self
    }

    /// Register an internal bookkeeping variable declared in the preamble
    /// but invisible to the user program.
    pub fn with_developer_variable(mut self, name: impl Into<String>) -> Self {
        self.developer_variables.push(name.into());
        self
    }

    /// Run one generation pass over a program.
    pub fn generate(&mut self, program: &Program) -> Result<String> {
        self.init(program);

        let mut code = String::new();
        for block in program.top_blocks() {
            match self.block_to_code(block)? {
                Code::Stmt(text) => code.push_str(&text),
                // A floating expression still renders; it becomes an
                // expression statement.
                Code::Expr(text, _) => {
                    code.push_str(&text);
                    code.push('\n');
                }
            }
        }
        Ok(self.finish(&code))
    }

    /// Reset per-pass state and hoist variable declarations.
    ///
    /// Developer variables are named first, then every user variable the
    /// program actually references, in declaration order; all are
    /// initialized to `None` in the preamble.
    fn init(&mut self, program: &Program) {
        self.name_table.reset();
        self.definitions.clear();
        self.name_table.set_variable_map(
            program
                .variables
                .iter()
                .map(|v| (v.id.clone(), v.name.clone())),
        );

        let mut defvars = Vec::new();
        for dev in &self.developer_variables {
            let name = self.name_table.get_name(dev, NameKind::Developer);
            defvars.push(format!("{name} = None"));
        }

        let referenced: HashSet<&str> = program
            .all_blocks()
            .filter(|b| {
                matches!(b.kind, BlockKind::VariablesGet | BlockKind::VariablesSet)
            })
            .filter_map(|b| b.field("VAR").and_then(FieldValue::variable_id))
            .collect();
        for var in &program.variables {
            if referenced.contains(var.id.as_str()) {
                let name = self.name_table.get_name(&var.id, NameKind::Variable);
                defvars.push(format!("{name} = None"));
            }
        }

        if !defvars.is_empty() {
            self.definitions
                .insert("variables".to_string(), defvars.join("\n"));
        }
    }

    /// Assemble the preamble and the user code into the final text.
    fn finish(&self, code: &str) -> String {
        if self.definitions.is_empty() {
            return code.to_string();
        }
        let defs: Vec<&str> = self.definitions.values().map(String::as_str).collect();
        format!("{}\n\n{}", defs.join("\n\n"), code)
    }

    /// Render one block, following `next` links through statement sequences.
    pub fn block_to_code(&mut self, block: &Block) -> Result<Code> {
        match self.render_block(block)? {
            Code::Stmt(mut text) => {
                if let Some(next) = block.next_block() {
                    match self.block_to_code(next)? {
                        Code::Stmt(next_text) => text.push_str(&next_text),
                        Code::Expr(next_text, _) => {
                            text.push_str(&next_text);
                            text.push('\n');
                        }
                    }
                }
                Ok(Code::Stmt(text))
            }
            expr => Ok(expr),
        }
    }

    /// The expression connected to a named input, parenthesized when its
    /// reported rank binds looser than `outer` requires.
    ///
    /// Returns `Ok(None)` for an absent input or connection; the caller
    /// substitutes the slot's default literal.
    pub fn value_to_code(
        &mut self,
        block: &Block,
        input: &str,
        outer: Order,
    ) -> Result<Option<String>> {
        let Some(child) = block.input_block(input) else {
            return Ok(None);
        };
        match self.block_to_code(child)? {
            Code::Expr(code, _) if code.is_empty() => Ok(None),
            Code::Expr(code, inner) => {
                if inner.needs_parens_in(outer) {
                    Ok(Some(format!("({code})")))
                } else {
                    Ok(Some(code))
                }
            }
            Code::Stmt(_) => Err(Error::ExpectedValue {
                kind: block.kind.to_string(),
                input: input.to_string(),
            }),
        }
    }

    /// The statement stack connected to a named input, indented one level.
    ///
    /// Returns an empty string for an absent input; the caller decides
    /// whether that means a `pass` placeholder.
    pub fn statement_to_code(&mut self, block: &Block, input: &str) -> Result<String> {
        let Some(child) = block.input_block(input) else {
            return Ok(String::new());
        };
        match self.block_to_code(child)? {
            Code::Stmt(code) => Ok(prefix_lines(&code, self.indent.as_str())),
            Code::Expr(..) => Err(Error::ExpectedStatement {
                kind: block.kind.to_string(),
                input: input.to_string(),
            }),
        }
    }

    /// Expand `%1` in an instrumentation template to the quoted block id.
    pub(crate) fn inject_id(&self, template: &str, block: &Block) -> String {
        template.replace("%1", &format!("'{}'", block.id))
    }

    pub(crate) fn indent_str(&self) -> &'static str {
        self.indent.as_str()
    }

    /// Placeholder body for branches Python forbids to be empty.
    pub(crate) fn pass_snippet(&self) -> String {
        format!("{}pass\n", self.indent.as_str())
    }
}

impl Default for PythonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_sequence_concatenates() {
        let program = Program::new().with_block(
            Block::new("text_print")
                .with_input("TEXT", Block::new("text").with_field("TEXT", "a"))
                .with_next(
                    Block::new("text_print")
                        .with_input("TEXT", Block::new("text").with_field("TEXT", "b")),
                ),
        );
        let code = PythonGenerator::new().generate(&program).unwrap();
        assert_eq!(code, "print(\"a\")\nprint(\"b\")\n");
    }

    #[test]
    fn test_floating_expression_becomes_statement_line() {
        let program =
            Program::new().with_block(Block::new("math_number").with_field("NUM", 7.0));
        let code = PythonGenerator::new().generate(&program).unwrap();
        assert_eq!(code, "7\n");
    }

    #[test]
    fn test_preamble_lists_only_referenced_variables() {
        let program = Program::new()
            .with_variable("v1", "used")
            .with_variable("v2", "unused")
            .with_block(
                Block::new("text_print").with_input(
                    "TEXT",
                    Block::new("variables_get").with_field("VAR", FieldValue::variable("v1")),
                ),
            );
        let code = PythonGenerator::new().generate(&program).unwrap();
        assert_eq!(code, "used = None\n\nprint(used)\n");
    }

    #[test]
    fn test_developer_variables_seed_the_preamble() {
        let program = Program::new().with_block(
            Block::new("text_print")
                .with_input("TEXT", Block::new("text").with_field("TEXT", "x")),
        );
        let code = PythonGenerator::new()
            .with_developer_variable("_step_count")
            .generate(&program)
            .unwrap();
        assert_eq!(code, "_step_count = None\n\nprint(\"x\")\n");
    }

    #[test]
    fn test_generation_is_idempotent() {
        let program = Program::new()
            .with_variable("v1", "x")
            .with_block(
                Block::new("variables_set")
                    .with_field("VAR", FieldValue::variable("v1"))
                    .with_input(
                        "VALUE",
                        Block::new("logic_operation")
                            .with_field("OP", "OR")
                            .with_input("A", Block::new("logic_boolean").with_field("BOOL", "TRUE")),
                    ),
            );
        let mut generator = PythonGenerator::new();
        let first = generator.generate(&program).unwrap();
        let second = generator.generate(&program).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsupported_kind_is_the_only_failure() {
        let program = Program::new().with_block(Block::new("controls_repeat_ext"));
        let err = PythonGenerator::new().generate(&program).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedBlock("controls_repeat_ext".to_string())
        );
    }

    #[test]
    fn test_statement_in_value_slot_is_rejected() {
        let program = Program::new().with_block(
            Block::new("text_print").with_input("TEXT", Block::new("text_print")),
        );
        let err = PythonGenerator::new().generate(&program).unwrap_err();
        assert_eq!(
            err,
            Error::ExpectedValue {
                kind: "text_print".to_string(),
                input: "TEXT".to_string(),
            }
        );
    }
}
