//! Per-kind renderers.
//!
//! One match arm per block kind. Expression renderers report the precedence
//! rank of the text they produce; statement renderers end their text with a
//! newline. Missing inputs never fail: each slot substitutes a default
//! literal so the output always parses, even for half-built programs.

use blockpy_codegen::{NameKind, prefix_lines};
use blockpy_ir::{Block, BlockKind, FieldValue};

use crate::generator::{Code, PythonGenerator};
use crate::order::Order;
use crate::{Error, Result};

impl PythonGenerator {
    pub(crate) fn render_block(&mut self, block: &Block) -> Result<Code> {
        match &block.kind {
            BlockKind::LogicNull => Ok(Code::Expr("null".to_string(), Order::Atomic)),
            BlockKind::Text => Ok(self.render_text(block)),
            BlockKind::MathNumber => Ok(self.render_number(block)),
            BlockKind::LogicBoolean => Ok(self.render_boolean(block)),
            BlockKind::Member => self.render_member(block),
            BlockKind::ListsCreateWith => self.render_list(block),
            BlockKind::ListsCreateWithItem => self.render_list_item(block),
            BlockKind::ListsCreateWithContainer => self.render_list_container(block),
            BlockKind::Object => self.render_object(block),
            BlockKind::ControlsIf | BlockKind::ControlsIfElse => self.render_if(block),
            BlockKind::LogicCompare => self.render_compare(block),
            BlockKind::LogicOperation => self.render_operation(block),
            BlockKind::LogicNegate => self.render_negate(block),
            BlockKind::LogicTernary => self.render_ternary(block),
            BlockKind::VariablesGet => Ok(self.render_variable_get(block)),
            BlockKind::VariablesSet => self.render_variable_set(block),
            BlockKind::TextPrint => self.render_print(block),
            BlockKind::Unknown(name) => Err(Error::UnsupportedBlock(name.clone())),
        }
    }

    fn render_text(&self, block: &Block) -> Code {
        let text = block.field_text("TEXT").unwrap_or_default();
        // Known gap: the text is not escaped.
        Code::Expr(format!("\"{text}\""), Order::Atomic)
    }

    fn render_number(&self, block: &Block) -> Code {
        let code = block
            .field("NUM")
            .map(ToString::to_string)
            .unwrap_or_else(|| "0".to_string());
        Code::Expr(code, Order::Atomic)
    }

    fn render_boolean(&self, block: &Block) -> Code {
        let code = if block.field_text("BOOL") == Some("TRUE") {
            "True"
        } else {
            "False"
        };
        Code::Expr(code.to_string(), Order::Atomic)
    }

    /// A single `"key": value` pair, only meaningful inside an object's
    /// member stack. Comma/newline terminated so members concatenate.
    fn render_member(&mut self, block: &Block) -> Result<Code> {
        let value = self
            .value_to_code(block, "MEMBER_VALUE", Order::Atomic)?
            .unwrap_or_else(|| "None".to_string());
        let name = block.field_text("MEMBER_NAME").unwrap_or_default();
        Ok(Code::Stmt(format!("\"{name}\": {value},\n")))
    }

    fn render_object(&mut self, block: &Block) -> Result<Code> {
        let members = self.statement_to_code(block, "MEMBERS")?;
        Ok(Code::Expr(format!("{{\n{members}}}"), Order::Atomic))
    }

    fn render_list(&mut self, block: &Block) -> Result<Code> {
        let mut values = Vec::new();
        for i in 0..block.item_count() {
            // Absent items are omitted, not replaced by a placeholder.
            if let Some(value) = self.value_to_code(block, &format!("ADD{i}"), Order::Atomic)? {
                values.push(value);
            }
        }
        if values.is_empty() {
            return Ok(Code::Expr("{}".to_string(), Order::Atomic));
        }
        // Items keep a four-space continuation indent, independent of the
        // statement indent.
        let items = values.join(",\n").replace('\n', "\n    ");
        Ok(Code::Expr(format!("{{\n    {items}\n}}"), Order::Atomic))
    }

    /// Mutator helper: passes the item value through.
    fn render_list_item(&mut self, block: &Block) -> Result<Code> {
        let value = self
            .value_to_code(block, "ITEM", Order::Atomic)?
            .unwrap_or_default();
        Ok(Code::Stmt(value))
    }

    /// Mutator helper: passes the stacked statements through.
    fn render_list_container(&mut self, block: &Block) -> Result<Code> {
        let stack = self.statement_to_code(block, "STACK")?;
        Ok(Code::Stmt(stack))
    }

    /// If / elif / else chain, unbounded arms.
    ///
    /// Arms continue as long as the next condition input exists. A missing
    /// condition defaults to `False`, a missing branch to `pass`. The
    /// statement prefix/suffix hooks let the surrounding system inject
    /// instrumentation without touching this renderer.
    fn render_if(&mut self, block: &Block) -> Result<Code> {
        let suffix = self.statement_suffix.clone();
        let mut code = String::new();

        if let Some(prefix) = &self.statement_prefix {
            code.push_str(&self.inject_id(prefix, block));
        }

        let mut n = 0;
        loop {
            let condition = self
                .value_to_code(block, &format!("IF{n}"), Order::Atomic)?
                .unwrap_or_else(|| "False".to_string());
            let branch = self.branch_code(block, &format!("DO{n}"), suffix.as_deref())?;
            code.push_str(if n == 0 { "if " } else { "elif " });
            code.push_str(&condition);
            code.push_str(":\n");
            code.push_str(&branch);
            n += 1;
            if !self.condition_exists(block, n) {
                break;
            }
        }

        if block.has_input("ELSE") || block.has_else_state() || suffix.is_some() {
            let branch = self.branch_code(block, "ELSE", suffix.as_deref())?;
            code.push_str("else:\n");
            code.push_str(&branch);
        }
        Ok(Code::Stmt(code))
    }

    fn branch_code(&mut self, block: &Block, input: &str, suffix: Option<&str>) -> Result<String> {
        let mut branch = self.statement_to_code(block, input)?;
        if branch.is_empty() {
            branch = self.pass_snippet();
        }
        if let Some(suffix) = suffix {
            branch = format!(
                "{}{branch}",
                prefix_lines(&self.inject_id(suffix, block), self.indent_str())
            );
        }
        Ok(branch)
    }

    fn condition_exists(&self, block: &Block, n: usize) -> bool {
        block.has_input(&format!("IF{n}")) || (n >= 1 && n <= block.else_if_count())
    }

    fn render_compare(&mut self, block: &Block) -> Result<Code> {
        let operator = match block.field_text("OP") {
            Some("NEQ") => "!=",
            Some("LT") => "<",
            Some("LTE") => "<=",
            Some("GT") => ">",
            Some("GTE") => ">=",
            // EQ, and anything unrecognized, compares for equality.
            _ => "==",
        };
        let order = Order::Relational;
        let a = self
            .value_to_code(block, "A", order)?
            .unwrap_or_else(|| "0".to_string());
        let b = self
            .value_to_code(block, "B", order)?
            .unwrap_or_else(|| "0".to_string());
        Ok(Code::Expr(format!("{a} {operator} {b}"), order))
    }

    fn render_operation(&mut self, block: &Block) -> Result<Code> {
        let (operator, order) = if block.field_text("OP") == Some("AND") {
            ("and", Order::LogicalAnd)
        } else {
            ("or", Order::LogicalOr)
        };
        let a = self.value_to_code(block, "A", order)?;
        let b = self.value_to_code(block, "B", order)?;
        let (a, b) = match (a, b) {
            // No operands at all: the False pair, for either operator.
            (None, None) => ("False".to_string(), "False".to_string()),
            (a, b) => {
                // A single missing operand becomes the identity element, so
                // the expression keeps the present operand's meaning.
                let identity = if operator == "and" { "True" } else { "False" };
                (
                    a.unwrap_or_else(|| identity.to_string()),
                    b.unwrap_or_else(|| identity.to_string()),
                )
            }
        };
        Ok(Code::Expr(format!("{a} {operator} {b}"), order))
    }

    fn render_negate(&mut self, block: &Block) -> Result<Code> {
        let operand = self
            .value_to_code(block, "BOOL", Order::LogicalNot)?
            .unwrap_or_else(|| "True".to_string());
        Ok(Code::Expr(format!("not {operand}"), Order::LogicalNot))
    }

    fn render_ternary(&mut self, block: &Block) -> Result<Code> {
        let order = Order::Conditional;
        let condition = self
            .value_to_code(block, "IF", order)?
            .unwrap_or_else(|| "False".to_string());
        let then = self
            .value_to_code(block, "THEN", order)?
            .unwrap_or_else(|| "None".to_string());
        let otherwise = self
            .value_to_code(block, "ELSE", order)?
            .unwrap_or_else(|| "None".to_string());
        Ok(Code::Expr(
            format!("{then} if {condition} else {otherwise}"),
            order,
        ))
    }

    fn render_variable_get(&mut self, block: &Block) -> Code {
        let id = block
            .field("VAR")
            .and_then(FieldValue::variable_id)
            .unwrap_or_default();
        let name = self.name_table.get_name(id, NameKind::Variable);
        Code::Expr(name, Order::Atomic)
    }

    fn render_variable_set(&mut self, block: &Block) -> Result<Code> {
        let value = self
            .value_to_code(block, "VALUE", Order::Atomic)?
            .unwrap_or_else(|| "None".to_string());
        let id = block
            .field("VAR")
            .and_then(FieldValue::variable_id)
            .unwrap_or_default();
        let name = self.name_table.get_name(id, NameKind::Variable);
        Ok(Code::Stmt(format!("{name} = {value}\n")))
    }

    fn render_print(&mut self, block: &Block) -> Result<Code> {
        let argument = self
            .value_to_code(block, "TEXT", Order::Atomic)?
            .unwrap_or_else(|| "None".to_string());
        Ok(Code::Stmt(format!("print({argument})\n")))
    }
}
