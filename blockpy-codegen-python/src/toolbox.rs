//! The editor palette for the Python block set.

use blockpy_codegen::Toolbox;
use blockpy_ir::BlockKind;

/// Block kinds exposed in the editor palette, in display order.
///
/// The mutator helper kinds (`lists_create_with_item`,
/// `lists_create_with_container`) are renderable but not user-selectable.
pub const PALETTE: &[BlockKind] = &[
    BlockKind::Object,
    BlockKind::Member,
    BlockKind::MathNumber,
    BlockKind::Text,
    BlockKind::LogicBoolean,
    BlockKind::LogicNull,
    BlockKind::ListsCreateWith,
    BlockKind::ControlsIf,
    BlockKind::ControlsIfElse,
    BlockKind::LogicCompare,
    BlockKind::LogicOperation,
    BlockKind::LogicNegate,
    BlockKind::LogicTernary,
    BlockKind::VariablesGet,
    BlockKind::VariablesSet,
    BlockKind::TextPrint,
];

/// Build the flyout toolbox configuration for the Python block set.
pub fn toolbox() -> Toolbox {
    Toolbox::flyout(PALETTE.iter().map(|kind| kind.as_str().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_kinds_are_all_renderable() {
        for kind in PALETTE {
            assert!(kind.is_supported(), "{kind} has no renderer");
        }
    }

    #[test]
    fn test_toolbox_lists_palette_in_order() {
        let toolbox = toolbox();
        let types: Vec<&str> = toolbox.block_types().collect();
        assert_eq!(types.len(), PALETTE.len());
        assert_eq!(types[0], "object");
        assert_eq!(types.last(), Some(&"text_print"));
    }
}
