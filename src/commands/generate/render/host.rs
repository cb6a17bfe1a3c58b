use super::{indent, join_blocks, GeneratedCell};
use crate::commands::generate::axes::{BaseType, ValueKind};
use crate::commands::generate::catalog::{constant_name, literal_for};

/// Host type deriving from `base`: one shared constant per value kind, then
/// every cell's guarded member in enumeration order.
pub fn render_host(base: &BaseType, kinds: &[ValueKind], cells: &[GeneratedCell]) -> Vec<String> {
    let mut blocks = Vec::new();
    blocks.push(
        kinds
            .iter()
            .map(|&kind| {
                format!(
                    "public static readonly {} {} = {};",
                    kind.source_name(),
                    constant_name(kind),
                    literal_for(kind)
                )
            })
            .collect::<Vec<_>>(),
    );
    for cell in cells {
        blocks.push(cell.member.clone());
    }

    let mut lines = Vec::new();
    lines.push(format!(
        "public class {} : {}",
        base.host_type_name(),
        base.name
    ));
    lines.push("{".to_string());
    lines.extend(indent(&join_blocks(&blocks), 1));
    lines.push("}".to_string());
    lines
}
