use super::{indent, join_blocks};
use crate::commands::generate::axes::ValueKind;

pub const GENERATED_HEADER: &str = "// Generated by guardgen. Do not edit by hand.";

/// Namespace declaring `NetworkServer`, `NetworkClient`, `ConnectState` and
/// the guard attributes. Always imported since generated code names them unqualified.
pub const RUNTIME_NAMESPACE: &str = "Mirror";

/// Whole source unit: header, imports, then every (host, fixture) pair and
/// the definitions of generated reference kinds in `kinds`, inside `namespace`.
pub fn assemble_document(
    namespace: &str,
    imports: &[String],
    kinds: &[ValueKind],
    suites: &[(Vec<String>, Vec<String>)],
) -> String {
    let mut out: Vec<String> = Vec::new();
    out.push(GENERATED_HEADER.to_string());
    if !imports.iter().any(|i| i == RUNTIME_NAMESPACE) {
        out.push(format!("using {};", RUNTIME_NAMESPACE));
    }
    for import in imports {
        out.push(format!("using {};", import));
    }
    out.push(String::new());
    out.push(format!("namespace {}", namespace));
    out.push("{".to_string());

    let mut blocks = Vec::new();
    for (host, fixture) in suites {
        blocks.push(host.clone());
        blocks.push(fixture.clone());
    }
    blocks.extend(
        kinds
            .iter()
            .filter(|k| k.is_generated_type())
            .filter_map(|&k| auxiliary_type(k)),
    );
    out.extend(indent(&join_blocks(&blocks), 1));

    out.push("}".to_string());
    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn auxiliary_type(kind: ValueKind) -> Option<Vec<String>> {
    let lines: &[&str] = match kind {
        ValueKind::ClassWithNoConstructor => &[
            "public class ClassWithNoConstructor",
            "{",
            "    public int a;",
            "}",
        ],
        ValueKind::ClassWithConstructor => &[
            "public class ClassWithConstructor",
            "{",
            "    public int a;",
            "",
            "    public ClassWithConstructor(int a)",
            "    {",
            "        this.a = a;",
            "    }",
            "}",
        ],
        _ => return None,
    };
    Some(lines.iter().map(|s| s.to_string()).collect())
}
