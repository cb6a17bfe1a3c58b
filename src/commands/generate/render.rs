//! Per-cell rendering: one guarded member plus its parameterized test.
use super::axes::{AttributeKind, BaseType, CallShape, ValueKind};
use super::catalog::constant_name;
use super::guards::{activation_line, expected_diagnostic, render_log_expectation};
use super::signature::{callable_name, default_fallback, qualified_signature, test_name};

mod document;
mod fixture;
mod host;
mod summary;

pub use document::assemble_document;
pub use fixture::render_fixture;
pub use host::render_host;
pub use summary::{render_summary_lines, GenerationSummary};

/// Guard states every cell is tested under, in `[TestCase]` order.
pub const GUARD_STATES: [bool; 2] = [true, false];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedValue {
    /// Fully qualified reference to the host constant.
    Constant(String),
    Default,
}

/// What one test case asserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseExpectation {
    pub guard_active: bool,
    pub expected: ExpectedValue,
    /// Warning the case registers with the log capture, if any.
    pub diagnostic: Option<String>,
}

/// Output of one point in the cross-product. Folded into a host and a fixture.
#[derive(Debug, Clone)]
pub struct GeneratedCell {
    pub attribute: AttributeKind,
    pub kind: ValueKind,
    pub shape: CallShape,
    pub callable: String,
    pub signature: String,
    pub member: Vec<String>,
    pub test: Vec<String>,
    pub cases: Vec<CaseExpectation>,
}

pub fn generate_cell(
    namespace: &str,
    attribute: &AttributeKind,
    base: &BaseType,
    kind: ValueKind,
    shape: CallShape,
) -> GeneratedCell {
    let host = base.host_type_name();
    let callable = callable_name(attribute, kind, shape);
    let signature = qualified_signature(namespace, &host, &callable, kind, shape);
    let cases = GUARD_STATES
        .iter()
        .map(|&guard_active| CaseExpectation {
            guard_active,
            expected: if guard_active {
                ExpectedValue::Constant(format!("{}.{}", host, constant_name(kind)))
            } else {
                ExpectedValue::Default
            },
            diagnostic: expected_diagnostic(attribute, guard_active, &signature),
        })
        .collect::<Vec<_>>();

    let member = render_member(attribute, kind, shape, &callable);
    let test = render_test(attribute, &host, kind, shape, &callable, &cases);

    GeneratedCell {
        attribute: attribute.clone(),
        kind,
        shape,
        callable,
        signature,
        member,
        test,
        cases,
    }
}

fn render_member(
    attribute: &AttributeKind,
    kind: ValueKind,
    shape: CallShape,
    callable: &str,
) -> Vec<String> {
    let ty = kind.source_name();
    let mut lines = Vec::new();
    lines.push(format!("[{}]", attribute.label));
    match shape {
        CallShape::Return => {
            lines.push(format!("public {} {}()", ty, callable));
            lines.push("{".to_string());
            lines.push(format!("    return {};", constant_name(kind)));
        }
        CallShape::Out => {
            lines.push(format!("public void {}(out {} value)", callable, ty));
            lines.push("{".to_string());
            lines.push(format!("    value = {};", constant_name(kind)));
        }
    }
    lines.push("}".to_string());
    lines
}

fn render_test(
    attribute: &AttributeKind,
    host: &str,
    kind: ValueKind,
    shape: CallShape,
    callable: &str,
    cases: &[CaseExpectation],
) -> Vec<String> {
    let ty = kind.source_name();
    let mut lines = Vec::new();
    lines.push("[Test]".to_string());
    for case in cases {
        lines.push(format!("[TestCase({})]", case.guard_active));
    }
    lines.push(format!(
        "public void {}(bool active)",
        test_name(attribute, kind, shape)
    ));
    lines.push("{".to_string());
    lines.push(format!("    {}", activation_line(attribute.family)));
    lines.push(String::new());
    lines.push(format!(
        "    {} expected = active ? {}.{} : {};",
        ty,
        host,
        constant_name(kind),
        default_fallback(kind)
    ));
    if let Some(message) = cases
        .iter()
        .filter(|c| !c.guard_active)
        .find_map(|c| c.diagnostic.as_deref())
    {
        for l in render_log_expectation(message) {
            lines.push(format!("    {}", l));
        }
    }
    match shape {
        CallShape::Return => lines.push(format!("    {} actual = behaviour.{}();", ty, callable)),
        CallShape::Out => lines.push(format!("    behaviour.{}(out {} actual);", callable, ty)),
    }
    lines.push(String::new());
    lines.push("    Assert.AreEqual(expected, actual);".to_string());
    lines.push("}".to_string());
    lines
}

/// Prefix every non-empty line with `levels` four-space indents.
pub(super) fn indent(lines: &[String], levels: usize) -> Vec<String> {
    let pad = "    ".repeat(levels);
    lines
        .iter()
        .map(|l| {
            if l.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, l)
            }
        })
        .collect()
}

/// Join blocks with one blank line between them.
pub(super) fn join_blocks(blocks: &[Vec<String>]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        out.extend(block.iter().cloned());
    }
    out
}
