//! Callable names and the runtime signatures guard warnings reference.
use super::axes::{AttributeKind, CallShape, ValueKind};
use super::catalog::qualified_type_name_for;

/// Unique per (attribute, kind, shape) because every axis label is part of it.
pub fn callable_name(attribute: &AttributeKind, kind: ValueKind, shape: CallShape) -> String {
    match shape {
        CallShape::Return => format!("{}_{}_Function", attribute.label, kind.source_name()),
        CallShape::Out => format!("{}_{}_out_Function", attribute.label, kind.source_name()),
    }
}

pub fn test_name(attribute: &AttributeKind, kind: ValueKind, shape: CallShape) -> String {
    match shape {
        CallShape::Return => format!("{}_{}_returnsValue", attribute.label, kind.source_name()),
        CallShape::Out => format!("{}_{}_setsOutValue", attribute.label, kind.source_name()),
    }
}

/// Signature as the runtime prints it, e.g.
/// `System.Int32 NS.Host::Server_int_Function()` or
/// `System.Void NS.Host::Server_int_out_Function(System.Int32&)`.
pub fn qualified_signature(
    namespace: &str,
    host_type: &str,
    callable: &str,
    kind: ValueKind,
    shape: CallShape,
) -> String {
    let type_name = qualified_type_name_for(kind, namespace);
    match shape {
        CallShape::Return => format!("{} {}.{}::{}()", type_name, namespace, host_type, callable),
        CallShape::Out => format!(
            "System.Void {}.{}::{}({}&)",
            namespace, host_type, callable, type_name
        ),
    }
}

/// What a skipped guarded call leaves behind.
pub fn default_fallback(_kind: ValueKind) -> &'static str {
    "default"
}
