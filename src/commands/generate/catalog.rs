use super::axes::ValueKind;

/// Expected literal and runtime type name for one value kind.
///
/// `qualified_type_name` must track what the guard runtime reports for the
/// type in its warning text; the generator cannot check this on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub kind: ValueKind,
    pub literal: &'static str,
    pub qualified_type_name: String,
}

/// Side-effect free expression for the value a guarded member returns.
pub fn literal_for(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Float => "2020f",
        ValueKind::Double => "2.54",
        ValueKind::Bool => "true",
        ValueKind::Char => "'a'",
        ValueKind::Byte => "224",
        ValueKind::Int => "103",
        ValueKind::Long => "-123456789L",
        ValueKind::Ulong => "123456789UL",
        ValueKind::Vector3 => "new Vector3(29, 1, 10)",
        ValueKind::ClassWithNoConstructor => "new ClassWithNoConstructor { a = 10 }",
        ValueKind::ClassWithConstructor => "new ClassWithConstructor(29)",
    }
}

/// Runtime full name of the type. Kinds defined by the generated document
/// live in `namespace`.
pub fn qualified_type_name_for(kind: ValueKind, namespace: &str) -> String {
    let builtin = match kind {
        ValueKind::Float => "System.Single",
        ValueKind::Double => "System.Double",
        ValueKind::Bool => "System.Boolean",
        ValueKind::Char => "System.Char",
        ValueKind::Byte => "System.Byte",
        ValueKind::Int => "System.Int32",
        ValueKind::Long => "System.Int64",
        ValueKind::Ulong => "System.UInt64",
        ValueKind::Vector3 => "UnityEngine.Vector3",
        ValueKind::ClassWithNoConstructor | ValueKind::ClassWithConstructor => {
            return format!("{}.{}", namespace, kind.source_name());
        }
    };
    builtin.to_string()
}

/// Name of the host-level constant backing both member bodies and test expectations.
pub fn constant_name(kind: ValueKind) -> String {
    format!("Expected_{}", kind.source_name())
}

pub fn value_spec(kind: ValueKind, namespace: &str) -> ValueSpec {
    ValueSpec {
        kind,
        literal: literal_for(kind),
        qualified_type_name: qualified_type_name_for(kind, namespace),
    }
}
