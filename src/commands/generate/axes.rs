//! The closed axes the generator enumerates.
use super::error::GenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ambient condition a guard keys off. Every attribute belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Client,
    Server,
}

impl Family {
    /// Teardown resets families in this order.
    pub const ALL: [Family; 2] = [Family::Client, Family::Server];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Client => f.write_str("client"),
            Family::Server => f.write_str("server"),
        }
    }
}

/// A guard attribute flavor, e.g. `[Server]` or `[ClientCallback]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeKind {
    pub label: String,
    pub family: Family,
    /// Silent guards skip the body and return the default without a warning.
    pub silent: bool,
}

impl AttributeKind {
    pub fn new(label: &str, family: Family, silent: bool) -> Self {
        Self {
            label: label.to_string(),
            family,
            silent,
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Client", Family::Client, false),
            Self::new("Server", Family::Server, false),
            Self::new("ClientCallback", Family::Client, true),
            Self::new("ServerCallback", Family::Server, true),
        ]
    }
}

/// Host base type the generated members are attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseType {
    pub name: String,
}

impl BaseType {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn host_type_name(&self) -> String {
        format!("AttributeBehaviour_{}", self.name)
    }

    pub fn fixture_type_name(&self) -> String {
        format!("AttributeTest_{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    Float,
    Double,
    Bool,
    Char,
    Byte,
    Int,
    Long,
    Ulong,
    Vector3,
    ClassWithNoConstructor,
    ClassWithConstructor,
}

impl ValueKind {
    pub const ALL: [ValueKind; 11] = [
        ValueKind::Float,
        ValueKind::Double,
        ValueKind::Bool,
        ValueKind::Char,
        ValueKind::Byte,
        ValueKind::Int,
        ValueKind::Long,
        ValueKind::Ulong,
        ValueKind::Vector3,
        ValueKind::ClassWithNoConstructor,
        ValueKind::ClassWithConstructor,
    ];

    /// Spelling used in generated source and in generated identifiers.
    pub fn source_name(self) -> &'static str {
        match self {
            ValueKind::Float => "float",
            ValueKind::Double => "double",
            ValueKind::Bool => "bool",
            ValueKind::Char => "char",
            ValueKind::Byte => "byte",
            ValueKind::Int => "int",
            ValueKind::Long => "long",
            ValueKind::Ulong => "ulong",
            ValueKind::Vector3 => "Vector3",
            ValueKind::ClassWithNoConstructor => "ClassWithNoConstructor",
            ValueKind::ClassWithConstructor => "ClassWithConstructor",
        }
    }

    /// Reference kinds whose definitions are emitted into the generated namespace.
    pub fn is_generated_type(self) -> bool {
        matches!(
            self,
            ValueKind::ClassWithNoConstructor | ValueKind::ClassWithConstructor
        )
    }
}

impl FromStr for ValueKind {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueKind::ALL
            .iter()
            .copied()
            .find(|k| k.source_name() == s.trim())
            .ok_or_else(|| GenError::UnknownValueKind(s.to_string()))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    /// `T Name()`
    Return,
    /// `void Name(out T value)`
    Out,
}

impl CallShape {
    /// Within a cell the direct-return variant always comes first.
    pub const ALL: [CallShape; 2] = [CallShape::Return, CallShape::Out];
}

/// The four axes of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisSet {
    pub attributes: Vec<AttributeKind>,
    pub base_types: Vec<BaseType>,
    pub value_kinds: Vec<ValueKind>,
}

impl Default for AxisSet {
    fn default() -> Self {
        Self {
            attributes: AttributeKind::defaults(),
            base_types: vec![BaseType::new("NetworkBehaviour")],
            value_kinds: ValueKind::ALL.to_vec(),
        }
    }
}

impl AxisSet {
    /// Number of cells, i.e. generated members, across every base type.
    pub fn cell_count(&self) -> usize {
        self.attributes.len() * self.base_types.len() * self.value_kinds.len() * CallShape::ALL.len()
    }

    pub fn validate(&self) -> Result<(), GenError> {
        if self.attributes.is_empty() {
            return Err(GenError::EmptyAxis("attributes"));
        }
        if self.base_types.is_empty() {
            return Err(GenError::EmptyAxis("base_types"));
        }
        if self.value_kinds.is_empty() {
            return Err(GenError::EmptyAxis("value_kinds"));
        }

        let mut seen = std::collections::HashSet::new();
        for attr in &self.attributes {
            if !is_identifier(&attr.label) {
                return Err(GenError::InvalidConfig(format!(
                    "attribute label '{}' is not an identifier",
                    attr.label
                )));
            }
            if !seen.insert(attr.label.as_str()) {
                return Err(GenError::DuplicateAxisValue {
                    axis: "attribute",
                    value: attr.label.clone(),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for base in &self.base_types {
            if !is_identifier(&base.name) {
                return Err(GenError::InvalidConfig(format!(
                    "base type '{}' is not an identifier",
                    base.name
                )));
            }
            if !seen.insert(base.name.as_str()) {
                return Err(GenError::DuplicateAxisValue {
                    axis: "base type",
                    value: base.name.clone(),
                });
            }
        }

        let mut seen = std::collections::HashSet::new();
        for kind in &self.value_kinds {
            if !seen.insert(*kind) {
                return Err(GenError::DuplicateAxisValue {
                    axis: "value kind",
                    value: kind.to_string(),
                });
            }
        }
        Ok(())
    }
}

pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// `A.B.C` where every segment is an identifier.
pub(crate) fn is_dotted_identifier(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}
