use serde::Serialize;
use std::collections::BTreeMap;

/// Inferred logical type of a textual Tcl value.
///
/// List elements and dictionary pairs are decomposed once at
/// classification time; the original text stays on the owning record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "decomposed")]
pub enum Kind {
    Empty,
    Integer(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
    Dict(BTreeMap<String, String>),
}

impl Kind {
    /// Display name matching the original debugger's type labels.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Empty => "empty",
            Kind::Integer(_) => "integer",
            Kind::Float(_) => "float",
            Kind::Str(_) => "string",
            Kind::List(_) => "list",
            Kind::Dict(_) => "dictionary",
        }
    }

    /// Fixed-width tag used in listings.
    pub fn icon(&self) -> &'static str {
        match self {
            Kind::Empty => "[EMP]",
            Kind::Integer(_) => "[INT]",
            Kind::Float(_) => "[FLT]",
            Kind::Str(_) => "[STR]",
            Kind::List(_) => "[LST]",
            Kind::Dict(_) => "[DCT]",
        }
    }

    /// Type name plus element/pair count for composites.
    pub fn detailed(&self) -> String {
        match self {
            Kind::List(elements) if !elements.is_empty() => {
                format!("list ({} elements)", elements.len())
            }
            Kind::Dict(pairs) if !pairs.is_empty() => {
                format!("dictionary ({} pairs)", pairs.len())
            }
            other => other.name().to_string(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Kind::Integer(_) | Kind::Float(_))
    }
}
