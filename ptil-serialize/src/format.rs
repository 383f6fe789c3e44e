//! The three selectable serialization formats (§4.7).

/// Dispatch tag for the serializer. The three formats share one capability
/// (render a `Csc` to a string) and are selected by this tag rather than an
/// open plugin registry (§9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Verbose,
    Compact,
    Ultra,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "verbose" => Some(Format::Verbose),
            "compact" => Some(Format::Compact),
            "ultra" => Some(Format::Ultra),
            _ => None,
        }
    }
}
