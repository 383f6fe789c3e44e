//! META: the optional speech-act / epistemic tag (§3).

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meta {
    Assertive,
    Question,
    Command,
    Uncertain,
    Evidential,
    /// Reserved: the default implementation never emits this (§4.5).
    Emotive,
    /// Reserved: the default implementation never emits this (§4.5).
    Ironic,
}

impl Meta {
    pub fn symbol(self) -> &'static str {
        match self {
            Meta::Assertive => "ASSERTIVE",
            Meta::Question => "QUESTION",
            Meta::Command => "COMMAND",
            Meta::Uncertain => "UNCERTAIN",
            Meta::Evidential => "EVIDENTIAL",
            Meta::Emotive => "EMOTIVE",
            Meta::Ironic => "IRONIC",
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
