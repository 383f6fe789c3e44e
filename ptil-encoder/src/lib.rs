//! Encoder Facade (C8) and CSC Assembler (C6): the top-level `Encoder` type
//! that orchestrates C1 → (C2, C3, C4, C5) → C6 → C7 end to end, plus the
//! diagnostics channel and training-data formatting knobs that sit around it
//! (§4.6, §4.8, §6, §7).

pub mod assembler;
pub mod config;
pub mod diagnostics;
pub mod encoder;
pub mod segment;

pub use config::{FormatType, TrainingConfig};
pub use diagnostics::{Diagnostic, DegradationReason};
pub use encoder::Encoder;
