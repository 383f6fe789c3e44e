//! Serializer (C7): renders a `Csc` to verbose/compact/ultra-compact
//! symbolic strings and checks the result for tokenizer compatibility
//! (§4.7).

pub mod format;
pub mod golden;
pub mod serializer;
pub mod tokenizer_stub;

pub use format::Format;
pub use serializer::serialize;
pub use tokenizer_stub::{
    check_compatibility, uses_permitted_characters, BpeLikeStub, TokenizerStub,
    UnigramLikeStub, WordPieceLikeStub,
};
