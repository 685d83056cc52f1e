//! MEI rendering

pub mod builder;
pub mod emitter;

pub use emitter::emit_mei;
