//! LilyPond to MEI converter
//!
//! Works on a whitelisted subset of LilyPond note entry: space-separated
//! note tokens with absolute octave marks, a duration on every note, and
//! slurs confined to a single measure. Measures are split on `|`,
//! including a trailing bar-check. For example, the markup
//!
//! ```text
//! a4( b'16 c,,2)
//! ```
//!
//! produces a layer along the lines of
//!
//! ```text
//! <layer n="1" xml:id="...">
//!   <note pname="A" dur="4" oct="3" slur="i1" xml:id="..."/>
//!   <note pname="B" dur="16" oct="4" xml:id="..."/>
//!   <note pname="C" dur="2" oct="1" slur="t1" xml:id="..."/>
//!   <slur startid="#..." endid="#..." plist="#... #... #..." xml:id="..."/>
//! </layer>
//! ```

pub mod converters;
pub mod diagnostics;
pub mod mei;
pub mod models;
pub mod parse;
pub mod renderers;

// Re-export commonly used types
pub use converters::score::convert_score;
pub use mei::ids::{IdAllocator, RandomIdAllocator, SequentialIdAllocator};
pub use mei::types::MeiDocument;
pub use models::elements::Dialect;
pub use parse::errors::ConversionError;
pub use renderers::mei::emit_mei;
