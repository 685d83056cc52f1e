//! Identifier allocation for MEI elements
//!
//! Every emitted element carries an xml:id. The allocator is passed into
//! the assembly code explicitly so tests can substitute a deterministic
//! sequence and assert exact identifier values.

use uuid::Uuid;

/// Source of xml:id values
///
/// Implementations must never repeat a value within one document
/// conversion; the random allocator is also collision-free when measures
/// are converted concurrently.
pub trait IdAllocator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}

/// Default allocator backed by UUID v4
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdAllocator;

impl IdAllocator for RandomIdAllocator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic allocator for tests: `prefix1`, `prefix2`, ...
#[derive(Clone, Debug)]
pub struct SequentialIdAllocator {
    prefix: String,
    next: u64,
}

impl SequentialIdAllocator {
    /// Create an allocator counting up from `prefix1`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdAllocator for SequentialIdAllocator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
