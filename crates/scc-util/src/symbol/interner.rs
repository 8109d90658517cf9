//! String interner implementation using DashMap for concurrent access.
//!
//! Interned strings are allocated on the heap and leaked to obtain `'static`
//! references. The table lives for the whole program; interned strings are
//! never removed, so the leak is bounded by the number of unique identifiers
//! in the source.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::LazyLock;

use dashmap::DashMap;

use super::{Symbol, RESERVED_SYMBOLS_END};

/// Global string table instance
///
/// Initialized on first use via `LazyLock`. All keywords are pre-interned
/// during initialization so they have stable, predictable indices matching
/// the `KW_*` constants.
pub static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(|| {
    let table = StringTable::new();
    table.initialize_known_symbols();
    table
});

/// Thread-safe string table
///
/// Two maps are kept in step: `forward` resolves a string to its symbol
/// index during interning, `reverse` resolves a symbol back to its string.
/// The reverse map makes `Symbol::as_str` O(1); the generator calls it on
/// every emitted instruction that names a variable or function.
pub struct StringTable {
    /// string -> symbol index
    forward: DashMap<&'static str, u32, ahash::RandomState>,

    /// symbol index -> string
    reverse: DashMap<u32, &'static str, ahash::RandomState>,

    /// Counter for the next dynamic index; starts past the reserved range.
    next_index: AtomicU32,
}

impl StringTable {
    fn new() -> Self {
        Self {
            forward: DashMap::with_hasher(ahash::RandomState::new()),
            reverse: DashMap::with_hasher(ahash::RandomState::new()),
            next_index: AtomicU32::new(RESERVED_SYMBOLS_END),
        }
    }

    /// Pre-intern the keyword symbols at their fixed indices.
    ///
    /// The order must match the `KW_*` / `SYM_MAIN` constants in `mod.rs`.
    fn initialize_known_symbols(&self) {
        let known_symbols = ["int", "return", "if", "else", "while", "main"];
        debug_assert_eq!(known_symbols.len() as u32, RESERVED_SYMBOLS_END);

        for (index, text) in known_symbols.into_iter().enumerate() {
            self.forward.insert(text, index as u32);
            self.reverse.insert(index as u32, text);
        }
    }

    /// Intern a string, returning its symbol
    pub fn intern(&self, string: &str) -> Symbol {
        if let Some(index) = self.forward.get(string) {
            return Symbol { index: *index };
        }

        let leaked: &'static str = Box::leak(string.to_string().into_boxed_str());
        let index = *self
            .forward
            .entry(leaked)
            .or_insert_with(|| {
                let index = self.next_index.fetch_add(1, Ordering::Relaxed);
                self.reverse.insert(index, leaked);
                index
            })
            .value();

        Symbol { index }
    }

    /// Get the string for a symbol, if it was interned through this table
    pub fn get(&self, symbol: Symbol) -> Option<&'static str> {
        self.reverse.get(&symbol.index).map(|entry| *entry.value())
    }
}
