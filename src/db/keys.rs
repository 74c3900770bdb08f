//! Keys and indices into the stores.

use slotmap::new_key_type;

new_key_type! {
    /// The key to a clause in the clause store.
    ///
    /// Keys stay valid for the lifetime of the store, as clauses move between
    /// the active and unused pools without being evicted.
    pub struct ClauseKey;
}

/// The index of a variable in the variable store.
///
/// Indices are dense and assigned in creation order, independent of the
/// external ids variables are known by outside the store.
pub type VariableIndex = u32;

/// The external id of a clause, assigned by whatever built the clause.
pub type ClauseId = u32;

/// The index of a level in the resolution stack.
pub type LevelIndex = usize;
