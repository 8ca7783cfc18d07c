//! Fresh-name minting for variables and base types.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::expression::Expression;

/// Mints fresh variable and base-type names.
///
/// A supply owns two independent counters. Variables are named `v_1`,
/// `v_2`, ... and base types `T1`, `T2`, ...; no name repeats until the
/// supply is [reset](NameSupply::reset). Minting takes `&self` and is
/// atomic, so one supply may be shared between threads.
///
/// Each independent derivation should own its own supply.
#[derive(Debug, Default)]
pub struct NameSupply {
    variables: AtomicU64,
    base_types: AtomicU64,
}

impl NameSupply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh term variable.
    pub fn make_variable(&self) -> Expression {
        let n = self.variables.fetch_add(1, Ordering::Relaxed) + 1;
        Expression::variable(format!("v_{n}"))
    }

    /// Mint a fresh abstract base type.
    pub fn make_base_type(&self) -> Expression {
        let n = self.base_types.fetch_add(1, Ordering::Relaxed) + 1;
        Expression::base_type(format!("T{n}"))
    }

    /// Restore both counters to their initial state.
    ///
    /// Requires exclusive access, so a reset can never interleave with minting.
    pub fn reset(&mut self) {
        *self.variables.get_mut() = 0;
        *self.base_types.get_mut() = 0;
    }
}
