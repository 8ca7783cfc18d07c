//! The inference rules, one function each.
//!
//! Every rule has the same shape: it takes the name supply used to mint
//! fresh symbols and a slice of premises, and returns an [`Application`].
//! Arity is checked before anything else, so a rejected call never mints.
//!
//! [`Application`]: crate::Application

mod context;
mod terms;
mod types;

pub use context::{context_extension, empty_context};
pub use terms::{product_intro, reiteration, unit_intro};
pub use types::{
    empty_formation, function_formation, generic_type_formation, product_formation,
    sum_formation, unit_formation,
};
