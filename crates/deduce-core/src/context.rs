//! Contexts: ordered hypotheses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::declaration::Membership;

/// An ordered sequence of membership declarations.
///
/// Entries appear in the order their variables were introduced. Contexts are
/// values: [`add`](Context::add) and [`concat`](Context::concat) return new
/// contexts and leave the receiver untouched. Equality is positional and
/// structural.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    entries: Vec<Membership>,
}

impl Context {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A context with `membership` appended.
    pub fn add(&self, membership: Membership) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.extend_from_slice(&self.entries);
        entries.push(membership);
        Self { entries }
    }

    /// This context's entries followed by `other`'s. No deduplication.
    pub fn concat(&self, other: &Context) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + other.entries.len());
        entries.extend_from_slice(&self.entries);
        entries.extend_from_slice(&other.entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[Membership] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Membership> for Context {
    fn from_iter<I: IntoIterator<Item = Membership>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("·");
        }
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
