//! # Event name sets.
//!
//! Every public entry point accepts either one name or an ordered sequence of
//! names. [`EventNames`] is the normalized form: an ordered, cheaply cloneable
//! list. Nothing is validated. Empty lists and duplicates pass through
//! untouched and simply produce zero or redundant subscriptions/dispatches.
//!
//! ```rust
//! use custom_events::EventNames;
//!
//! let one = EventNames::from("refresh");
//! let seq = EventNames::from(["refresh"]);
//! assert_eq!(one, seq);
//!
//! let many = EventNames::from(vec!["a".to_string(), "b".to_string()]);
//! assert_eq!(many.iter().collect::<Vec<_>>(), ["a", "b"]);
//! ```

use std::fmt;
use std::sync::Arc;

/// Ordered sequence of event names.
///
/// Equality compares contents, not identity.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct EventNames(Arc<[Arc<str>]>);

impl EventNames {
    /// Iterates names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|n| &**n)
    }

    /// Number of names (duplicates included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no names.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn shared(&self) -> impl Iterator<Item = &Arc<str>> + '_ {
        self.0.iter()
    }
}

impl Default for EventNames {
    fn default() -> Self {
        Self(Arc::from(Vec::new()))
    }
}

impl fmt::Debug for EventNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<Arc<str>> for EventNames {
    fn from_iter<I: IntoIterator<Item = Arc<str>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&str> for EventNames {
    fn from(name: &str) -> Self {
        std::iter::once(Arc::<str>::from(name)).collect()
    }
}

impl From<String> for EventNames {
    fn from(name: String) -> Self {
        std::iter::once(Arc::<str>::from(name)).collect()
    }
}

impl From<&String> for EventNames {
    fn from(name: &String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Arc<str>> for EventNames {
    fn from(name: Arc<str>) -> Self {
        std::iter::once(name).collect()
    }
}

impl From<&[&str]> for EventNames {
    fn from(names: &[&str]) -> Self {
        names.iter().map(|n| Arc::<str>::from(*n)).collect()
    }
}

impl<const N: usize> From<[&str; N]> for EventNames {
    fn from(names: [&str; N]) -> Self {
        names.iter().map(|n| Arc::<str>::from(*n)).collect()
    }
}

impl From<Vec<&str>> for EventNames {
    fn from(names: Vec<&str>) -> Self {
        names.into_iter().map(Arc::<str>::from).collect()
    }
}

impl From<Vec<String>> for EventNames {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().map(Arc::<str>::from).collect()
    }
}

impl From<&[String]> for EventNames {
    fn from(names: &[String]) -> Self {
        names.iter().map(|n| Arc::<str>::from(n.as_str())).collect()
    }
}

impl From<&EventNames> for EventNames {
    fn from(names: &EventNames) -> Self {
        names.clone()
    }
}
