//! Structured context attached to a single log call.

use std::fmt::{self, Display, Write};

/// Stored in place of a value whose `Display` implementation reports an error.
pub const UNPRINTABLE: &str = "<unprintable>";

/// Ordered `key=value` pairs. Keys are kept in insertion order and never deduplicated.
///
/// Values are rendered through [`Display`] when they are added, so a field can
/// never fail to format later on the write path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pairs: Vec<(String, String)>,
}

impl Fields {
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends one pair and returns `self` for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.push(key, value);
        self
    }

    /// A value whose `Display` fails is stored as [`UNPRINTABLE`].
    pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
        let mut rendered = String::new();
        if write!(rendered, "{value}").is_err() {
            rendered = UNPRINTABLE.to_string();
        }
        self.pairs.push((key.into(), rendered));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Space-separated `key=value` list, empty when there are no fields.
impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (k, v) in iter {
            fields.push(k, v);
        }
        fields
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Fields {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Builds [`Fields`] from `key = value` pairs in call order.
///
/// ```
/// let fields = sluglog::fields! { step = 1, phase = "x" };
/// assert_eq!(fields.to_string(), "step=1 phase=x");
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        $crate::fmt::Fields::new()
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        $crate::fmt::Fields::new()$(.with(stringify!($key), &$value))+
    };
}
