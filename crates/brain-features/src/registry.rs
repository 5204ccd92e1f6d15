//! Disabled-tag registry for a single subject.

use serde::{Deserialize, Serialize};

/// The set of feature tags disabled for one subject (user or guest).
///
/// Permissions are allow-by-default: a tag grants its capability unless it
/// appears in the disabled list. Guests are denied everything.
///
/// The list is kept exactly as given (order and duplicates preserved);
/// queries treat it as a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureTags {
    disabled_tags: Vec<String>,
}

impl FeatureTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            disabled_tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Current disabled tags, in the order they were set.
    pub fn get_tags(&self) -> &[String] {
        &self.disabled_tags
    }

    /// Replace the disabled list wholesale. An empty list enables everything.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_tags = tags.into_iter().map(Into::into).collect();
        tracing::debug!(
            count = self.disabled_tags.len(),
            "replaced disabled feature tags"
        );
    }

    /// Whether the capability behind `tag` is available.
    ///
    /// Guests always get `false`. Otherwise `false` iff `tag` is listed
    /// (exact, case-sensitive match).
    pub fn is_enabled(&self, tag: &str, is_guest: bool) -> bool {
        !is_guest && !self.is_explicitly_listed(tag)
    }

    /// Raw membership test, without guest handling.
    pub fn is_explicitly_listed(&self, tag: &str) -> bool {
        self.disabled_tags.iter().any(|t| t == tag)
    }

    /// Whether `tag` is absent from the list, for callers whose tags do not
    /// follow the `disable_` convention. Guests always get `false`.
    ///
    /// Same truth table as [`FeatureTags::is_enabled`].
    pub fn is_explicitly_absent(&self, tag: &str, is_guest: bool) -> bool {
        self.is_enabled(tag, is_guest)
    }
}

impl<S: Into<String>> FromIterator<S> for FeatureTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
