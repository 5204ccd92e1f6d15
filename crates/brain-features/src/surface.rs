//! Registry plus named accessors synthesized from a catalog.
//!
//! Each catalog tag gets an accessor named by [`AccessorNaming`] (by default
//! `disable_gen_UI` becomes `hasGenUI`). Accessors are bound to their literal
//! tag and query the registry when called, so `set_tags` after construction
//! is always observed.

use crate::catalog::DEFAULT_CATALOG;
use crate::naming::{DEFAULT_VERB, DISABLE_PREFIX, to_accessor_name};
use crate::registry::FeatureTags;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

/// How accessor names are derived from tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorNaming {
    /// Prepended to the PascalCase tag (e.g. "has").
    pub verb: String,
    /// Removed from the front of a tag before conversion, when present.
    pub strip_prefix: Option<String>,
}

impl Default for AccessorNaming {
    fn default() -> Self {
        Self {
            verb: DEFAULT_VERB.to_string(),
            strip_prefix: Some(DISABLE_PREFIX.to_string()),
        }
    }
}

impl AccessorNaming {
    /// Accessor name for `tag`.
    pub fn name_for(&self, tag: &str) -> String {
        to_accessor_name(tag, &self.verb, self.strip_prefix.as_deref())
    }
}

/// Options for [`create_registry`].
#[derive(Debug, Clone, Default)]
pub struct SurfaceOptions {
    /// The subject's disabled tags.
    pub disabled_tags: Vec<String>,
    /// Tags to synthesize accessors for. `None` or empty selects
    /// [`DEFAULT_CATALOG`].
    pub catalog: Option<Vec<String>>,
    pub naming: AccessorNaming,
}

/// A synthesized accessor: a name permanently bound to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub name: String,
    pub tag: String,
}

impl Accessor {
    /// Evaluate against `tags`.
    pub fn call(&self, tags: &FeatureTags, is_guest: bool) -> bool {
        tags.is_enabled(&self.tag, is_guest)
    }
}

/// A [`FeatureTags`] registry together with its catalog accessors.
///
/// Derefs to the registry, so every registry operation is available
/// directly on the surface.
#[derive(Debug, Clone)]
pub struct FeatureSurface {
    tags: FeatureTags,
    accessors: Vec<Accessor>,
    by_name: HashMap<String, usize>,
}

/// Build a registry and synthesize one accessor per catalog tag.
///
/// Catalog order decides which tag an accessor name ends up bound to when
/// two tags derive the same name: the later one wins.
pub fn create_registry(options: SurfaceOptions) -> FeatureSurface {
    let SurfaceOptions {
        disabled_tags,
        catalog,
        naming,
    } = options;

    let mut surface = FeatureSurface {
        tags: FeatureTags::new(disabled_tags),
        accessors: Vec::new(),
        by_name: HashMap::new(),
    };

    match catalog.filter(|c| !c.is_empty()) {
        Some(catalog) => {
            for tag in catalog {
                surface.bind(naming.name_for(&tag), tag);
            }
        }
        None => {
            for tag in DEFAULT_CATALOG {
                surface.bind(naming.name_for(tag), (*tag).to_string());
            }
        }
    }

    tracing::debug!(
        accessors = surface.accessors.len(),
        disabled = surface.tags.get_tags().len(),
        "created feature surface"
    );
    surface
}

impl FeatureSurface {
    fn bind(&mut self, name: String, tag: String) {
        if let Some(&i) = self.by_name.get(&name) {
            let slot = &mut self.accessors[i];
            tracing::debug!(
                accessor = %name,
                previous = %slot.tag,
                tag = %tag,
                "accessor rebound by later catalog entry"
            );
            slot.tag = tag;
            return;
        }

        tracing::trace!(accessor = %name, tag = %tag, "synthesized accessor");
        self.by_name.insert(name.clone(), self.accessors.len());
        self.accessors.push(Accessor { name, tag });
    }

    /// The underlying registry.
    pub fn tags(&self) -> &FeatureTags {
        &self.tags
    }

    /// Call the accessor named `name`.
    ///
    /// Returns `None` if no such accessor was synthesized.
    pub fn call(&self, name: &str, is_guest: bool) -> Option<bool> {
        self.accessor(name).map(|a| a.call(&self.tags, is_guest))
    }

    pub fn accessor(&self, name: &str) -> Option<&Accessor> {
        self.by_name.get(name).map(|&i| &self.accessors[i])
    }

    pub fn has_accessor(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Accessors in the order their names were first synthesized.
    pub fn accessors(&self) -> impl Iterator<Item = &Accessor> {
        self.accessors.iter()
    }

    pub fn accessor_names(&self) -> impl Iterator<Item = &str> {
        self.accessors.iter().map(|a| a.name.as_str())
    }
}

impl Deref for FeatureSurface {
    type Target = FeatureTags;

    fn deref(&self) -> &FeatureTags {
        &self.tags
    }
}

impl DerefMut for FeatureSurface {
    fn deref_mut(&mut self) -> &mut FeatureTags {
        &mut self.tags
    }
}
