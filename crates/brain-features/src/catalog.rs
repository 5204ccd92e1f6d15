//! The built-in catalog of recognized feature tags.
//!
//! Generated at build time from `catalog/default.txt`. Besides the raw tag
//! list, the generator emits [`CatalogAccessors`], a trait with one typed
//! method per catalog tag (`hasGenUI`, `hasAndroidAsr`, ...) named the same
//! way the runtime surface names its accessors.
//!
//! The list is kept as written, duplicate entries included.

use crate::registry::FeatureTags;
use crate::surface::FeatureSurface;

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

impl CatalogAccessors for FeatureTags {
    fn feature_tags(&self) -> &FeatureTags {
        self
    }
}

impl CatalogAccessors for FeatureSurface {
    fn feature_tags(&self) -> &FeatureTags {
        self.tags()
    }
}
