//! Feature-tag permissions for brain user sessions.
//!
//! A subject (user or guest) carries a list of *disabled* feature tags.
//! Everything not listed is enabled; guests get nothing.
//!
//! # Architecture
//!
//! ```text
//! disabled tags ──> FeatureTags (registry) <── queried by ──┐
//!                                                           │
//! catalog ──> naming::to_accessor_name ──> Accessor { name, tag }
//!                                          (FeatureSurface)
//! ```
//!
//! The default catalog also gets typed accessors at build time through
//! [`CatalogAccessors`].
//!
//! # Example
//!
//! ```
//! use brain_features::{CatalogAccessors, SurfaceOptions, create_registry};
//!
//! let mut surface = create_registry(SurfaceOptions {
//!     disabled_tags: vec!["disable_gen_UI".into(), "disable_android_asr".into()],
//!     ..Default::default()
//! });
//!
//! assert_eq!(surface.call("hasGenUI", false), Some(false));
//! assert!(surface.hasAmazonSearchGraphql(false));
//!
//! // Accessors re-read the registry on every call.
//! surface.set_tags(Vec::<String>::new());
//! assert_eq!(surface.call("hasGenUI", false), Some(true));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod naming;
pub mod registry;
pub mod surface;

pub use catalog::{CatalogAccessors, DEFAULT_CATALOG, DEFAULT_CATALOG_VERSION};
pub use config::FeaturesConfig;
pub use error::ConfigError;
pub use naming::{to_accessor_name, to_pascal};
pub use registry::FeatureTags;
pub use surface::{Accessor, AccessorNaming, FeatureSurface, SurfaceOptions, create_registry};
