//! Domain model for the folio portfolio browser: project catalog, tag
//! classification, image carousel and the detail modal lifecycle.

/// Catalog of project records.
pub mod catalog;
/// Debounced image carousel.
pub mod carousel;
/// Technology tag classification.
pub mod classifier;
/// Error types.
pub mod error;
/// Identifier types.
pub mod id;
/// Detail modal and scroll lock.
pub mod modal;
/// Display tones.
pub mod palette;
/// Project record shape.
pub mod project;
/// Selected project state.
pub mod selection;
/// List view controller.
pub mod showcase;

pub use catalog::Catalog;
pub use carousel::{Carousel, DEFAULT_TRANSITION, Step};
pub use classifier::{Category, TagChip, TagClassifier, classify};
pub use error::CatalogError;
pub use id::ProjectId;
pub use modal::{CloseTrigger, ProjectModal, ScrollLatch, ScrollLock};
pub use palette::{Tone, badge_tone};
pub use project::{LinkKind, LinkState, ProjectRecord, Role};
pub use selection::SelectionState;
pub use showcase::{BadgeView, ProjectRow, Showcase};
