//! Project gallery: category/search filtering, the gallery controller and
//! the detail carousel shared by every page that lists projects.

pub mod carousel;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod scroll;

pub use carousel::{Carousel, CarouselState, ImageSource, RecordImages};
pub use error::{GalleryError, Result};
pub use filter::{FilterQuery, apply_query, category_matches, filter_projects, search_matches};
pub use gallery::{
    CARD_TAG_LIMIT, EmptyState, Gallery, GalleryConfig, NO_RESULTS, PageVariant, ProjectCard,
};
pub use scroll::{BOUNDARY_TOLERANCE, ScrollMetrics, WheelEvent, WheelRoute, route_wheel};
