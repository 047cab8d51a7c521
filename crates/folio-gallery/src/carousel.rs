//! Detail modal image carousel.
//!
//! `Closed` until a project is opened; `Open` holds the project, its image
//! count and the current index. Navigation wraps cyclically. Closing drops
//! everything, so the next open always starts at the first image.

use folio_model::ProjectRecord;
use tracing::debug;

use crate::scroll::{ScrollMetrics, WheelEvent, WheelRoute, route_wheel};

/// Supplies the carousel images of a project.
///
/// The carousel pages through exactly the list returned here, so its image
/// count and the image on screen always come from the same source.
pub trait ImageSource {
    /// Image references of `project` in carousel order.
    fn images<'p>(&self, project: &'p ProjectRecord) -> Vec<&'p str>;
}

/// The cover image followed by the record's gallery.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordImages;

impl ImageSource for RecordImages {
    fn images<'p>(&self, project: &'p ProjectRecord) -> Vec<&'p str> {
        project.images().collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CarouselState<'c> {
    #[default]
    Closed,
    Open {
        project: &'c ProjectRecord,
        image_count: usize,
        /// Always in `0..image_count`.
        image_index: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Carousel<'c, S = RecordImages> {
    state: CarouselState<'c>,
    source: S,
}

impl<'c> Carousel<'c, RecordImages> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'c, S: ImageSource> Carousel<'c, S> {
    pub fn with_source(source: S) -> Self {
        Self {
            state: CarouselState::Closed,
            source,
        }
    }

    /// Open the modal on `project` at its first image.
    ///
    /// A project without images cannot be shown; the carousel is left
    /// closed and `false` is returned.
    pub fn open(&mut self, project: &'c ProjectRecord) -> bool {
        let image_count = self.source.images(project).len();
        if image_count == 0 {
            debug!(project = %project.id, "project has no images, carousel stays closed");
            self.state = CarouselState::Closed;
            return false;
        }
        debug!(project = %project.id, image_count, "carousel opened");
        self.state = CarouselState::Open {
            project,
            image_count,
            image_index: 0,
        };
        true
    }

    pub fn close(&mut self) {
        if let CarouselState::Open { project, .. } = self.state {
            debug!(project = %project.id, "carousel closed");
        }
        self.state = CarouselState::Closed;
    }

    pub fn next(&mut self) {
        if let CarouselState::Open {
            image_count,
            image_index,
            ..
        } = &mut self.state
        {
            *image_index = (*image_index + 1) % *image_count;
        }
    }

    pub fn prev(&mut self) {
        if let CarouselState::Open {
            image_count,
            image_index,
            ..
        } = &mut self.state
        {
            *image_index = (*image_index + *image_count - 1) % *image_count;
        }
    }

    /// Jump to image `index`. Out-of-range indices are ignored.
    pub fn select_image(&mut self, index: usize) {
        if let CarouselState::Open {
            image_count,
            image_index,
            ..
        } = &mut self.state
            && index < *image_count
            && index != *image_index
        {
            *image_index = index;
        }
    }

    pub fn state(&self) -> CarouselState<'c> {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, CarouselState::Open { .. })
    }

    pub fn active_project(&self) -> Option<&'c ProjectRecord> {
        match self.state {
            CarouselState::Open { project, .. } => Some(project),
            CarouselState::Closed => None,
        }
    }

    pub fn image_index(&self) -> Option<usize> {
        match self.state {
            CarouselState::Open { image_index, .. } => Some(image_index),
            CarouselState::Closed => None,
        }
    }

    pub fn image_count(&self) -> usize {
        match self.state {
            CarouselState::Open { image_count, .. } => image_count,
            CarouselState::Closed => 0,
        }
    }

    /// Images of the open project, as listed by the image source.
    pub fn images(&self) -> Vec<&'c str> {
        match self.state {
            CarouselState::Open { project, .. } => self.source.images(project),
            CarouselState::Closed => Vec::new(),
        }
    }

    /// Image at `index` of the open project.
    pub fn image_at(&self, index: usize) -> Option<&'c str> {
        match self.state {
            CarouselState::Open {
                project,
                image_count,
                ..
            } if index < image_count => self.source.images(project).get(index).copied(),
            _ => None,
        }
    }

    /// Reference of the image on screen.
    pub fn current_image(&self) -> Option<&'c str> {
        self.image_index().and_then(|index| self.image_at(index))
    }

    /// Route a wheel event aimed at the modal's scrollable body.
    pub fn route_wheel(&self, event: &WheelEvent, metrics: &ScrollMetrics) -> WheelRoute {
        route_wheel(self.is_open(), event, metrics)
    }
}
