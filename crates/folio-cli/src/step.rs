//! Carousel navigation steps given on the command line.

use std::fmt;
use std::str::FromStr;

use folio_gallery::{Carousel, ImageSource};

/// One navigation action applied to an open carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselStep {
    Next,
    Prev,
    /// Jump to a zero-based image index.
    Select(usize),
}

impl CarouselStep {
    pub fn apply<S: ImageSource>(self, carousel: &mut Carousel<'_, S>) {
        match self {
            Self::Next => carousel.next(),
            Self::Prev => carousel.prev(),
            Self::Select(index) => carousel.select_image(index),
        }
    }
}

impl FromStr for CarouselStep {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "prev" | "previous" | "p" => Ok(Self::Prev),
            other => other
                .parse::<usize>()
                .map(Self::Select)
                .map_err(|_| format!("expected next, prev or an image index, got {value:?}")),
        }
    }
}

impl fmt::Display for CarouselStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
            Self::Select(index) => write!(f, "{index}"),
        }
    }
}
