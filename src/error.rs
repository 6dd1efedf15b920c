//! Widget error types

use thiserror::Error;

use crate::stage::{ElementId, TabId};

#[derive(Error, Debug, PartialEq)]
pub enum SlideshowError {
    #[error("No images to show")]
    EmptyImageList,

    #[error("Image index {index} is out of range ({count} images)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("{0} carries no usable image index")]
    UnindexedTab(TabId),

    #[error("Unknown {0}")]
    UnknownTab(TabId),

    #[error("Image element {0} is not in the container")]
    MissingElement(ElementId),
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
