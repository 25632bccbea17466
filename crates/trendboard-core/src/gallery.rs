//! Item gallery modal state
//!
//! The modal is scoped to one [`ItemRef`] at a time. Reopening always
//! re-fetches, and a reply for any item other than the open one is dropped.

use crate::models::{GalleryImage, ItemGallery, ItemRef};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Closed,
    Loading(ItemRef),
    Loaded {
        item: ItemRef,
        images: Vec<GalleryImage>,
    },
    /// Request succeeded but no image matched
    Empty(ItemRef),
    Failed {
        item: ItemRef,
        message: String,
    },
}

impl GalleryState {
    pub fn is_open(&self) -> bool {
        !matches!(self, GalleryState::Closed)
    }

    pub fn item(&self) -> Option<&ItemRef> {
        match self {
            GalleryState::Closed => None,
            GalleryState::Loading(item) | GalleryState::Empty(item) => Some(item),
            GalleryState::Loaded { item, .. } | GalleryState::Failed { item, .. } => Some(item),
        }
    }

    /// Show the modal for `item` in its loading state
    pub fn open(&mut self, item: ItemRef) {
        *self = GalleryState::Loading(item);
    }

    pub fn close(&mut self) {
        *self = GalleryState::Closed;
    }

    /// Apply a fetch outcome for `item`
    ///
    /// Returns `false` and leaves the state untouched when the modal was
    /// closed or moved on to another item while the request was in flight.
    pub fn resolve(&mut self, item: &ItemRef, outcome: Result<ItemGallery, String>) -> bool {
        if !matches!(self, GalleryState::Loading(open) if open == item) {
            tracing::debug!("dropping stale gallery reply for {}", item.heading());
            return false;
        }

        *self = match outcome {
            Ok(gallery) if gallery.images.is_empty() => GalleryState::Empty(item.clone()),
            Ok(gallery) => GalleryState::Loaded {
                item: item.clone(),
                images: gallery.images,
            },
            Err(message) => GalleryState::Failed {
                item: item.clone(),
                message,
            },
        };
        true
    }
}
