use crate::error::AssetError;
use std::cell::RefCell;
use std::rc::Rc;

/// Load state of an asynchronously fetched image.
#[derive(Clone, Debug)]
pub enum ImageLoad<I> {
    Pending,
    Ready(I),
    Failed(AssetError),
}

/// Shared handle written by the loader callbacks and polled by animators each tick.
///
/// Single-threaded by construction: the browser delivers `onload`/`onerror`
/// on the same thread that runs the frame loop.
#[derive(Debug)]
pub struct ImageSlot<I>(Rc<RefCell<ImageLoad<I>>>);

impl<I> Clone for ImageSlot<I> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<I> Default for ImageSlot<I> {
    fn default() -> Self {
        Self::pending()
    }
}

impl<I> ImageSlot<I> {
    pub fn pending() -> Self {
        Self(Rc::new(RefCell::new(ImageLoad::Pending)))
    }

    pub fn resolve(&self, image: I) {
        *self.0.borrow_mut() = ImageLoad::Ready(image);
    }

    /// Records a failed load. Animators keep running without the image.
    pub fn fail(&self, error: AssetError) {
        log::warn!("{error}; continuing without it");
        *self.0.borrow_mut() = ImageLoad::Failed(error);
    }

    /// True once the load has finished, successfully or not.
    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        !matches!(*self.0.borrow(), ImageLoad::Pending)
    }

    #[cfg(test)]
    pub fn is_ready(&self) -> bool {
        matches!(*self.0.borrow(), ImageLoad::Ready(_))
    }

    /// Runs `f` with the image if it has loaded.
    pub fn with_ready<R>(&self, f: impl FnOnce(&I) -> R) -> Option<R> {
        match &*self.0.borrow() {
            ImageLoad::Ready(img) => Some(f(img)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_settles_without_image() {
        let slot: ImageSlot<u8> = ImageSlot::pending();
        assert!(!slot.is_settled());
        slot.clone().fail(AssetError::LoadFailed {
            url: "missing.png".into(),
        });
        assert!(slot.is_settled());
        assert!(!slot.is_ready());
        assert_eq!(slot.with_ready(|_| ()), None);
    }

    #[test]
    fn resolve_is_visible_through_clones() {
        let slot = ImageSlot::pending();
        let loader = slot.clone();
        loader.resolve(7u8);
        assert_eq!(slot.with_ready(|v| *v), Some(7));
    }
}
