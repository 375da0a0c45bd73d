use std::fmt;
use std::sync::Arc;

use ::image::RgbaImage;

/// Shared handle to an already-decoded RGBA image.
///
/// The engine never decodes on its own behalf during painting; whoever supplies
/// the handle owns the loading step. Cloning is cheap and equality is identity,
/// which keeps recorded draw commands comparable without comparing pixels.
#[derive(Clone)]
pub struct ImageHandle(Arc<RgbaImage>);

impl ImageHandle {
    pub fn new(image: RgbaImage) -> Self {
        Self(Arc::new(image))
    }

    /// Decodes an image file into straight-alpha RGBA8.
    pub fn open(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let decoded = ::image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        Ok(Self::new(decoded.to_rgba8()))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageHandle({}x{})", self.width(), self.height())
    }
}

impl From<RgbaImage> for ImageHandle {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}
