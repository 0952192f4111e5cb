//! Loading and caching of image files.

pub(crate) mod image;
pub mod source;

pub use image::Image;
pub use source::{AssetSource, EmbeddedRawAsset};

use hashbrown::HashMap;
use miette::{Result, WrapErr};

/// Decoded images mapped by the path they were requested with.
///
/// Every image file is only decoded once.
pub(crate) struct Assets {
    /// Where the files are read from.
    source: AssetSource,
    /// All images that are decoded.
    images: HashMap<String, Image>,
}

impl Assets {
    /// Setup an empty cache.
    pub(crate) fn new(source: AssetSource) -> Self {
        let images = HashMap::new();

        Self { source, images }
    }

    /// Source of all files.
    pub(crate) const fn source(&self) -> &AssetSource {
        &self.source
    }

    /// Get an image, decoding it when it's requested for the first time.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    /// - When the file is not a valid PNG.
    pub(crate) fn image(&mut self, path: &str) -> Result<&Image> {
        // Can't use the entry API because decoding can fail
        if !self.images.contains_key(path) {
            log::debug!("Decoding image '{path}'");

            let bytes = self.source.read(path)?;
            let image = Image::from_png_bytes(&bytes)
                .wrap_err_with(|| format!("Error decoding image '{path}'"))?;

            self.images.insert(path.to_owned(), image);
        }

        self.images
            .get(path)
            .ok_or_else(|| miette::miette!("Image '{path}' disappeared from the cache"))
    }

    /// Insert an already decoded image, replacing any image at the same path.
    pub(crate) fn insert_image(&mut self, path: &str, image: Image) {
        self.images.insert(path.to_owned(), image);
    }
}
