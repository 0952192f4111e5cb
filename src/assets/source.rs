//! Where files passed by path are read from.

use std::{borrow::Cow, path::PathBuf};

use miette::{IntoDiagnostic, Result, WrapErr};

/// Source of all image and sound files.
///
/// Files are first looked up in the embedded assets, when not found they are read from the runtime directory.
/// On the web there is no file system, so every file must be embedded.
///
/// # Example
///
/// ```
/// use pixdraw::{assets::EmbeddedRawAsset, AssetSource};
///
/// static EMBEDDED: &[EmbeddedRawAsset] = &[EmbeddedRawAsset {
///     path: "icon.png",
///     bytes: &[],
/// }];
///
/// let source = AssetSource::new()
///     .with_runtime_dir("assets/")
///     .with_embedded_assets(EMBEDDED);
/// ```
#[derive(Debug, Clone)]
pub struct AssetSource {
    /// Path to the directory where files not embedded are read from.
    ///
    /// `None` disables reading from disk.
    runtime_asset_dir: Option<PathBuf>,
    /// Assets directly embedded into the binary.
    embedded_assets: &'static [EmbeddedRawAsset],
}

impl AssetSource {
    /// Read files relative to the current working directory, nothing is embedded.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        let runtime_asset_dir = Some(PathBuf::new());
        let embedded_assets: &[EmbeddedRawAsset] = &[];

        Self {
            runtime_asset_dir,
            embedded_assets,
        }
    }

    /// Only read embedded files, never touch the file system.
    #[inline]
    #[must_use]
    pub fn embedded_only(embedded_assets: &'static [EmbeddedRawAsset]) -> Self {
        Self {
            runtime_asset_dir: None,
            embedded_assets,
        }
    }

    /// Set a runtime directory files are read from.
    #[inline]
    #[must_use]
    pub fn with_runtime_dir(mut self, runtime_asset_dir: impl Into<PathBuf>) -> Self {
        self.runtime_asset_dir = Some(runtime_asset_dir.into());

        self
    }

    /// Embed raw files into the source.
    #[inline]
    #[must_use]
    pub fn with_embedded_assets(mut self, embedded_assets: &'static [EmbeddedRawAsset]) -> Self {
        self.embedded_assets = embedded_assets;

        self
    }

    /// Read the bytes of a file.
    ///
    /// # Errors
    ///
    /// - When the file is not embedded and reading from disk is disabled.
    /// - When the file could not be read from disk.
    #[inline]
    pub fn read(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        let normalized = normalize(path);

        // First try to read from memory
        if let Some(raw_asset) = self
            .embedded_assets
            .iter()
            .find(|raw_asset| normalize(raw_asset.path) == normalized)
        {
            return Ok(Cow::Borrowed(raw_asset.bytes));
        }

        let Some(runtime_asset_dir) = &self.runtime_asset_dir else {
            return Err(miette::miette!(
                "File '{path}' is not embedded and reading from disk is disabled"
            ));
        };

        log::debug!("Reading file '{path}' from disk");

        let file_path = runtime_asset_dir.join(normalized.as_ref());
        let bytes = std::fs::read(&file_path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Error reading file '{}'", file_path.display()))?;

        Ok(Cow::Owned(bytes))
    }
}

impl Default for AssetSource {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Single file embedded in the binary.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::exhaustive_structs)]
pub struct EmbeddedRawAsset {
    /// Path the file is requested with, such as `"sounds/jump.wav"`.
    pub path: &'static str,
    /// Raw bytes of the file, usually from [`include_bytes!`].
    pub bytes: &'static [u8],
}

/// Use forward slashes and strip a leading `"./"`, so `".\\a\\b.png"` and `"a/b.png"` are the same file.
fn normalize(path: &str) -> Cow<'_, str> {
    let path = if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    };

    match path {
        Cow::Borrowed(path) => Cow::Borrowed(path.trim_start_matches("./")),
        Cow::Owned(path) => Cow::Owned(path.trim_start_matches("./").to_owned()),
    }
}
