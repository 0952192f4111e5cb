//! Play sound files.
//!
//! When the `audio` feature is disabled sound files are only read, never played.

#[cfg(feature = "audio")]
use std::io::Cursor;

#[cfg(feature = "audio")]
use hashbrown::HashMap;
#[cfg(feature = "audio")]
use kira::{
    manager::{backend::DefaultBackend, AudioManager, AudioManagerSettings},
    sound::static_sound::StaticSoundData,
};
#[cfg(feature = "audio")]
use miette::{IntoDiagnostic, WrapErr};
use miette::Result;

use crate::assets::AssetSource;

/// Decoded sounds and the device they are played on.
pub(crate) struct Audio {
    /// Manager playing the sounds on the audio device.
    ///
    /// Created when the first sound is played.
    #[cfg(feature = "audio")]
    manager: Option<AudioManager<DefaultBackend>>,
    /// All sounds that are decoded, mapped by path.
    #[cfg(feature = "audio")]
    sounds: HashMap<String, StaticSoundData>,
    /// Whether sounds are sent to the audio device or only decoded.
    output: bool,
}

impl Audio {
    /// Play sounds on the default audio device.
    pub(crate) fn new() -> Self {
        Self::with_output(true)
    }

    /// Only decode sounds, never open an audio device.
    pub(crate) fn muted() -> Self {
        Self::with_output(false)
    }

    /// Setup without decoded sounds.
    fn with_output(output: bool) -> Self {
        Self {
            #[cfg(feature = "audio")]
            manager: None,
            #[cfg(feature = "audio")]
            sounds: HashMap::new(),
            output,
        }
    }

    /// Play a sound file, decoding it when it's played for the first time.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    /// - When the file is not a WAV or OGG sound.
    /// - When no audio device could be opened.
    #[cfg(feature = "audio")]
    pub(crate) fn play(&mut self, path: &str, source: &AssetSource) -> Result<()> {
        profiling::scope!("Play sound");

        // Can't use the entry API because decoding can fail
        if !self.sounds.contains_key(path) {
            log::debug!("Decoding sound '{path}'");

            let bytes = source.read(path)?.into_owned();
            let sound = StaticSoundData::from_cursor(Cursor::new(bytes))
                .into_diagnostic()
                .wrap_err_with(|| format!("Error decoding sound '{path}'"))?;

            self.sounds.insert(path.to_owned(), sound);
        }

        if !self.output {
            return Ok(());
        }

        let sound = self
            .sounds
            .get(path)
            .ok_or_else(|| miette::miette!("Sound '{path}' disappeared from the cache"))?
            // Cloning is cheap because the samples are reference counted
            .clone();

        let manager = match &mut self.manager {
            Some(manager) => manager,
            manager @ None => {
                log::debug!("Opening audio device");

                manager.insert(
                    AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())
                        .into_diagnostic()
                        .wrap_err("Error setting up audio manager")?,
                )
            }
        };

        manager
            .play(sound)
            .map_err(|err| miette::miette!("Error playing sound '{path}': {err:?}"))?;

        Ok(())
    }

    /// Read a sound file without playing it.
    ///
    /// # Errors
    ///
    /// - When the file can't be read.
    #[cfg(not(feature = "audio"))]
    pub(crate) fn play(&mut self, path: &str, source: &AssetSource) -> Result<()> {
        source.read(path)?;

        if self.output {
            log::warn!("Not playing sound '{path}', the 'audio' feature is disabled");
        }

        Ok(())
    }
}
