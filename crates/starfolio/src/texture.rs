//! Planet texture loading.
//!
//! Each planet gets its own thread that downloads (or reads) the image,
//! shrinks it to a small RGB texture and drops it into the planet's slot.
//! A failure only logs; the planet keeps its placeholder fill.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use image::imageops::FilterType;
use starfolio_background::{PLANETS, PlanetSpec, Rgb, Texture, TextureSlot};
use starfolio_config::TextureConfig;
use thiserror::Error;
use tracing::{info, warn};

/// Edge length of the downsampled texture.
pub const TEXTURE_SIZE: u32 = 64;

const USER_AGENT: &str = concat!("starfolio/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to fetch texture: {0}")]
    Fetch(#[from] ureq::Error),
    #[error("failed to read texture file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
    #[error("decoded texture is empty")]
    Empty,
}

/// Fills planet texture slots in the background.
#[derive(Debug, Clone)]
pub struct TextureLoader {
    agent: ureq::Agent,
    paths: BTreeMap<String, PathBuf>,
}

impl TextureLoader {
    pub fn new(config: &TextureConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .new_agent();
        Self {
            agent,
            paths: config.paths.clone(),
        }
    }

    /// Start one loader thread per planet. `slots` are in [`PLANETS`] order.
    pub fn spawn(&self, slots: &[TextureSlot]) -> Vec<JoinHandle<()>> {
        PLANETS
            .iter()
            .zip(slots)
            .map(|(spec, slot)| {
                let loader = self.clone();
                let spec = *spec;
                let slot = slot.clone();
                thread::spawn(move || loader.load_into(&spec, &slot))
            })
            .collect()
    }

    fn load_into(&self, spec: &PlanetSpec, slot: &TextureSlot) {
        match self.load(spec) {
            Ok(texture) => {
                slot.fill(texture);
                info!(planet = spec.name, "texture loaded");
            }
            Err(e) => warn!(planet = spec.name, "texture unavailable: {e}"),
        }
    }

    fn load(&self, spec: &PlanetSpec) -> Result<Texture, TextureError> {
        let bytes = match self.paths.get(spec.name) {
            Some(path) => read_file(path)?,
            None => self.fetch(spec.texture_url)?,
        };
        decode(&bytes)
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, TextureError> {
        let bytes = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()?
            .body_mut()
            .read_to_vec()?;
        Ok(bytes)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, TextureError> {
    Ok(std::fs::read(path)?)
}

/// Decode an encoded image and shrink it to a [`TEXTURE_SIZE`] square.
pub fn decode(bytes: &[u8]) -> Result<Texture, TextureError> {
    let image = image::load_from_memory(bytes)?
        .resize_exact(TEXTURE_SIZE, TEXTURE_SIZE, FilterType::Triangle)
        .to_rgb8();
    let (width, height) = image.dimensions();
    let pixels = image.pixels().map(|p| Rgb::new(p[0], p[1], p[2])).collect();
    Texture::new(width, height, pixels).ok_or(TextureError::Empty)
}
