use thiserror::Error;

#[derive(Error, Debug)]
pub enum DuoviewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("No image loaded in this viewport")]
    NoImageLoaded,

    #[error("The first image must be loaded before the second")]
    FirstImageRequired,

    #[error("No size mismatch is awaiting confirmation")]
    NoPendingMismatch,

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, DuoviewError>;
