use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("window error: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
