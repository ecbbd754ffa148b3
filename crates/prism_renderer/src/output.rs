//! Image output.
//!
//! The native format is binary PPM (P6): a short text header followed by
//! raw RGB bytes, row-major from the top-left pixel. PNG is also available
//! through the `image` crate.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use log::info;
use thiserror::Error;

use crate::Framebuffer;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format '{0}', expected .ppm or .png")]
    UnsupportedFormat(String),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported image container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Binary portable pixmap (P6)
    Ppm,
    /// 8-bit RGB PNG
    Png,
}

impl OutputFormat {
    /// Pick a format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        let ext = path
            .as_ref()
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "ppm" => Ok(OutputFormat::Ppm),
            "png" => Ok(OutputFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(ext)),
        }
    }
}

/// Write a framebuffer as binary PPM.
pub fn write_ppm<W: Write>(writer: &mut W, image: &Framebuffer) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())
}

/// Write a framebuffer as PNG.
pub fn write_png<W: Write>(writer: &mut W, image: &Framebuffer) -> OutputResult<()> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(&image.to_rgb8(), image.width, image.height, ColorType::Rgb8)?;
    Ok(())
}

/// Write a framebuffer in the given format.
pub fn write_image<W: Write>(writer: &mut W, image: &Framebuffer, format: OutputFormat) -> OutputResult<()> {
    match format {
        OutputFormat::Ppm => write_ppm(writer, image)?,
        OutputFormat::Png => write_png(writer, image)?,
    }
    Ok(())
}

/// An output file opened ahead of rendering.
///
/// Creating the writer resolves the format and opens the file, so a bad path
/// or extension is reported before any pixels are traced.
pub struct ImageWriter {
    path: PathBuf,
    format: OutputFormat,
    writer: BufWriter<File>,
}

impl ImageWriter {
    /// Pick the format from the extension and create the file.
    pub fn create<P: AsRef<Path>>(path: P) -> OutputResult<Self> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;
        let writer = BufWriter::new(File::create(path)?);

        Ok(Self {
            path: path.to_path_buf(),
            format,
            writer,
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Encode the framebuffer and flush it to disk.
    pub fn write(mut self, image: &Framebuffer) -> OutputResult<()> {
        write_image(&mut self.writer, image, self.format)?;
        self.writer.flush()?;

        info!("Image saved as {}", self.path.display());
        Ok(())
    }
}

/// Save a framebuffer to `path`, choosing the format from its extension.
pub fn save<P: AsRef<Path>>(image: &Framebuffer, path: P) -> OutputResult<()> {
    ImageWriter::create(path)?.write(image)
}
