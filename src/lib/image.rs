//! Pixel sinks: an in-memory [Image] and a streaming PPM encoder.

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    color::{Color, Rgb8},
    error::{Error, Result},
};

/// Destination for the pixels produced by a render pass.
///
/// Pixels arrive row-major, top scanline first, left to right, exactly `width * height` of them
/// between [begin](PixelSink::begin) and [finish](PixelSink::finish).
pub trait PixelSink {
    /// Called once before the first pixel.
    fn begin(&mut self, width: u32, height: u32) -> Result<()>;

    /// Called once per pixel, in output order.
    fn write_pixel(&mut self, color: Color) -> Result<()>;

    /// Called once after the last pixel. Must flush anything buffered.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// PPM flavour.
pub enum PpmFormat {
    /// `P3`, one `r g b` text line per pixel.
    #[default]
    Ascii,
    /// `P6`, three raw bytes per pixel.
    Binary,
}

impl PpmFormat {
    /// Magic number opening the header.
    pub fn magic(&self) -> &'static str {
        match self {
            Self::Ascii => "P3",
            Self::Binary => "P6",
        }
    }
}

/// Streams pixels to `W` as a PPM image.
pub struct PpmWriter<W: Write> {
    writer: BufWriter<W>,
    format: PpmFormat,
}

impl<W: Write> PpmWriter<W> {
    /// Wrap `writer`, buffering writes.
    pub fn new(writer: W, format: PpmFormat) -> Self {
        Self {
            writer: BufWriter::new(writer),
            format,
        }
    }

    /// Flush and give back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|err| Error::Io(err.into_error()))
    }
}

impl PpmWriter<std::fs::File> {
    /// Create (or truncate) the file at `path`, creating any missing parent directory.
    pub fn create(path: &Path, format: PpmFormat) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self::new(file, format))
    }
}

impl<W: Write> PixelSink for PpmWriter<W> {
    fn begin(&mut self, width: u32, height: u32) -> Result<()> {
        write!(
            self.writer,
            "{}\n{} {}\n{}\n",
            self.format.magic(),
            width,
            height,
            u8::MAX
        )?;
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> Result<()> {
        let rgb = Rgb8::from(color);
        match self.format {
            PpmFormat::Ascii => writeln!(self.writer, "{rgb}")?,
            PpmFormat::Binary => self.writer.write_all(&rgb.as_bytes())?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Generic image struct. Usage of the word `pixel` in this documentation refers to an instance of
/// the stored data type.
///
/// Row 0 is the top scanline, matching the order pixels are emitted in.
pub struct Image<T> {
    /// Width of the image in pixels
    pub width: u32,
    /// Height of the image in pixels
    pub height: u32,
    /// Vector containing the image's pixels
    pub pixels: Vec<T>,
}

impl<T: Clone> Image<T> {
    /// Create an image from a pixel width and height and a default value
    pub fn new(width: u32, height: u32, value: T) -> Self {
        Self {
            width,
            height,
            pixels: vec![value; width as usize * height as usize],
        }
    }

    /// Get a pixel at x/y coordinates, `y = 0` being the top row.
    pub fn get(&self, x: u32, y: u32) -> Option<&T> {
        (x < self.width && y < self.height)
            .then(|| self.pixels.get(self.index(x, y)))
            .flatten()
    }

    /// Set a pixel at x/y coordinates
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Image<Color> {
    /// Feed every pixel, in order, to `sink`.
    pub fn replay_into(&self, sink: &mut impl PixelSink) -> Result<()> {
        sink.begin(self.width, self.height)?;
        for color in self.pixels.iter() {
            sink.write_pixel(*color)?;
        }
        sink.finish()
    }

    /// Encode as PPM into `writer`.
    pub fn write_ppm<W: Write>(&self, writer: W, format: PpmFormat) -> Result<()> {
        self.replay_into(&mut PpmWriter::new(writer, format))
    }

    /// Save as a .ppm at the path given as argument
    pub fn save_as_ppm(&self, path: &Path, format: PpmFormat) -> Result<()> {
        self.replay_into(&mut PpmWriter::create(path, format)?)
    }
}

impl PixelSink for Image<Color> {
    fn begin(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        Ok(())
    }

    fn write_pixel(&mut self, color: Color) -> Result<()> {
        let capacity = self.capacity();
        if self.pixels.len() >= capacity {
            return Err(Error::SinkOverflow { capacity });
        }

        self.pixels.push(color);
        Ok(())
    }
}

impl<T: Default> Default for Image<T> {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: vec![T::default()],
        }
    }
}
