use image::imageops::{self, FilterType};
use image::{ImageBuffer, Luma, Pixel, Rgb, Rgba};

/// Width and height of a frame, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Multiplies both dimensions by `scale`, truncating toward zero.
    pub fn scaled(self, scale: f64) -> Self {
        Self {
            width: (self.width as f64 * scale) as u32,
            height: (self.height as f64 * scale) as u32,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A single video/image frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the domain layer
/// treats pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a copy resampled to `size` with bilinear filtering.
    ///
    /// A frame already at `size` is cloned untouched.
    pub fn resized(&self, size: FrameSize) -> Result<Frame, Box<dyn std::error::Error>> {
        if size == self.size() {
            return Ok(self.clone());
        }
        if size.is_empty() {
            return Err(format!("cannot resize frame to {}x{}", size.width, size.height).into());
        }

        let data = match self.channels {
            1 => resample::<Luma<u8>>(self, size),
            3 => resample::<Rgb<u8>>(self, size),
            4 => resample::<Rgba<u8>>(self, size),
            n => return Err(format!("unsupported channel count: {n}").into()),
        }
        .ok_or("Frame data length must match dimensions")?;

        Ok(Frame::new(
            data,
            size.width,
            size.height,
            self.channels,
            self.index,
        ))
    }
}

fn resample<P>(frame: &Frame, size: FrameSize) -> Option<Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let src = ImageBuffer::<P, &[u8]>::from_raw(frame.width, frame.height, frame.data())?;
    Some(imageops::resize(&src, size.width, size.height, FilterType::Triangle).into_raw())
}
