use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use log::debug;

use super::frame::render_frame;
use super::transform::MapTransform;
use crate::cluster::{Coordinate, CoordinateList, FitListener, Page, bounds};
use crate::error::{PageFitError, Result};

pub const DEFAULT_FRAME_DELAY_MS: u32 = 150;

/// Lower is better quality and slower, 1..=30
const ENCODER_SPEED: i32 = 10;

/// Output shared between the animator and its encoder
///
/// The encoder writes the GIF trailer from its destructor and discards any
/// error, so the first failure is kept here for `finished` to report.
struct Sink<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W> Sink<W> {
    fn record(&mut self, err: io::Error) -> io::Error {
        let copy = io::Error::new(err.kind(), err.to_string());
        self.error.get_or_insert(err);
        copy
    }
}

struct SinkWriter<W>(Rc<RefCell<Sink<W>>>);

impl<W: Write> Write for SinkWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = self.0.borrow_mut();
        let result = sink.writer.write(buf);
        result.map_err(|e| sink.record(e))
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut sink = self.0.borrow_mut();
        let result = sink.writer.flush();
        result.map_err(|e| sink.record(e))
    }
}

/// Writes one animation frame per listener update
///
/// The view is fixed to the bounds of the route, so frames line up. The
/// GIF trailer is written, the output flushed and released when the fit
/// finishes.
pub struct GifAnimator<W: Write> {
    encoder: Option<GifEncoder<SinkWriter<W>>>,
    sink: Option<Rc<RefCell<Sink<W>>>>,
    path: Option<PathBuf>,
    coordinates: CoordinateList,
    transform: MapTransform,
    width: u32,
    height: u32,
    delay: Delay,
    frames: usize,
}

impl GifAnimator<BufWriter<File>> {
    /// Creates an animator writing to a new file at `path`
    pub fn create(path: &Path, coordinates: &[Coordinate], width: u32, height: u32) -> Result<Self> {
        let file = File::create(path).map_err(|e| PageFitError::io(path, e))?;
        let mut animator = Self::new(BufWriter::new(file), coordinates, width, height)?;
        animator.path = Some(path.to_path_buf());
        Ok(animator)
    }
}

impl<W: Write> GifAnimator<W> {
    pub fn new(writer: W, coordinates: &[Coordinate], width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PageFitError::invalid(
                "animation size",
                format!("{width}x{height} has a zero dimension"),
            ));
        }
        let view = bounds(coordinates.iter().copied())?;

        let sink = Rc::new(RefCell::new(Sink {
            writer,
            error: None,
        }));
        let mut encoder = GifEncoder::new_with_speed(SinkWriter(Rc::clone(&sink)), ENCODER_SPEED);
        encoder.set_repeat(Repeat::Infinite)?;

        Ok(GifAnimator {
            encoder: Some(encoder),
            sink: Some(sink),
            path: None,
            coordinates: coordinates.to_vec(),
            transform: MapTransform::fit_to_bounds(&view, width, height),
            width,
            height,
            delay: Delay::from_numer_denom_ms(DEFAULT_FRAME_DELAY_MS, 1),
            frames: 0,
        })
    }

    pub fn with_frame_delay(mut self, millis: u32) -> Self {
        self.delay = Delay::from_numer_denom_ms(millis, 1);
        self
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.encoder.is_none()
    }
}

impl<W: Write> FitListener for GifAnimator<W> {
    fn updated(&mut self, pages: &[Page]) -> Result<()> {
        let Some(encoder) = self.encoder.as_mut() else {
            return Err(PageFitError::invalid(
                "animation",
                "frame received after the animation was finished",
            ));
        };

        let image = render_frame(
            pages,
            &self.coordinates,
            &self.transform,
            self.width,
            self.height,
        );
        encoder.encode_frame(Frame::from_parts(image, 0, 0, self.delay))?;
        self.frames += 1;
        Ok(())
    }

    fn finished(&mut self) -> Result<()> {
        let Some(encoder) = self.encoder.take() else {
            return Ok(());
        };
        // dropping the encoder writes the trailer
        drop(encoder);

        if let Some(sink) = self.sink.take() {
            let mut sink = sink.borrow_mut();
            if let Some(err) = sink.error.take() {
                return Err(self.write_error(err));
            }
            sink.writer.flush().map_err(|e| self.write_error(e))?;
        }

        debug!("Animation finished after {} frames", self.frames);
        Ok(())
    }
}

impl<W: Write> GifAnimator<W> {
    fn write_error(&self, err: io::Error) -> PageFitError {
        match &self.path {
            Some(path) => PageFitError::io(path, err),
            None => PageFitError::Write(err),
        }
    }
}
