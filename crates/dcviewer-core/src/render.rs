use ndarray::{s, Array2};
use rayon::prelude::*;

use crate::consts::{DEFAULT_LOG_EXPONENT, EPSILON, PARALLEL_PIXEL_THRESHOLD};
use crate::error::RenderError;
use crate::stretch::StretchTransform;

/// A position in either screen pixels or image data coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Coordinate frame of a rendered image.
///
/// Data coordinates follow the usual astronomical display: pixel centres
/// sit on integers, the image spans `-0.5..width-0.5` horizontally and the
/// first data row is drawn at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Axes {
    pub width: usize,
    pub height: usize,
}

impl Axes {
    /// Data coordinates of a position given as fractions of the figure
    /// (0.0..=1.0, measured from the top-left corner).
    pub fn to_data(&self, u: f32, v: f32) -> Point {
        Point::new(
            u * self.width as f32 - 0.5,
            (1.0 - v) * self.height as f32 - 0.5,
        )
    }

    /// Inverse of [`Axes::to_data`].
    pub fn to_figure(&self, p: Point) -> (f32, f32) {
        (
            (p.x + 0.5) / self.width as f32,
            1.0 - (p.y + 0.5) / self.height as f32,
        )
    }
}

/// Drawable output of the renderer.
#[derive(Clone, Debug)]
pub struct Figure {
    /// Display intensities in [0.0, 1.0], rows ordered top to bottom on screen.
    pub display: Array2<f32>,
    pub axes: Axes,
    pub transform: StretchTransform,
    /// Finite min/max of the input used for normalisation.
    pub data_range: (f32, f32),
}

/// Turns pixel data plus a stretch into a figure.
pub trait Renderer {
    fn render(
        &self,
        pixels: &Array2<f32>,
        transform: StretchTransform,
    ) -> Result<Figure, RenderError>;
}

/// Min/max normalisation followed by a [`StretchTransform`], grayscale.
#[derive(Clone, Copy, Debug)]
pub struct StretchRenderer {
    pub log_exponent: f32,
}

impl Default for StretchRenderer {
    fn default() -> Self {
        Self {
            log_exponent: DEFAULT_LOG_EXPONENT,
        }
    }
}

impl StretchRenderer {
    pub fn new(log_exponent: f32) -> Self {
        Self { log_exponent }
    }
}

impl Renderer for StretchRenderer {
    fn render(
        &self,
        pixels: &Array2<f32>,
        transform: StretchTransform,
    ) -> Result<Figure, RenderError> {
        let (rows, cols) = pixels.dim();
        if rows == 0 || cols == 0 {
            return Err(RenderError::EmptyData { rows, cols });
        }
        if !(self.log_exponent.is_finite() && self.log_exponent > 0.0) {
            return Err(RenderError::InvalidExponent(self.log_exponent));
        }

        let (lo, hi) = finite_range(pixels).ok_or(RenderError::NoFiniteValues)?;
        let range = hi - lo;
        let scale = if range > EPSILON { 1.0 / range } else { 0.0 };
        let a = self.log_exponent;

        let map = move |v: f32| {
            if v.is_finite() {
                transform.apply((v - lo) * scale, a)
            } else {
                0.0
            }
        };

        // First data row goes to the bottom of the screen.
        let mut display = pixels.slice(s![..;-1, ..]).to_owned();
        if display.len() >= PARALLEL_PIXEL_THRESHOLD {
            display.par_mapv_inplace(map);
        } else {
            display.mapv_inplace(map);
        }

        Ok(Figure {
            display,
            axes: Axes {
                width: cols,
                height: rows,
            },
            transform,
            data_range: (lo, hi),
        })
    }
}

/// Min and max over finite values, or `None` if there are none.
pub fn finite_range(pixels: &Array2<f32>) -> Option<(f32, f32)> {
    let fold = |(lo, hi): (f32, f32), v: &f32| {
        if v.is_finite() {
            (lo.min(*v), hi.max(*v))
        } else {
            (lo, hi)
        }
    };
    let empty = (f32::INFINITY, f32::NEG_INFINITY);

    let (lo, hi) = match pixels.as_slice() {
        Some(values) if values.len() >= PARALLEL_PIXEL_THRESHOLD => values
            .par_iter()
            .fold(|| empty, fold)
            .reduce(|| empty, |a, b| (a.0.min(b.0), a.1.max(b.1))),
        _ => pixels.iter().fold(empty, fold),
    };

    (lo <= hi).then_some((lo, hi))
}
