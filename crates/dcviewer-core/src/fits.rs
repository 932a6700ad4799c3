use std::fs::File;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder};
use memmap2::Mmap;
use ndarray::Array2;

use crate::consts::{FITS_BLOCK_SIZE, FITS_CARD_SIZE, MAX_NAXIS};
use crate::error::{CubeReadError, Result};
use crate::header::{FitsHeader, HeaderCard};

const GZIP_MAGIC: &[u8; 2] = &[0x1f, 0x8b];

/// A single 2-D slice of a cube together with its header.
#[derive(Clone, Debug)]
pub struct CubeSlice {
    /// Physical values (BSCALE/BZERO applied), shape = (rows, cols).
    pub pixels: Array2<f32>,
    pub header: FitsHeader,
}

impl CubeSlice {
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }
}

/// Source of cube slices, selected by wavelength index.
pub trait CubeReader {
    fn read(&self, path: &Path, wavelength: i64) -> Result<CubeSlice>;
}

/// On-disk pixel type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bitpix {
    U8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl Bitpix {
    pub fn from_value(value: i64) -> Result<Self> {
        match value {
            8 => Ok(Self::U8),
            16 => Ok(Self::I16),
            32 => Ok(Self::I32),
            64 => Ok(Self::I64),
            -32 => Ok(Self::F32),
            -64 => Ok(Self::F64),
            other => Err(CubeReadError::UnsupportedBitpix(other)),
        }
    }

    pub fn value(&self) -> i64 {
        match self {
            Self::U8 => 8,
            Self::I16 => 16,
            Self::I32 => 32,
            Self::I64 => 64,
            Self::F32 => -32,
            Self::F64 => -64,
        }
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.value().unsigned_abs() as usize / 8
    }

    fn is_integer(&self) -> bool {
        self.value() > 0
    }

    /// Decode one big-endian sample.
    fn decode(&self, raw: &[u8]) -> f64 {
        match self {
            Self::U8 => raw[0] as f64,
            Self::I16 => BigEndian::read_i16(raw) as f64,
            Self::I32 => BigEndian::read_i32(raw) as f64,
            Self::I64 => BigEndian::read_i64(raw) as f64,
            Self::F32 => BigEndian::read_f32(raw) as f64,
            Self::F64 => BigEndian::read_f64(raw),
        }
    }

    fn decode_raw_int(&self, raw: &[u8]) -> Option<i64> {
        match self {
            Self::U8 => Some(raw[0] as i64),
            Self::I16 => Some(BigEndian::read_i16(raw) as i64),
            Self::I32 => Some(BigEndian::read_i32(raw) as i64),
            Self::I64 => Some(BigEndian::read_i64(raw)),
            Self::F32 | Self::F64 => None,
        }
    }
}

/// Shape and scaling of the primary data array.
#[derive(Clone, Debug)]
pub struct CubeLayout {
    pub bitpix: Bitpix,
    /// NAXIS1
    pub cols: usize,
    /// NAXIS2
    pub rows: usize,
    /// NAXIS3, or 1 for a plain image.
    pub planes: usize,
    pub bscale: f64,
    pub bzero: f64,
    /// Integer value marking undefined pixels.
    pub blank: Option<i64>,
    /// Bytes per plane; `plane_bytes * planes` is known not to overflow.
    plane_bytes: usize,
}

impl CubeLayout {
    fn from_header(header: &FitsHeader) -> Result<Self> {
        if header.get_bool("SIMPLE") != Some(true) {
            return Err(CubeReadError::InvalidFits(
                "SIMPLE = T card missing".into(),
            ));
        }

        let bitpix = header
            .get_int("BITPIX")
            .ok_or_else(|| CubeReadError::InvalidFits("BITPIX card missing".into()))
            .and_then(Bitpix::from_value)?;

        let naxis = header
            .get_int("NAXIS")
            .ok_or_else(|| CubeReadError::InvalidFits("NAXIS card missing".into()))?;

        if !(0..=MAX_NAXIS).contains(&naxis) {
            return Err(CubeReadError::InvalidFits(format!(
                "NAXIS = {naxis} outside 0..={MAX_NAXIS}"
            )));
        }

        let mut axes = Vec::with_capacity(naxis as usize);
        for n in 1..=naxis {
            let len = header
                .get_int(&format!("NAXIS{n}"))
                .filter(|len| *len >= 0)
                .ok_or_else(|| CubeReadError::InvalidFits(format!("NAXIS{n} missing or negative")))?;
            axes.push(len as usize);
        }

        // Image in the first two axes, wavelength along the third; anything
        // beyond must be degenerate.
        if axes.len() < 2 || axes.iter().skip(3).any(|&len| len != 1) {
            return Err(CubeReadError::InvalidDimensions(axes));
        }

        let (cols, rows) = (axes[0], axes[1]);
        let planes = axes.get(2).copied().unwrap_or(1);
        let plane_bytes = cols
            .checked_mul(rows)
            .and_then(|n| n.checked_mul(bitpix.bytes_per_pixel()))
            .filter(|n| n.checked_mul(planes).is_some())
            .ok_or_else(|| CubeReadError::InvalidDimensions(axes.clone()))?;

        Ok(Self {
            bitpix,
            cols,
            rows,
            planes,
            plane_bytes,
            bscale: header.get_float("BSCALE").unwrap_or(1.0),
            bzero: header.get_float("BZERO").unwrap_or(0.0),
            blank: if bitpix.is_integer() { header.get_int("BLANK") } else { None },
        })
    }

    pub fn plane_byte_size(&self) -> usize {
        self.plane_bytes
    }
}

/// Memory-mapped FITS cube (primary HDU only).
pub struct FitsCube {
    mmap: Mmap,
    data_start: usize,
    pub header: FitsHeader,
    pub layout: CubeLayout,
}

impl FitsCube {
    /// Open a FITS file and parse its primary header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Err(CubeReadError::InvalidFits("File is empty".into()));
        }
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.starts_with(GZIP_MAGIC) {
            return Err(CubeReadError::Compressed("gzip"));
        }

        let (header, data_start) = parse_header(&mmap)?;
        let layout = CubeLayout::from_header(&header)?;

        let expected = (layout.plane_byte_size() * layout.planes).checked_add(data_start);
        match expected {
            Some(expected) if mmap.len() >= expected => {}
            _ => {
                return Err(CubeReadError::InvalidFits(format!(
                    "File truncated: expected at least {} bytes, got {}",
                    expected.map_or_else(|| "usize::MAX".to_string(), |n| n.to_string()),
                    mmap.len()
                )));
            }
        }

        tracing::debug!(
            path = %path.display(),
            cols = layout.cols,
            rows = layout.rows,
            planes = layout.planes,
            bitpix = layout.bitpix.value(),
            "opened FITS cube"
        );

        Ok(Self {
            mmap,
            data_start,
            header,
            layout,
        })
    }

    pub fn plane_count(&self) -> usize {
        self.layout.planes
    }

    /// Read one wavelength plane as physical values.
    pub fn read_plane(&self, index: i64) -> Result<Array2<f32>> {
        let total = self.plane_count();
        let plane = usize::try_from(index)
            .ok()
            .filter(|&i| i < total)
            .ok_or(CubeReadError::WavelengthOutOfRange { index, total })?;

        let layout = &self.layout;
        let size = layout.plane_byte_size();
        let offset = self.data_start + plane * size;
        let raw = &self.mmap[offset..offset + size];
        let bpp = layout.bitpix.bytes_per_pixel();

        let values: Vec<f32> = raw
            .chunks_exact(bpp)
            .map(|sample| {
                if layout.blank.is_some() && layout.bitpix.decode_raw_int(sample) == layout.blank {
                    return f32::NAN;
                }
                (layout.bzero + layout.bscale * layout.bitpix.decode(sample)) as f32
            })
            .collect();

        Array2::from_shape_vec((layout.rows, layout.cols), values)
            .map_err(|e| CubeReadError::InvalidFits(format!("Plane shape mismatch: {e}")))
    }
}

/// Parse header cards up to END; returns the header and the data offset.
fn parse_header(buf: &[u8]) -> Result<(FitsHeader, usize)> {
    let mut cards = Vec::new();

    for (block_index, block) in buf.chunks_exact(FITS_BLOCK_SIZE).enumerate() {
        for raw in block.chunks_exact(FITS_CARD_SIZE) {
            let card = HeaderCard::parse(raw);
            if card.keyword == "END" {
                return Ok((FitsHeader::new(cards), (block_index + 1) * FITS_BLOCK_SIZE));
            }
            if !(card.keyword.is_empty() && card.value.is_none() && card.comment.is_none()) {
                cards.push(card);
            }
        }
    }

    if cards.is_empty() {
        Err(CubeReadError::InvalidFits(
            "File too small for a FITS header".into(),
        ))
    } else {
        Err(CubeReadError::InvalidFits("END card not found".into()))
    }
}

/// [`CubeReader`] backed by uncompressed FITS files.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitsCubeReader;

impl CubeReader for FitsCubeReader {
    fn read(&self, path: &Path, wavelength: i64) -> Result<CubeSlice> {
        let cube = FitsCube::open(path)?;
        let pixels = cube.read_plane(wavelength)?;
        Ok(CubeSlice {
            pixels,
            header: cube.header,
        })
    }
}
