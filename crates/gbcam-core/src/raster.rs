//! Owned single-channel rasters passed between pipeline stages.

/// Floating point luminance plane, values in `0.0..=255.0`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaRaster {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl LumaRaster {
    /// Wrap a row-major buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "luma buffer does not match {width}x{height}"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Raster filled with a single value.
    pub fn filled(width: u32, height: u32, value: f32) -> Self {
        Self::from_vec(width, height, vec![value; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Native-endian `f32` bytes, the layout of a `PixelType::F32` resize buffer.
    pub(crate) fn to_ne_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    /// Inverse of [`to_ne_bytes`](Self::to_ne_bytes), clamping into `0.0..=255.0`.
    pub(crate) fn from_ne_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        let data = bytes
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]).clamp(0.0, 255.0))
            .collect();
        Self::from_vec(width, height, data)
    }
}

/// Palette indices (`0..4`) for each pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRaster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IndexRaster {
    pub(crate) fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
