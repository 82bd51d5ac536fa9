//! Raster surface owned by the canvas engine.
//!
//! The surface renders at a pixel-density multiplier (2x by default) so the
//! hosting form can display it scaled down for sharpness on high-DPI
//! screens. All drawing goes through short-lived Cairo contexts with the
//! multiplier applied as a scale transform, so callers only ever deal in
//! logical surface coordinates.

use crate::error::CanvasError;

/// A full-surface pixel capture used as one undo/redo history entry.
///
/// Snapshots are raw ARGB32 buffers, so equality means pixel-identical
/// content. They are captured immediately after every committed primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSnapshot {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) stride: i32,
    pub(crate) data: Vec<u8>,
}

impl RasterSnapshot {
    /// Raw pixel bytes (ARGB32, row stride as reported by Cairo).
    pub fn pixel_data(&self) -> &[u8] {
        &self.data
    }

    /// Row stride in bytes.
    pub fn stride(&self) -> i32 {
        self.stride
    }

    /// True when every pixel is fully transparent (the blank state).
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&byte| byte == 0)
    }
}

/// Fixed-size raster buffer with a device-pixel-ratio multiplier.
pub struct Surface {
    surface: cairo::ImageSurface,
    width: u32,
    height: u32,
    pixel_scale: u32,
}

impl Surface {
    /// Allocates a transparent ARGB32 surface.
    ///
    /// # Arguments
    /// * `width` - Logical width in surface units
    /// * `height` - Logical height in surface units
    /// * `pixel_scale` - Device pixel multiplier (2 = render at 2x density)
    ///
    /// # Errors
    /// Returns an error if the device extent (logical size times multiplier)
    /// is not representable, or if Cairo refuses the allocation.
    pub fn new(width: u32, height: u32, pixel_scale: u32) -> Result<Self, CanvasError> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            device_extent(width, pixel_scale)?,
            device_extent(height, pixel_scale)?,
        )?;

        Ok(Self {
            surface,
            width,
            height,
            pixel_scale,
        })
    }

    /// Logical width in surface units.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Logical height in surface units.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Creates a drawing context with the density multiplier pre-applied.
    ///
    /// Contexts are created per operation and dropped immediately after use;
    /// a live context holds a reference to the surface and would block
    /// exclusive pixel access during snapshot and restore.
    pub fn context(&self) -> Result<cairo::Context, CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.scale(self.pixel_scale as f64, self.pixel_scale as f64);
        Ok(ctx)
    }

    /// Wipes the surface back to fully transparent.
    pub fn wipe(&self) -> Result<(), CanvasError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Clear);
        ctx.paint()?;
        Ok(())
    }

    /// Captures the current pixel content as a history snapshot.
    pub fn snapshot(&mut self) -> Result<RasterSnapshot, CanvasError> {
        self.surface.flush();

        let width = self.surface.width();
        let height = self.surface.height();
        let stride = self.surface.stride();
        let data = self.surface.data()?;

        Ok(RasterSnapshot {
            width,
            height,
            stride,
            data: data.to_vec(),
        })
    }

    /// Repaints the surface from a previously captured snapshot.
    ///
    /// # Errors
    /// Returns [`CanvasError::SnapshotMismatch`] if the snapshot was taken
    /// from a surface with different dimensions. This cannot happen through
    /// the engine, which never resizes its surface.
    pub fn restore(&mut self, snapshot: &RasterSnapshot) -> Result<(), CanvasError> {
        self.surface.flush();

        {
            let mut data = self.surface.data()?;
            if data.len() != snapshot.data.len() {
                return Err(CanvasError::SnapshotMismatch {
                    expected: data.len(),
                    actual: snapshot.data.len(),
                });
            }
            data.copy_from_slice(&snapshot.data);
        }

        self.surface.mark_dirty();
        Ok(())
    }

    /// Encodes the current surface contents as PNG bytes.
    ///
    /// Pure read: the surface is not mutated and the call is valid at any
    /// time, including on a blank surface (which yields a transparent image).
    pub fn to_png(&self) -> Result<Vec<u8>, CanvasError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }
}

/// Logical extent times density multiplier, as the i32 Cairo expects.
fn device_extent(logical: u32, pixel_scale: u32) -> Result<i32, CanvasError> {
    logical
        .checked_mul(pixel_scale)
        .and_then(|extent| i32::try_from(extent).ok())
        .ok_or(CanvasError::Surface(cairo::Error::InvalidSize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_allocates_at_pixel_scale() {
        let surface = Surface::new(100, 80, 2).unwrap();
        assert_eq!(surface.width(), 100);
        assert_eq!(surface.height(), 80);

        let snap = surface_snapshot(surface);
        assert_eq!(snap.width, 200);
        assert_eq!(snap.height, 160);
        assert!(snap.is_blank());
    }

    #[test]
    fn snapshot_restore_round_trips_pixels() {
        let mut surface = Surface::new(32, 32, 2).unwrap();

        let blank = surface.snapshot().unwrap();

        {
            let ctx = surface.context().unwrap();
            ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
            ctx.rectangle(4.0, 4.0, 10.0, 10.0);
            ctx.fill().unwrap();
        }

        let painted = surface.snapshot().unwrap();
        assert!(!painted.is_blank());
        assert_ne!(blank, painted);

        surface.restore(&blank).unwrap();
        assert_eq!(surface.snapshot().unwrap(), blank);

        surface.restore(&painted).unwrap();
        assert_eq!(surface.snapshot().unwrap(), painted);
    }

    #[test]
    fn wipe_clears_every_pixel() {
        let mut surface = Surface::new(16, 16, 2).unwrap();

        {
            let ctx = surface.context().unwrap();
            ctx.set_source_rgba(0.0, 0.0, 1.0, 1.0);
            ctx.paint().unwrap();
        }
        assert!(!surface.snapshot().unwrap().is_blank());

        surface.wipe().unwrap();
        assert!(surface.snapshot().unwrap().is_blank());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        // Extents past i32 must error out, not wrap or panic
        assert!(Surface::new(u32::MAX, 16, 2).is_err());
        assert!(Surface::new(16, u32::MAX, 2).is_err());
        assert!(Surface::new(1 << 30, 16, 4).is_err());
    }

    #[test]
    fn blank_surface_exports_valid_png() {
        let surface = Surface::new(16, 16, 2).unwrap();
        let png = surface.to_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    fn surface_snapshot(mut surface: Surface) -> RasterSnapshot {
        surface.snapshot().unwrap()
    }
}
