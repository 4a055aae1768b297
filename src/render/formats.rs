// Surface format and alpha-mode selection.
// Kept free of browser types so host tests can include it.

use wgpu::{CompositeAlphaMode, TextureFormat};

/// Format the canvas is configured with, and the format its frame views and
/// the photo pipeline render through. `view` is always sRGB so the sRGB photo
/// textures are re-encoded on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub storage: TextureFormat,
    pub view: TextureFormat,
}

impl SurfaceFormats {
    /// Extra view formats the surface must allow; empty when storage is already sRGB.
    pub fn view_formats(&self) -> Vec<TextureFormat> {
        if self.view == self.storage {
            Vec::new()
        } else {
            vec![self.view]
        }
    }
}

/// Prefer a native sRGB format. Otherwise take the first reported format and
/// render through its sRGB view (the browser backend reports no sRGB formats).
pub fn pick_surface_formats(formats: &[TextureFormat]) -> Option<SurfaceFormats> {
    let storage = formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.first().copied())?;
    Some(SurfaceFormats {
        storage,
        view: storage.add_srgb_suffix(),
    })
}

/// Premultiplied alpha keeps the canvas transparent. Browser WebGPU accepts it
/// even though it only advertises `Opaque`.
pub fn pick_alpha_mode(modes: &[CompositeAlphaMode], browser_webgpu: bool) -> CompositeAlphaMode {
    if browser_webgpu || modes.contains(&CompositeAlphaMode::PreMultiplied) {
        CompositeAlphaMode::PreMultiplied
    } else {
        modes.first().copied().unwrap_or(CompositeAlphaMode::Auto)
    }
}
