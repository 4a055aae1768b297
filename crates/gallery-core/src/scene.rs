use crate::config::LayoutParams;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Lay out the photo planes top to bottom: `y = -i * spacing`, with x shifted
/// right by `x_base` plus a random `[0, x_jitter)` offset per photo.
pub fn build_surfaces<R: Rng + ?Sized>(layout: &LayoutParams, rng: &mut R) -> Vec<Surface> {
    let surfaces = (0..layout.count)
        .map(|i| {
            let x = layout.x_base + rng.gen::<f32>() * layout.x_jitter;
            let y = -(i as f32) * layout.spacing_y;
            Surface::new(i, Vec2::new(x, y))
        })
        .collect::<Vec<_>>();
    log::info!(
        "[scene] {} surfaces, y {:.2}..{:.2}",
        surfaces.len(),
        surfaces.first().map_or(0.0, |s| s.base.y),
        surfaces.last().map_or(0.0, |s| s.base.y)
    );
    surfaces
}
