use crate::surface::Surface;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    pub distance: f32,
    pub point: Vec3,
}

/// Surfaces crossed by this frame's ray, nearest first.
pub type IntersectionSet = SmallVec<[Hit; 4]>;

/// Intersect a ray with the unit quad `[-0.5, 0.5]^2` in the local XY plane of
/// `model`. Only the front (+Z local) face counts. Returns the ray parameter,
/// which is the world distance when `ray.dir` is normalized.
#[inline]
pub fn ray_quad(ray: &Ray, model: &Mat4) -> Option<f32> {
    let inv = model.inverse();
    let lo = inv.transform_point3(ray.origin);
    let ld = inv.transform_vector3(ray.dir);
    if ld.z > -1e-6 {
        return None;
    }
    let t = -lo.z / ld.z;
    if t < 0.0 {
        return None;
    }
    let p = lo + ld * t;
    (p.x.abs() <= 0.5 && p.y.abs() <= 0.5).then_some(t)
}

/// Every surface the ray crosses with its current pose. Equal distances are
/// ordered by surface index, whatever the order of `surfaces`.
pub fn intersect_surfaces(ray: &Ray, surfaces: &[Surface], plane_size: Vec2) -> IntersectionSet {
    let mut hits = IntersectionSet::new();
    for s in surfaces {
        if let Some(t) = ray_quad(ray, &s.model_matrix(plane_size)) {
            hits.push(Hit {
                index: s.index,
                distance: t,
                point: ray.origin + ray.dir * t,
            });
        }
    }
    hits.sort_by(|a, b| {
        a.distance
            .total_cmp(&b.distance)
            .then(a.index.cmp(&b.index))
    });
    hits
}
