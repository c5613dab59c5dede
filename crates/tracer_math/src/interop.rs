//! Conversions to and from glam, and byte casting for GPU buffers.

use bytemuck::{Pod, Zeroable};

use crate::{Vec3d, Vec3f, Vector3};

impl From<glam::Vec3> for Vec3f {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3f> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3f) -> Self {
        glam::Vec3::new(v.x, v.y, v.z)
    }
}

impl From<glam::DVec3> for Vec3d {
    #[inline]
    fn from(v: glam::DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3d> for glam::DVec3 {
    #[inline]
    fn from(v: Vec3d) -> Self {
        glam::DVec3::new(v.x, v.y, v.z)
    }
}

// SAFETY: `Vector3` is `#[repr(C)]` with three fields of the same type, so it
// has no padding, and the all-zero pattern is valid whenever it is for `T`.
unsafe impl<T: Zeroable> Zeroable for Vector3<T> {}

// SAFETY: as above; every bit pattern is valid whenever it is for `T`.
unsafe impl<T: Pod> Pod for Vector3<T> {}
