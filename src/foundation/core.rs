pub use kurbo::{BezPath, Point, Rect, Size, Vec2};

/// Straight-alpha RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Color {
    /// Fully transparent black, used wherever an object has no color set.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from straight-alpha channels.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert straight-alpha RGBA8 into a floating-point color.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Channels in `r, g, b, a` order.
    pub fn components(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Color::components`].
    pub fn from_components(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR
    }
}

/// Row-major 4x4 layer transform.
///
/// `m11`/`m22`/`m33` carry the axis scales and `m41`/`m42`/`m43` the translation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[allow(missing_docs)]
pub struct Transform3D {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m14: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m24: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
    pub m34: f64,
    pub m41: f64,
    pub m42: f64,
    pub m43: f64,
    pub m44: f64,
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Build a transform from four rows.
    pub const fn from_rows(m: [[f64; 4]; 4]) -> Self {
        Self {
            m11: m[0][0],
            m12: m[0][1],
            m13: m[0][2],
            m14: m[0][3],
            m21: m[1][0],
            m22: m[1][1],
            m23: m[1][2],
            m24: m[1][3],
            m31: m[2][0],
            m32: m[2][1],
            m33: m[2][2],
            m34: m[2][3],
            m41: m[3][0],
            m42: m[3][1],
            m43: m[3][2],
            m44: m[3][3],
        }
    }

    /// Rows of the matrix.
    pub fn rows(&self) -> [[f64; 4]; 4] {
        [
            [self.m11, self.m12, self.m13, self.m14],
            [self.m21, self.m22, self.m23, self.m24],
            [self.m31, self.m32, self.m33, self.m34],
            [self.m41, self.m42, self.m43, self.m44],
        ]
    }

    /// Pure axis scale.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            m11: sx,
            m22: sy,
            m33: sz,
            ..Self::IDENTITY
        }
    }

    /// Pure translation.
    pub fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            m41: tx,
            m42: ty,
            m43: tz,
            ..Self::IDENTITY
        }
    }

    /// Return `true` for the identity matrix.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
