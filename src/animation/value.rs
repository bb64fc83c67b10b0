use crate::foundation::core::{BezPath, Color, Point, Rect, Size, Transform3D};

/// Runtime kind of an animatable value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ValueKind {
    /// A single number.
    Scalar,
    /// A 2D point.
    Point,
    /// A 2D size.
    Size,
    /// A rectangle (origin + size).
    Rect,
    /// An RGBA color.
    Color,
    /// A 4x4 transform.
    Transform,
    /// A bezier path.
    Path,
}

/// Dynamically typed end value of an animation, validated against the property's [`ValueKind`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnimValue {
    /// A single number.
    Scalar(f64),
    /// A 2D point.
    Point(Point),
    /// A 2D size.
    Size(Size),
    /// A rectangle.
    Rect(Rect),
    /// An RGBA color.
    Color(Color),
    /// A 4x4 transform.
    Transform(Transform3D),
    /// A bezier path.
    Path(BezPath),
}

impl AnimValue {
    /// Kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Point(_) => ValueKind::Point,
            Self::Size(_) => ValueKind::Size,
            Self::Rect(_) => ValueKind::Rect,
            Self::Color(_) => ValueKind::Color,
            Self::Transform(_) => ValueKind::Transform,
            Self::Path(_) => ValueKind::Path,
        }
    }

    /// Scalar payload, if any.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    /// Point payload, if any.
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Self::Point(v) => Some(*v),
            _ => None,
        }
    }

    /// Size payload, if any.
    pub fn as_size(&self) -> Option<Size> {
        match self {
            Self::Size(v) => Some(*v),
            _ => None,
        }
    }

    /// Rect payload, if any.
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(v) => Some(*v),
            _ => None,
        }
    }

    /// Color payload, if any.
    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// Return `true` when every numeric component is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Point(p) => p.is_finite(),
            Self::Size(s) => s.is_finite(),
            Self::Rect(r) => r.is_finite(),
            Self::Color(c) => c.components().iter().all(|v| v.is_finite()),
            Self::Transform(t) => t.rows().iter().flatten().all(|v| v.is_finite()),
            Self::Path(p) => p.elements().iter().all(|el| {
                el.end_point().is_none_or(|pt| pt.is_finite())
            }),
        }
    }
}

impl From<f64> for AnimValue {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Point> for AnimValue {
    fn from(v: Point) -> Self {
        Self::Point(v)
    }
}

impl From<Size> for AnimValue {
    fn from(v: Size) -> Self {
        Self::Size(v)
    }
}

impl From<Rect> for AnimValue {
    fn from(v: Rect) -> Self {
        Self::Rect(v)
    }
}

impl From<Color> for AnimValue {
    fn from(v: Color) -> Self {
        Self::Color(v)
    }
}

impl From<Transform3D> for AnimValue {
    fn from(v: Transform3D) -> Self {
        Self::Transform(v)
    }
}

impl From<BezPath> for AnimValue {
    fn from(v: BezPath) -> Self {
        Self::Path(v)
    }
}

/// Component-wise interpolation, `a + (b - a) * t`.
pub trait Lerp: Sized {
    /// Interpolate between `a` and `b` with progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            f64::lerp(&a.width, &b.width, t),
            f64::lerp(&a.height, &b.height, t),
        )
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let (a, b) = (a.components(), b.components());
        Color::from_components(std::array::from_fn(|i| f64::lerp(&a[i], &b[i], t)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
