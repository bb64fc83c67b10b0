use crate::{
    animation::{property::AnimatableProperty, value::AnimValue},
    foundation::core::{BezPath, Color, Point, Rect, Size, Transform3D},
    foundation::error::{MotionError, MotionResult},
};

/// Animatable attributes of one layer.
///
/// `position` (the layer center) and `size` are the canonical geometry; `origin`, `center` and
/// `frame` are derived from them and write back through the same relationship
/// (`origin = position - size / 2`). `alpha` is an alias of `opacity`.
///
/// The engine keeps one snapshot per target for the duration of a call and advances it as
/// keyframes are generated, so chained steps start from the previous step's end state. The real
/// object only receives the snapshot when playback completes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerSnapshot {
    /// Layer center in parent coordinates.
    pub position: Point,
    /// Bounds size.
    pub size: Size,
    /// Fill color; `None` renders as clear.
    pub background_color: Option<Color>,
    /// Border color; `None` renders as clear.
    pub border_color: Option<Color>,
    /// Border width.
    pub border_width: f64,
    /// Corner radius.
    pub corner_radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Shadow color; `None` renders as clear.
    pub shadow_color: Option<Color>,
    /// Shadow offset.
    pub shadow_offset: Size,
    /// Shadow opacity in `[0, 1]`.
    pub shadow_opacity: f64,
    /// Explicit shadow path.
    pub shadow_path: Option<BezPath>,
    /// Shadow blur radius.
    pub shadow_radius: f64,
    /// Layer transform.
    pub transform: Transform3D,
}

impl Default for LayerSnapshot {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::ZERO,
            background_color: None,
            border_color: None,
            border_width: 0.0,
            corner_radius: 0.0,
            opacity: 1.0,
            shadow_color: None,
            shadow_offset: Size::ZERO,
            shadow_opacity: 0.0,
            shadow_path: None,
            shadow_radius: 0.0,
            transform: Transform3D::IDENTITY,
        }
    }
}

impl LayerSnapshot {
    /// Snapshot of a layer occupying `frame`.
    pub fn with_frame(frame: Rect) -> Self {
        let mut s = Self::default();
        s.set_frame(frame);
        s
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(
            self.position.x - self.size.width / 2.0,
            self.position.y - self.size.height / 2.0,
        )
    }

    /// Move the layer so its top-left corner sits at `origin`.
    pub fn set_origin(&mut self, origin: Point) {
        self.set_origin_x(origin.x);
        self.set_origin_y(origin.y);
    }

    /// Set the x coordinate of the top-left corner.
    pub fn set_origin_x(&mut self, x: f64) {
        self.position.x = x + self.size.width / 2.0;
    }

    /// Set the y coordinate of the top-left corner.
    pub fn set_origin_y(&mut self, y: f64) {
        self.position.y = y + self.size.height / 2.0;
    }

    /// Layer center; same as `position`.
    pub fn center(&self) -> Point {
        self.position
    }

    /// Move the layer center.
    pub fn set_center(&mut self, center: Point) {
        self.position = center;
    }

    /// Frame rectangle derived from origin and size.
    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.origin(), self.size)
    }

    /// Set size first, then origin, so the stored position accounts for the new size.
    pub fn set_frame(&mut self, frame: Rect) {
        self.size = frame.size();
        self.set_origin(frame.origin());
    }

    /// Alias of `opacity`.
    pub fn alpha(&self) -> f64 {
        self.opacity
    }

    /// Alias of `set opacity`.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.opacity = alpha;
    }

    /// Read the attribute addressed by `property`.
    ///
    /// Missing colors read as [`Color::CLEAR`] and a missing shadow path as an empty path.
    pub fn get(&self, property: AnimatableProperty) -> MotionResult<AnimValue> {
        use AnimatableProperty as P;
        let value = match property {
            P::Origin => AnimValue::Point(self.origin()),
            P::OriginX => AnimValue::Scalar(self.origin().x),
            P::OriginY => AnimValue::Scalar(self.origin().y),
            P::Size => AnimValue::Size(self.size),
            P::SizeWidth => AnimValue::Scalar(self.size.width),
            P::SizeHeight => AnimValue::Scalar(self.size.height),
            P::Frame => AnimValue::Rect(self.frame()),
            P::Center | P::Position => AnimValue::Point(self.position),
            P::CenterX | P::PositionX => AnimValue::Scalar(self.position.x),
            P::CenterY | P::PositionY => AnimValue::Scalar(self.position.y),
            P::BackgroundColor => AnimValue::Color(self.background_color.unwrap_or(Color::CLEAR)),
            P::BorderColor => AnimValue::Color(self.border_color.unwrap_or(Color::CLEAR)),
            P::BorderWidth => AnimValue::Scalar(self.border_width),
            P::CornerRadius => AnimValue::Scalar(self.corner_radius),
            P::Opacity | P::Alpha => AnimValue::Scalar(self.opacity),
            P::ShadowColor => AnimValue::Color(self.shadow_color.unwrap_or(Color::CLEAR)),
            P::ShadowOffset => AnimValue::Size(self.shadow_offset),
            P::ShadowOpacity => AnimValue::Scalar(self.shadow_opacity),
            P::ShadowPath => AnimValue::Path(self.shadow_path.clone().unwrap_or_default()),
            P::ShadowRadius => AnimValue::Scalar(self.shadow_radius),
            P::Transform => AnimValue::Transform(self.transform),
            P::ScaleX => AnimValue::Scalar(self.transform.m11),
            P::ScaleY => AnimValue::Scalar(self.transform.m22),
            P::RotationX
            | P::RotationY
            | P::RotationZ
            | P::Rotation
            | P::ScaleZ
            | P::Scale
            | P::TranslationX
            | P::TranslationY
            | P::TranslationZ
            | P::Translation
            | P::ZPosition => return Err(MotionError::UnsupportedProperty(property)),
        };
        Ok(value)
    }

    /// Write the attribute addressed by `property`, updating canonical fields for derived ones.
    pub fn set(&mut self, property: AnimatableProperty, value: AnimValue) -> MotionResult<()> {
        use AnimatableProperty as P;
        property.check_value(&value)?;
        match (property, value) {
            (P::Origin, AnimValue::Point(p)) => self.set_origin(p),
            (P::OriginX, AnimValue::Scalar(x)) => self.set_origin_x(x),
            (P::OriginY, AnimValue::Scalar(y)) => self.set_origin_y(y),
            (P::Size, AnimValue::Size(s)) => self.size = s,
            (P::SizeWidth, AnimValue::Scalar(w)) => self.size.width = w,
            (P::SizeHeight, AnimValue::Scalar(h)) => self.size.height = h,
            (P::Frame, AnimValue::Rect(r)) => self.set_frame(r),
            (P::Center | P::Position, AnimValue::Point(p)) => self.set_center(p),
            (P::CenterX | P::PositionX, AnimValue::Scalar(x)) => self.position.x = x,
            (P::CenterY | P::PositionY, AnimValue::Scalar(y)) => self.position.y = y,
            (P::BackgroundColor, AnimValue::Color(c)) => self.background_color = Some(c),
            (P::BorderColor, AnimValue::Color(c)) => self.border_color = Some(c),
            (P::BorderWidth, AnimValue::Scalar(v)) => self.border_width = v,
            (P::CornerRadius, AnimValue::Scalar(v)) => self.corner_radius = v,
            (P::Opacity | P::Alpha, AnimValue::Scalar(v)) => self.set_alpha(v),
            (P::ShadowColor, AnimValue::Color(c)) => self.shadow_color = Some(c),
            (P::ShadowOffset, AnimValue::Size(s)) => self.shadow_offset = s,
            (P::ShadowOpacity, AnimValue::Scalar(v)) => self.shadow_opacity = v,
            (P::ShadowPath, AnimValue::Path(p)) => self.shadow_path = Some(p),
            (P::ShadowRadius, AnimValue::Scalar(v)) => self.shadow_radius = v,
            (P::Transform, AnimValue::Transform(t)) => self.transform = t,
            (P::ScaleX, AnimValue::Scalar(v)) => self.transform.m11 = v,
            (P::ScaleY, AnimValue::Scalar(v)) => self.transform.m22 = v,
            (property, _) => return Err(MotionError::UnsupportedProperty(property)),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/snapshot.rs"]
mod tests;
