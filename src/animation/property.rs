use crate::{
    animation::value::{AnimValue, ValueKind},
    foundation::core::Point,
    foundation::error::{MotionError, MotionResult},
    state::snapshot::LayerSnapshot,
};

/// Symbolic identifier of an animatable layer attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[allow(missing_docs)]
pub enum AnimatableProperty {
    Origin,
    OriginX,
    OriginY,

    Size,
    SizeWidth,
    SizeHeight,

    Frame,

    Center,
    CenterX,
    CenterY,

    PositionX,
    PositionY,
    Position,

    BackgroundColor,

    BorderColor,
    BorderWidth,

    CornerRadius,

    Opacity,
    Alpha,

    ShadowColor,
    ShadowOffset,
    ShadowOpacity,
    ShadowPath,
    ShadowRadius,

    Transform,

    RotationX,
    RotationY,
    RotationZ,
    Rotation,

    ScaleX,
    ScaleY,
    ScaleZ,
    Scale,

    TranslationX,
    TranslationY,
    TranslationZ,
    Translation,

    ZPosition,
}

impl AnimatableProperty {
    /// Backend key path driven by keyframes for this property.
    ///
    /// `None` for `Frame` (animated through its origin/size parts) and for unsupported
    /// properties.
    pub fn key_path(self) -> Option<&'static str> {
        use AnimatableProperty::*;
        let path = match self {
            OriginX | CenterX | PositionX => "position.x",
            OriginY | CenterY | PositionY => "position.y",
            Origin | Center | Position => "position",
            SizeWidth => "bounds.size.width",
            SizeHeight => "bounds.size.height",
            Size => "bounds.size",
            BackgroundColor => "backgroundColor",
            BorderColor => "borderColor",
            BorderWidth => "borderWidth",
            CornerRadius => "cornerRadius",
            Opacity | Alpha => "opacity",
            ShadowColor => "shadowColor",
            ShadowOffset => "shadowOffset",
            ShadowOpacity => "shadowOpacity",
            ShadowRadius => "shadowRadius",
            ScaleX => "transform.scale.x",
            ScaleY => "transform.scale.y",
            Frame | ShadowPath | Transform | RotationX | RotationY | RotationZ | Rotation
            | ScaleZ | Scale | TranslationX | TranslationY | TranslationZ | Translation
            | ZPosition => return None,
        };
        Some(path)
    }

    /// Kind of end value this property accepts.
    pub fn value_kind(self) -> ValueKind {
        use AnimatableProperty::*;
        match self {
            Origin | Center | Position => ValueKind::Point,
            Size | ShadowOffset => ValueKind::Size,
            Frame => ValueKind::Rect,
            BackgroundColor | BorderColor | ShadowColor => ValueKind::Color,
            ShadowPath => ValueKind::Path,
            Transform => ValueKind::Transform,
            // Combined rotation/scale/translation would carry a vector, none of which is modelled.
            Rotation | Scale | Translation => ValueKind::Transform,
            OriginX | OriginY | SizeWidth | SizeHeight | CenterX | CenterY | PositionX
            | PositionY | BorderWidth | CornerRadius | Opacity | Alpha | ShadowOpacity
            | ShadowRadius | RotationX | RotationY | RotationZ | ScaleX | ScaleY | ScaleZ
            | TranslationX | TranslationY | TranslationZ | ZPosition => ValueKind::Scalar,
        }
    }

    /// Return `true` when the property can be animated, directly or (for `Frame`) by
    /// decomposition.
    pub fn is_supported(self) -> bool {
        self == Self::Frame || self.key_path().is_some()
    }

    /// Resolve the keyframe strategy for this property.
    ///
    /// Fails with [`MotionError::UnsupportedProperty`] for properties without an interpolation
    /// rule and with [`MotionError::FrameNotSampleable`] for `Frame`.
    pub fn resolve(self) -> MotionResult<ResolvedProperty> {
        if !self.is_supported() {
            return Err(MotionError::UnsupportedProperty(self));
        }
        let Some(key_path) = self.key_path() else {
            return Err(MotionError::FrameNotSampleable);
        };
        Ok(ResolvedProperty {
            property: self,
            key_path,
            kind: self.value_kind(),
        })
    }

    /// Check that `value` has the kind this property expects.
    pub fn check_value(self, value: &AnimValue) -> MotionResult<()> {
        let expected = self.value_kind();
        let found = value.kind();
        if expected != found {
            return Err(MotionError::TypeMismatch {
                property: self,
                expected,
                found,
            });
        }
        Ok(())
    }
}

/// A property that passed resolution: its key path, value kind and endpoint rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedProperty {
    /// The resolved property.
    pub property: AnimatableProperty,
    /// Backend key path.
    pub key_path: &'static str,
    /// Kind of the end value.
    pub kind: ValueKind,
}

impl ResolvedProperty {
    /// Interpolation endpoints for moving `snapshot` to `end`.
    ///
    /// Origin properties are driven through the layer position, so their endpoints are
    /// expressed in position space (offset by half the current size). The snapshot is
    /// advanced to the end state before returning.
    pub fn endpoints(
        &self,
        snapshot: &mut LayerSnapshot,
        end: &AnimValue,
    ) -> MotionResult<(AnimValue, AnimValue)> {
        self.property.check_value(end)?;
        if !end.is_finite() {
            return Err(MotionError::validation(format!(
                "end value for {:?} must be finite",
                self.property
            )));
        }

        let half = snapshot.size.to_vec2() / 2.0;
        let (start, target) = match (self.property, end) {
            (AnimatableProperty::OriginX, AnimValue::Scalar(x)) => (
                AnimValue::Scalar(snapshot.position.x),
                AnimValue::Scalar(x + half.x),
            ),
            (AnimatableProperty::OriginY, AnimValue::Scalar(y)) => (
                AnimValue::Scalar(snapshot.position.y),
                AnimValue::Scalar(y + half.y),
            ),
            (AnimatableProperty::Origin, AnimValue::Point(p)) => (
                AnimValue::Point(snapshot.position),
                AnimValue::Point(Point::new(p.x + half.x, p.y + half.y)),
            ),
            _ => (snapshot.get(self.property)?, end.clone()),
        };

        snapshot.set(self.property, end.clone())?;
        Ok((start, target))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/property.rs"]
mod tests;
