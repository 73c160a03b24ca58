use super::Color;

/// Paint source for filling a path's interior.
///
/// Solid-only in v0. Extend by adding variants (gradients, patterns) while
/// keeping the enum stable for backend dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
}

impl Brush {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Brush::Solid(c) => c.a >= 1.0,
        }
    }
}

impl From<Color> for Brush {
    #[inline]
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_opaque_follows_alpha() {
        assert!(Brush::solid(Color::white()).is_opaque());
        assert!(!Brush::solid(Color::from_straight(1.0, 1.0, 1.0, 0.5)).is_opaque());
    }

    #[test]
    fn from_color_is_solid() {
        let b: Brush = Color::black().into();
        assert_eq!(b, Brush::Solid(Color::black()));
    }
}
