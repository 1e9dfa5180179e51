use core::fmt;

/// A route color: a small non-negative integer.
///
/// Colors carry no meaning beyond identity and order. Routes that share a
/// stop must never receive the same color. "Not yet colored" is expressed
/// as `Option<Color>::None`, so no sentinel value exists inside this type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Color(u32);

impl Color {
    /// The smallest color (0).
    pub const FIRST: Color = Color(0);

    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw color value.
    pub const fn index(self) -> u32 {
        self.0
    }

    /// The color following this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for Color {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
