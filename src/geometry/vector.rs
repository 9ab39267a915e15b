//! Vector abstraction used by the geometry helpers
//!
//! The helpers in [`super`] are generic over [`Vector3`] so that callers can
//! run them on their own vector types (engine math types, FFI structs, ...)
//! without converting. Only construction and component access are required;
//! the arithmetic has default implementations that can be overridden when the
//! host type has faster ones.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A 3-component `f32` vector
pub trait Vector3: Copy {
    /// Build a vector from components
    fn new(x: f32, y: f32, z: f32) -> Self;

    /// X component
    fn x(&self) -> f32;

    /// Y component
    fn y(&self) -> f32;

    /// Z component
    fn z(&self) -> f32;

    /// Dot product
    fn dot(self, other: Self) -> f32 {
        self.x().mul_add(other.x(), self.y().mul_add(other.y(), self.z() * other.z()))
    }

    /// Component-wise sum
    #[must_use]
    fn add(self, other: Self) -> Self {
        Self::new(self.x() + other.x(), self.y() + other.y(), self.z() + other.z())
    }

    /// Component-wise difference
    #[must_use]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x() - other.x(), self.y() - other.y(), self.z() - other.z())
    }

    /// Multiply every component by `factor`
    #[must_use]
    fn scale(self, factor: f32) -> Self {
        Self::new(self.x() * factor, self.y() * factor, self.z() * factor)
    }

    /// Euclidean length
    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// A zero vector yields NaN components.
    #[must_use]
    fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }
}

/// Plain `f32` vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3f {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3f {
    /// Create a vector
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Check whether each component is within `epsilon` of `other`'s
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl Vector3 for Vec3f {
    fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn z(&self) -> f32 {
        self.z
    }
}

impl fmt::Display for Vec3f {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Vec3f {
    type Err = Error;

    /// Parse `x,y,z` (whitespace around components is ignored)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let [x, y, z] = parts.as_slice() else {
            return Err(Error::InvalidVector(format!("expected x,y,z but got '{s}'")));
        };

        let parse = |part: &str| {
            part.parse::<f32>()
                .map_err(|e| Error::InvalidVector(format!("'{part}' in '{s}': {e}")))
        };

        Ok(Self::new(parse(x)?, parse(y)?, parse(z)?))
    }
}
