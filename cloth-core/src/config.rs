use crate::error::ClothError;

/// Construction parameters and tunables for a [`crate::cloth::Cloth`].
///
/// `width` and `height` are fixed once a cloth is built. The remaining
/// fields can be changed between steps through the cloth's setters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of nodes per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    pub gravity: f32,
    /// Hookean spring constant shared by all three spring classes.
    pub stiffness: f32,
    /// Damping factor applied to the gravity term (a tuning constant).
    pub gravity_scale: f32,
    /// Springs shorter than this contribute no force for the step.
    pub min_spring_length: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            gravity: 0.9,
            stiffness: 5.0,
            gravity_scale: 0.7,
            min_spring_length: 1e-6,
        }
    }
}

impl Config {
    /// Default configuration with the given grid size.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Checks that the grid is non-empty, that the node count fits in a
    /// `usize`, and that every scalar parameter is finite.
    ///
    /// ### Returns
    /// The node count `width * height` on success.
    pub fn validate(&self) -> Result<usize, ClothError> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(ClothError::InvalidDimensions { width, height });
        }
        let count = width
            .checked_mul(height)
            .ok_or(ClothError::NodeCountOverflow { width, height })?;

        for (name, value) in [
            ("gravity", self.gravity),
            ("stiffness", self.stiffness),
            ("gravity_scale", self.gravity_scale),
            ("min_spring_length", self.min_spring_length),
        ] {
            ensure_finite(name, value)?;
        }
        Ok(count)
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<(), ClothError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ClothError::NonFiniteParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(100));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (w, h) in [(0, 5), (5, 0), (0, 0)] {
            assert_eq!(
                Config::with_size(w, h).validate(),
                Err(ClothError::InvalidDimensions {
                    width: w,
                    height: h
                })
            );
        }
    }

    #[test]
    fn overflowing_node_count_is_rejected() {
        let cfg = Config::with_size(usize::MAX, 2);
        assert!(matches!(
            cfg.validate(),
            Err(ClothError::NodeCountOverflow { .. })
        ));
    }

    #[test]
    fn non_finite_gravity_is_rejected() {
        let cfg = Config::default().with_gravity(f32::NAN);
        assert!(matches!(
            cfg.validate(),
            Err(ClothError::NonFiniteParameter {
                name: "gravity",
                ..
            })
        ));
    }
}
