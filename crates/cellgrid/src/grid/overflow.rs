//! Overflow policies for resolving out-of-range coordinates.
//!
//! Every coordinate-based query resolves each axis independently through an
//! [`Overflow`] policy, either the grid's configured one or a per-call
//! override supplied via [`OverflowOverrides`].

/// Per-axis rule for coordinates outside `[0, extent)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// Pass the coordinate through unchanged; out-of-range lookups miss.
    #[default]
    None,
    /// Euclidean modulo into `[0, extent)`. Negative inputs wrap to valid
    /// non-negative coordinates.
    Wrap,
    /// Clamp into `[0, extent - 1]`.
    Constrain,
}

/// Optional per-call overrides for one or both axes.
///
/// An unset axis falls back to the grid's own policy for that axis only;
/// an X override never affects Y resolution and vice versa.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverflowOverrides {
    pub x: Option<Overflow>,
    pub y: Option<Overflow>,
}

impl OverflowOverrides {
    /// Override both axes with the same policy.
    pub fn both(policy: Overflow) -> Self {
        Self {
            x: Some(policy),
            y: Some(policy),
        }
    }

    /// Override only the X axis.
    pub fn x(policy: Overflow) -> Self {
        Self {
            x: Some(policy),
            y: None,
        }
    }

    /// Override only the Y axis.
    pub fn y(policy: Overflow) -> Self {
        Self {
            x: None,
            y: Some(policy),
        }
    }
}

/// Resolves one axis. Under [`Overflow::None`] the value passes through and
/// is bounds-checked by the caller. A zero extent resolves nothing under any
/// policy.
pub(crate) fn resolve_axis(policy: Overflow, value: i32, extent: usize) -> i32 {
    if extent == 0 {
        return value;
    }
    let extent = extent as i32;
    match policy {
        Overflow::None => value,
        Overflow::Wrap => value.rem_euclid(extent),
        Overflow::Constrain => value.clamp(0, extent - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_passes_values_through() {
        assert_eq!(resolve_axis(Overflow::None, -3, 5), -3);
        assert_eq!(resolve_axis(Overflow::None, 17, 5), 17);
    }

    #[test]
    fn wrap_normalizes_negative_values() {
        assert_eq!(resolve_axis(Overflow::Wrap, -1, 5), 4);
        assert_eq!(resolve_axis(Overflow::Wrap, -6, 5), 4);
        assert_eq!(resolve_axis(Overflow::Wrap, 7, 5), 2);
        assert_eq!(resolve_axis(Overflow::Wrap, 3, 5), 3);
    }

    #[test]
    fn constrain_clamps_both_ends() {
        assert_eq!(resolve_axis(Overflow::Constrain, -10, 5), 0);
        assert_eq!(resolve_axis(Overflow::Constrain, 99, 5), 4);
        assert_eq!(resolve_axis(Overflow::Constrain, 2, 5), 2);
    }

    #[test]
    fn zero_extent_passes_through_unresolved() {
        assert_eq!(resolve_axis(Overflow::Wrap, 3, 0), 3);
        assert_eq!(resolve_axis(Overflow::Constrain, -2, 0), -2);
    }

    #[test]
    fn overrides_constructors_set_expected_axes() {
        assert_eq!(
            OverflowOverrides::both(Overflow::Wrap),
            OverflowOverrides {
                x: Some(Overflow::Wrap),
                y: Some(Overflow::Wrap),
            }
        );
        assert_eq!(OverflowOverrides::x(Overflow::Constrain).y, None);
        assert_eq!(OverflowOverrides::y(Overflow::Constrain).x, None);
    }
}
