//! Per-axis bracket search with a cached previous result.
//!
//! A [`Bracket`] remembers the last target it was searched for and the pair of
//! axis indices that surrounded it. Repeated or slowly-varying queries, which
//! are typical of simulation workloads, then skip the search entirely.
use num_traits::Float;

/// Behavior for targets outside the range of an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolation {
    /// Continue the slope of the first or last segment
    #[default]
    Linear,
    /// Hold the value at the nearest end of the axis
    Clamp,
}

/// The pair of adjacent axis indices surrounding a target,
/// and the fractional position of the target between them.
///
/// Invariant: `lower <= upper < axis.len()`, and `upper == lower` only when
/// the axis has fewer than two entries, or when the target is above an axis
/// whose last two breakpoints are equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bracket<T> {
    pub(crate) lower: usize,
    pub(crate) upper: usize,
    pub(crate) slope: T,
    pub(crate) can_interpolate: bool,
    pub(crate) last_target: Option<T>,
}

impl<T: Float> Default for Bracket<T> {
    fn default() -> Self {
        Self {
            lower: 0,
            upper: 0,
            slope: T::zero(),
            can_interpolate: false,
            last_target: None,
        }
    }
}

impl<T: Float> Bracket<T> {
    #[inline]
    pub fn lower(&self) -> usize {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> usize {
        self.upper
    }

    /// Fractional position between `axis[lower]` and `axis[upper]`.
    /// Outside [0, 1] only when linearly extrapolating.
    #[inline]
    pub fn slope(&self) -> T {
        self.slope
    }

    /// False on an axis with a single breakpoint or a flat segment,
    /// in which case the lower value is used as-is.
    #[inline]
    pub fn can_interpolate(&self) -> bool {
        self.can_interpolate
    }

    /// Target of the most recent search, `None` if cold
    #[inline]
    pub fn last_target(&self) -> Option<T> {
        self.last_target
    }

    /// Forget the cached result so the next search starts from scratch
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Update this bracket in place for `target` on `axis`.
    ///
    /// Assumes `axis` is non-empty and non-decreasing. NaN targets are not
    /// rejected; they produce a NaN slope, which propagates to the result.
    #[inline]
    pub fn search(&mut self, axis: &[T], target: T, extrap: Extrapolation) {
        if self.last_target == Some(target) {
            return;
        }
        self.last_target = Some(target);

        let n = axis.len();
        if n < 2 {
            self.lower = 0;
            self.upper = 0;
            self.slope = T::zero();
            self.can_interpolate = false;
            return;
        }

        // Reuse the previous cell if the target is still inside it
        let reuse = self.can_interpolate
            && self.upper < n
            && axis[self.lower] < target
            && target <= axis[self.upper];

        if !reuse {
            // First index whose value is >= target.
            //
            // Returns `0` if the point is outside-low, and `n` if outside-high;
            // either way the cell is clipped to the interior so that
            // extrapolation continues the slope of the edge segment.
            //
            // An axis ending in a step (repeated last breakpoint) holds the
            // value after the step when outside-high.
            let i = axis.partition_point(|v| *v < target);
            if i == n && axis[n - 2] == axis[n - 1] {
                self.lower = n - 1;
                self.upper = n - 1;
            } else {
                self.lower = i.saturating_sub(1).min(n - 2);
                self.upper = self.lower + 1;
            }
        }

        let x0 = axis[self.lower];
        let x1 = axis[self.upper];
        self.can_interpolate = x0 != x1;
        self.slope = if self.can_interpolate {
            let t = (target - x0) / (x1 - x0);
            match extrap {
                Extrapolation::Linear => t,
                // Written as comparisons so NaN passes through
                Extrapolation::Clamp if t < T::zero() => T::zero(),
                Extrapolation::Clamp if t > T::one() => T::one(),
                Extrapolation::Clamp => t,
            }
        } else {
            T::zero()
        };
    }
}
