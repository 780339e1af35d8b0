//! Time abstraction traits for platform-agnostic timing.
//!
//! Nothing in this crate reads a clock. Every time-aware method takes the
//! current instant from the caller, who samples it once per loop iteration.

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Counters that wrap must implement this with wrapping subtraction so
    /// that elapsed time stays correct across the overflow.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Elapsed milliseconds since `earlier`.
    #[inline]
    fn millis_since(&self, earlier: Self) -> u64 {
        self.duration_since(earlier).as_millis()
    }
}

/// A 32-bit millisecond duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MillisDuration(pub u32);

impl TimeDuration for MillisDuration {
    const ZERO: Self = MillisDuration(0);

    fn as_millis(&self) -> u64 {
        u64::from(self.0)
    }

    fn from_millis(millis: u64) -> Self {
        MillisDuration(u32::try_from(millis).unwrap_or(u32::MAX))
    }
}

/// A free-running millisecond counter that wraps at 2^32.
///
/// Mirrors the usual microcontroller tick counter: after roughly 49.7 days it
/// rolls over to zero, and [`TimeInstant::duration_since`] still reports the
/// correct elapsed time as long as the real interval is shorter than one wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(pub u32);

impl TimeInstant for Millis {
    type Duration = MillisDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        MillisDuration(self.0.wrapping_sub(earlier.0))
    }
}

#[cfg(feature = "embassy-time")]
impl TimeDuration for embassy_time::Duration {
    const ZERO: Self = embassy_time::Duration::from_ticks(0);

    fn as_millis(&self) -> u64 {
        embassy_time::Duration::as_millis(self)
    }

    fn from_millis(millis: u64) -> Self {
        embassy_time::Duration::from_millis(millis)
    }
}

#[cfg(feature = "embassy-time")]
impl TimeInstant for embassy_time::Instant {
    type Duration = embassy_time::Duration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        self.saturating_duration_since(earlier)
    }
}
