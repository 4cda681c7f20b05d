//! Global parameter tracks.
//!
//! A small fixed set of named numeric tracks registered at game setup
//! (e.g. `habitat-rate`, `mining-rate`, `logistics-rate`), each with a
//! current value, a valid range, and a step size. Values only move
//! toward the maximum (monotonic raise) except where a card explicitly
//! lowers them. Raising past the maximum silently clamps; callers that
//! grant "first to raise" bonuses compare old vs new value through
//! [`RaiseOutcome`] rather than assume the requested delta applied.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// One named track: current value, range, and step size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    value: i64,
    min: i64,
    max: i64,
    step: i64,
}

impl Track {
    /// Create a track starting at its minimum.
    #[must_use]
    pub fn new(min: i64, max: i64, step: i64) -> Self {
        assert!(min <= max, "Track range must be non-empty");
        assert!(step > 0, "Track step must be positive");
        Self {
            value: min,
            min,
            max,
            step,
        }
    }

    /// Start the track at a specific value, clamped into range.
    #[must_use]
    pub fn starting_at(mut self, value: i64) -> Self {
        self.value = value.clamp(self.min, self.max);
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Minimum of the valid range.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Maximum of the valid range.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Step size for one raise step.
    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    /// Check if the track sits at its maximum.
    #[must_use]
    pub fn is_maxed(&self) -> bool {
        self.value == self.max
    }
}

/// Old and new value of a track after a raise or lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseOutcome {
    pub previous: i64,
    pub current: i64,
}

impl RaiseOutcome {
    /// The delta actually applied (0 when the track was already
    /// clamped; negative for a lower).
    #[must_use]
    pub fn applied(&self) -> i64 {
        self.current - self.previous
    }

    /// Whether this change crossed a threshold, i.e. moved from below
    /// `threshold` to at-or-above it. Extension point for one-time
    /// threshold bonuses.
    #[must_use]
    pub fn crossed(&self, threshold: i64) -> bool {
        self.previous < threshold && self.current >= threshold
    }
}

/// Registry of global parameter tracks for one game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalParameters {
    tracks: FxHashMap<String, Track>,
}

impl GlobalParameters {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a track (builder pattern).
    #[must_use]
    pub fn with_track(mut self, name: impl Into<String>, track: Track) -> Self {
        self.register(name, track);
        self
    }

    /// Register a track.
    pub fn register(&mut self, name: impl Into<String>, track: Track) {
        self.tracks.insert(name.into(), track);
    }

    /// Look up a track.
    ///
    /// A missing track is an [`GameError::InternalInconsistency`]: the
    /// set of tracks is fixed at setup, so a dangling reference means
    /// corrupted card data, not a recoverable game situation.
    pub fn track(&self, name: &str) -> Result<&Track, GameError> {
        self.tracks
            .get(name)
            .ok_or_else(|| GameError::InternalInconsistency(format!("unknown track '{name}'")))
    }

    /// Current value of a track.
    pub fn value_of(&self, name: &str) -> Result<i64, GameError> {
        Ok(self.track(name)?.value)
    }

    /// Raise a track by `steps` steps, clamped at its maximum.
    ///
    /// Raising at the maximum is a no-op with `applied() == 0`.
    pub fn raise(&mut self, name: &str, steps: u32) -> Result<RaiseOutcome, GameError> {
        let track = self.track_mut(name)?;
        let previous = track.value;
        track.value = (previous + i64::from(steps) * track.step).min(track.max);
        Ok(RaiseOutcome {
            previous,
            current: track.value,
        })
    }

    /// Lower a track by `steps` steps, clamped at its minimum.
    pub fn lower(&mut self, name: &str, steps: u32) -> Result<RaiseOutcome, GameError> {
        let track = self.track_mut(name)?;
        let previous = track.value;
        track.value = (previous - i64::from(steps) * track.step).max(track.min);
        Ok(RaiseOutcome {
            previous,
            current: track.value,
        })
    }

    /// Minimum across the current values of the named tracks.
    ///
    /// Reads the values at call time; effects that depend on "the
    /// lowest of several tracks" must call this when they run, not at
    /// requirement-check time.
    pub fn lowest_of(&self, names: &[&str]) -> Result<i64, GameError> {
        if names.is_empty() {
            return Err(GameError::InternalInconsistency(
                "lowest_of called with no tracks".to_string(),
            ));
        }
        let mut lowest = i64::MAX;
        for name in names {
            lowest = lowest.min(self.value_of(name)?);
        }
        Ok(lowest)
    }

    /// Number of registered tracks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if no tracks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate over `(name, track)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Track)> {
        self.tracks.iter().map(|(name, track)| (name.as_str(), track))
    }

    fn track_mut(&mut self, name: &str) -> Result<&mut Track, GameError> {
        self.tracks
            .get_mut(name)
            .ok_or_else(|| GameError::InternalInconsistency(format!("unknown track '{name}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> GlobalParameters {
        GlobalParameters::new()
            .with_track("habitat-rate", Track::new(0, 8, 1))
            .with_track("mining-rate", Track::new(0, 8, 1))
            .with_track("logistics-rate", Track::new(0, 8, 1))
    }

    #[test]
    fn test_raise_basic() {
        let mut params = rates();

        let outcome = params.raise("habitat-rate", 2).unwrap();
        assert_eq!(outcome.previous, 0);
        assert_eq!(outcome.current, 2);
        assert_eq!(outcome.applied(), 2);
        assert_eq!(params.value_of("habitat-rate").unwrap(), 2);
    }

    #[test]
    fn test_raise_clamps_at_max() {
        let mut params = rates();

        let outcome = params.raise("mining-rate", 20).unwrap();
        assert_eq!(outcome.current, 8);
        assert_eq!(outcome.applied(), 8);

        // Raising at the max is a no-op, not an error.
        let outcome = params.raise("mining-rate", 1).unwrap();
        assert_eq!(outcome.applied(), 0);
        assert_eq!(params.value_of("mining-rate").unwrap(), 8);
    }

    #[test]
    fn test_lower_clamps_at_min() {
        let mut params = rates();
        params.raise("habitat-rate", 3).unwrap();

        let outcome = params.lower("habitat-rate", 5).unwrap();
        assert_eq!(outcome.current, 0);
        assert_eq!(outcome.applied(), -3);
    }

    #[test]
    fn test_step_size() {
        let mut params =
            GlobalParameters::new().with_track("temperature", Track::new(-30, 8, 2));

        let outcome = params.raise("temperature", 3).unwrap();
        assert_eq!(outcome.previous, -30);
        assert_eq!(outcome.current, -24);
    }

    #[test]
    fn test_crossed_threshold() {
        let mut params = rates();

        let outcome = params.raise("habitat-rate", 3).unwrap();
        assert!(outcome.crossed(2));
        assert!(outcome.crossed(3));
        assert!(!outcome.crossed(4));

        // Already past the threshold: not crossed again.
        let outcome = params.raise("habitat-rate", 1).unwrap();
        assert!(!outcome.crossed(3));
    }

    #[test]
    fn test_lowest_of() {
        let mut params = rates();
        params.raise("habitat-rate", 2).unwrap();
        params.raise("mining-rate", 3).unwrap();
        params.raise("logistics-rate", 1).unwrap();

        let lowest = params
            .lowest_of(&["habitat-rate", "mining-rate", "logistics-rate"])
            .unwrap();
        assert_eq!(lowest, 1);
    }

    #[test]
    fn test_unknown_track() {
        let mut params = rates();

        assert!(matches!(
            params.value_of("oxygen"),
            Err(GameError::InternalInconsistency(_))
        ));
        assert!(matches!(
            params.raise("oxygen", 1),
            Err(GameError::InternalInconsistency(_))
        ));
        assert!(matches!(
            params.lowest_of(&[]),
            Err(GameError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn test_starting_at_clamped() {
        let track = Track::new(0, 8, 1).starting_at(12);
        assert_eq!(track.value(), 8);
        assert!(track.is_maxed());
    }
}
