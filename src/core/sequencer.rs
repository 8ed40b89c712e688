//! Staggered reveal sequencing.
//!
//! A sequence is an ordered list of visual groups that share one activation
//! trigger. When a sequence is activated at time `T`, group `i` starts its
//! transition at `T + lead_in + i * interval` (or `T + lead_in + delay` when the
//! group carries an explicit delay) and eases from its initial state to its
//! final state over its own duration.
//!
//! The sequencer is a plain value: time is always passed in by the caller, in
//! milliseconds, which keeps it deterministic and independent of the browser.
//!
//! # Example
//! ```
//! use componix::core::sequencer::{ActivationMode, RevealSequencer, Stagger, VisualGroup};
//! use componix::core::motion::RevealPreset;
//!
//! let mut sequencer = RevealSequencer::new();
//! let groups = vec![
//!     VisualGroup::from_preset("title", RevealPreset::Rise),
//!     VisualGroup::from_preset("lead", RevealPreset::Rise),
//! ];
//! let handle = sequencer
//!     .register_sequence_with(groups, ActivationMode::Immediate, Stagger::new(300.0))
//!     .unwrap();
//!
//! assert!(sequencer.activate(handle, 1_000.0).unwrap());
//! assert_eq!(sequencer.start_time(handle, 1), Some(1_300.0));
//! ```

use std::collections::{HashMap, HashSet};

use crate::core::error::ConfigurationError;
use crate::core::motion::{Easing, RevealPreset, VisualState};

/// Default transition duration for groups built with [`VisualGroup::new`]
pub const DEFAULT_DURATION_MS: f64 = 600.0;

/// Default delay between consecutive groups of a sequence
pub const DEFAULT_STAGGER_MS: f64 = 300.0;

/// When a sequence starts revealing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationMode {
    /// As soon as the owning view mounts
    Immediate,
    /// When a viewport trigger reports the region as entered
    OnViewportEntry,
}

/// Stagger applied across the groups of one sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Delay between group `i` and group `i + 1`
    pub interval_ms: f64,
    /// Delay before the first group starts
    pub lead_in_ms: f64,
}

impl Stagger {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            lead_in_ms: 0.0,
        }
    }

    pub fn with_lead_in(mut self, lead_in_ms: f64) -> Self {
        self.lead_in_ms = lead_in_ms;
        self
    }
}

impl Default for Stagger {
    fn default() -> Self {
        Self::new(DEFAULT_STAGGER_MS)
    }
}

/// Descriptor for one animatable unit, as supplied at registration.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualGroup {
    pub id: String,
    pub initial: VisualState,
    /// Required; a group without a final state is rejected at registration
    pub final_state: Option<VisualState>,
    pub duration_ms: f64,
    /// Explicit delay overriding the stagger slot of this group
    pub delay_ms: Option<f64>,
    pub easing: Easing,
}

impl VisualGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initial: VisualState::hidden(),
            final_state: None,
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: None,
            easing: Easing::default(),
        }
    }

    pub fn from_preset(id: impl Into<String>, preset: RevealPreset) -> Self {
        Self::new(id)
            .with_initial(preset.initial())
            .with_final(preset.final_state())
            .with_duration(preset.duration_ms())
            .with_easing(preset.easing())
    }

    pub fn with_initial(mut self, state: VisualState) -> Self {
        self.initial = state;
        self
    }

    pub fn with_final(mut self, state: VisualState) -> Self {
        self.final_state = Some(state);
        self
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Opaque reference to a registered sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceHandle(u32);

/// Group after validation, with its start offset resolved.
#[derive(Clone, Debug)]
struct ScheduledGroup {
    id: String,
    initial: VisualState,
    final_state: VisualState,
    duration_ms: f64,
    offset_ms: f64,
    easing: Easing,
}

impl ScheduledGroup {
    fn state_at(&self, activated_at: Option<f64>, now: f64) -> VisualState {
        let Some(activated_at) = activated_at else {
            return self.initial;
        };
        let elapsed = now - (activated_at + self.offset_ms);
        if elapsed <= 0.0 {
            return self.initial;
        }
        if elapsed >= self.duration_ms {
            return self.final_state;
        }
        let progress = elapsed / self.duration_ms;
        self.initial
            .lerp(&self.final_state, self.easing.apply(progress))
    }

    fn end_offset(&self) -> f64 {
        self.offset_ms + self.duration_ms
    }
}

#[derive(Clone, Debug)]
struct Sequence {
    mode: ActivationMode,
    groups: Vec<ScheduledGroup>,
    activated_at: Option<f64>,
}

impl Sequence {
    fn end_offset(&self) -> f64 {
        self.groups
            .iter()
            .map(ScheduledGroup::end_offset)
            .fold(0.0, f64::max)
    }
}

/// Registry of sequences owned by one mounted view.
#[derive(Debug, Default)]
pub struct RevealSequencer {
    sequences: HashMap<SequenceHandle, Sequence>,
    next_id: u32,
    default_stagger: Stagger,
}

impl RevealSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequencer whose [`register_sequence`](Self::register_sequence) uses `stagger`.
    pub fn with_stagger(stagger: Stagger) -> Self {
        Self {
            default_stagger: stagger,
            ..Self::default()
        }
    }

    /// Register groups under the sequencer's default stagger.
    pub fn register_sequence(
        &mut self,
        groups: Vec<VisualGroup>,
        mode: ActivationMode,
    ) -> Result<SequenceHandle, ConfigurationError> {
        let stagger = self.default_stagger;
        self.register_sequence_with(groups, mode, stagger)
    }

    /// Register groups with an explicit stagger.
    ///
    /// Fails on an empty list, a group without final state, or a group id
    /// used twice. Nothing is registered when validation fails.
    pub fn register_sequence_with(
        &mut self,
        groups: Vec<VisualGroup>,
        mode: ActivationMode,
        stagger: Stagger,
    ) -> Result<SequenceHandle, ConfigurationError> {
        if groups.is_empty() {
            return Err(ConfigurationError::EmptySequence);
        }

        let mut seen = HashSet::new();
        let mut scheduled = Vec::with_capacity(groups.len());
        for (index, group) in groups.into_iter().enumerate() {
            let final_state = group
                .final_state
                .ok_or_else(|| ConfigurationError::MissingFinalState {
                    group: group.id.clone(),
                })?;
            if !seen.insert(group.id.clone()) {
                return Err(ConfigurationError::DuplicateGroup { group: group.id });
            }

            let slot = group
                .delay_ms
                .unwrap_or(index as f64 * stagger.interval_ms);
            scheduled.push(ScheduledGroup {
                id: group.id,
                initial: group.initial,
                final_state,
                duration_ms: group.duration_ms.max(0.0),
                offset_ms: (stagger.lead_in_ms + slot).max(0.0),
                easing: group.easing,
            });
        }

        let handle = SequenceHandle(self.next_id);
        self.next_id += 1;
        tracing::debug!(
            "Registered sequence {:?} ({:?}, {} groups)",
            handle,
            mode,
            scheduled.len()
        );
        self.sequences.insert(
            handle,
            Sequence {
                mode,
                groups: scheduled,
                activated_at: None,
            },
        );
        Ok(handle)
    }

    /// Start revealing the sequence at `now`.
    ///
    /// Returns `Ok(false)` when the sequence is already active, in which case
    /// nothing changes.
    pub fn activate(
        &mut self,
        handle: SequenceHandle,
        now: f64,
    ) -> Result<bool, ConfigurationError> {
        let sequence = self.get_mut(handle)?;
        if sequence.activated_at.is_some() {
            return Ok(false);
        }
        sequence.activated_at = Some(now);
        tracing::trace!("Activated sequence {:?} at {}", handle, now);
        Ok(true)
    }

    /// Snap every group back to its initial state and make the sequence
    /// activatable again. Returns `Ok(false)` if it was not active.
    pub fn reset(&mut self, handle: SequenceHandle) -> Result<bool, ConfigurationError> {
        let sequence = self.get_mut(handle)?;
        let was_active = sequence.activated_at.take().is_some();
        if was_active {
            tracing::trace!("Reset sequence {:?}", handle);
        }
        Ok(was_active)
    }

    /// Drop a sequence when its view unmounts.
    pub fn release(&mut self, handle: SequenceHandle) -> bool {
        self.sequences.remove(&handle).is_some()
    }

    /// Drop every sequence.
    pub fn clear(&mut self) {
        self.sequences.clear();
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn mode(&self, handle: SequenceHandle) -> Option<ActivationMode> {
        self.sequences.get(&handle).map(|s| s.mode)
    }

    pub fn is_active(&self, handle: SequenceHandle) -> bool {
        self.sequences
            .get(&handle)
            .is_some_and(|s| s.activated_at.is_some())
    }

    pub fn group_count(&self, handle: SequenceHandle) -> usize {
        self.sequences.get(&handle).map_or(0, |s| s.groups.len())
    }

    /// Absolute start time of group `index`, if the sequence is active.
    pub fn start_time(&self, handle: SequenceHandle, index: usize) -> Option<f64> {
        let sequence = self.sequences.get(&handle)?;
        let activated_at = sequence.activated_at?;
        sequence
            .groups
            .get(index)
            .map(|group| activated_at + group.offset_ms)
    }

    /// Interpolated state of group `index` at `now`.
    pub fn sample(&self, handle: SequenceHandle, index: usize, now: f64) -> Option<VisualState> {
        let sequence = self.sequences.get(&handle)?;
        sequence
            .groups
            .get(index)
            .map(|group| group.state_at(sequence.activated_at, now))
    }

    /// Interpolated state of every group at `now`, in registration order.
    pub fn sample_all(&self, handle: SequenceHandle, now: f64) -> Vec<(&str, VisualState)> {
        self.sequences
            .get(&handle)
            .map(|sequence| {
                sequence
                    .groups
                    .iter()
                    .map(|group| (group.id.as_str(), group.state_at(sequence.activated_at, now)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether every group has finished its transition by `now`.
    pub fn is_revealed(&self, handle: SequenceHandle, now: f64) -> bool {
        self.sequences.get(&handle).is_some_and(|sequence| {
            sequence
                .activated_at
                .is_some_and(|at| now >= at + sequence.end_offset())
        })
    }

    /// Whether any active sequence still has a transition pending or running.
    pub fn is_animating(&self, now: f64) -> bool {
        self.sequences.values().any(|sequence| {
            sequence
                .activated_at
                .is_some_and(|at| now < at + sequence.end_offset())
        })
    }

    /// Handles of sequences with the given activation mode.
    pub fn handles_with_mode(&self, mode: ActivationMode) -> Vec<SequenceHandle> {
        let mut handles: Vec<_> = self
            .sequences
            .iter()
            .filter(|(_, sequence)| sequence.mode == mode)
            .map(|(handle, _)| *handle)
            .collect();
        handles.sort();
        handles
    }

    fn get_mut(&mut self, handle: SequenceHandle) -> Result<&mut Sequence, ConfigurationError> {
        self.sequences
            .get_mut(&handle)
            .ok_or(ConfigurationError::UnknownSequence(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rise_groups(count: usize) -> Vec<VisualGroup> {
        (0..count)
            .map(|i| VisualGroup::from_preset(format!("item-{}", i), RevealPreset::Rise))
            .collect()
    }

    #[test]
    fn test_stagger_schedules_each_group() {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence_with(rise_groups(5), ActivationMode::Immediate, Stagger::new(250.0))
            .unwrap();

        sequencer.activate(handle, 10_000.0).unwrap();

        for i in 0..5 {
            assert_eq!(
                sequencer.start_time(handle, i),
                Some(10_000.0 + i as f64 * 250.0)
            );
        }
        assert_eq!(sequencer.start_time(handle, 5), None);
    }

    #[test]
    fn test_lead_in_shifts_whole_sequence() {
        let mut sequencer = RevealSequencer::new();
        let stagger = Stagger::new(300.0).with_lead_in(200.0);
        let handle = sequencer
            .register_sequence_with(rise_groups(3), ActivationMode::Immediate, stagger)
            .unwrap();

        sequencer.activate(handle, 0.0).unwrap();

        assert_eq!(sequencer.start_time(handle, 0), Some(200.0));
        assert_eq!(sequencer.start_time(handle, 2), Some(800.0));
    }

    #[test]
    fn test_explicit_delay_overrides_stagger_slot() {
        let mut sequencer = RevealSequencer::new();
        let groups = vec![
            VisualGroup::from_preset("a", RevealPreset::Rise),
            VisualGroup::from_preset("b", RevealPreset::Rise).with_delay(50.0),
            VisualGroup::from_preset("c", RevealPreset::Rise),
        ];
        let handle = sequencer
            .register_sequence_with(groups, ActivationMode::Immediate, Stagger::new(100.0))
            .unwrap();

        sequencer.activate(handle, 0.0).unwrap();

        assert_eq!(sequencer.start_time(handle, 0), Some(0.0));
        assert_eq!(sequencer.start_time(handle, 1), Some(50.0));
        assert_eq!(sequencer.start_time(handle, 2), Some(200.0));
    }

    #[test]
    fn test_default_stagger_is_used() {
        let mut sequencer = RevealSequencer::with_stagger(Stagger::new(40.0));
        let handle = sequencer
            .register_sequence(rise_groups(2), ActivationMode::OnViewportEntry)
            .unwrap();

        sequencer.activate(handle, 0.0).unwrap();
        assert_eq!(sequencer.start_time(handle, 1), Some(40.0));
        assert_eq!(sequencer.mode(handle), Some(ActivationMode::OnViewportEntry));
    }

    #[test]
    fn test_groups_transition_from_initial_to_final() {
        let mut sequencer = RevealSequencer::new();
        let group = VisualGroup::new("box")
            .with_initial(VisualState::hidden())
            .with_final(VisualState::VISIBLE)
            .with_duration(1000.0)
            .with_easing(Easing::Linear);
        let handle = sequencer
            .register_sequence(vec![group], ActivationMode::Immediate)
            .unwrap();

        // Not yet active
        assert_eq!(sequencer.sample(handle, 0, 500.0), Some(VisualState::hidden()));

        sequencer.activate(handle, 1000.0).unwrap();
        assert_eq!(sequencer.sample(handle, 0, 1000.0), Some(VisualState::hidden()));

        let halfway = sequencer.sample(handle, 0, 1500.0).unwrap();
        assert!((halfway.opacity - 0.5).abs() < 1e-9);

        assert_eq!(sequencer.sample(handle, 0, 2000.0), Some(VisualState::VISIBLE));
        assert_eq!(sequencer.sample(handle, 0, 9000.0), Some(VisualState::VISIBLE));
    }

    #[test]
    fn test_later_groups_wait_for_their_slot() {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence_with(rise_groups(3), ActivationMode::Immediate, Stagger::new(300.0))
            .unwrap();
        sequencer.activate(handle, 0.0).unwrap();

        let states = sequencer.sample_all(handle, 200.0);
        assert_eq!(states.len(), 3);
        assert_eq!(states[0].0, "item-0");
        assert!(states[0].1.opacity > 0.0);
        assert_eq!(states[1].1, RevealPreset::Rise.initial());
        assert_eq!(states[2].1, RevealPreset::Rise.initial());
    }

    #[test]
    fn test_activate_twice_is_noop() {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence(rise_groups(3), ActivationMode::Immediate)
            .unwrap();

        assert!(sequencer.activate(handle, 0.0).unwrap());
        assert!(sequencer.is_revealed(handle, 5_000.0));
        let before = sequencer
            .sample_all(handle, 5_000.0)
            .into_iter()
            .map(|(_, s)| s)
            .collect::<Vec<_>>();

        assert!(!sequencer.activate(handle, 5_000.0).unwrap());

        // Start times are unchanged, so nothing restarts
        assert_eq!(sequencer.start_time(handle, 0), Some(0.0));
        let after = sequencer
            .sample_all(handle, 5_000.0)
            .into_iter()
            .map(|(_, s)| s)
            .collect::<Vec<_>>();
        assert_eq!(before, after);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence(rise_groups(2), ActivationMode::OnViewportEntry)
            .unwrap();

        assert!(!sequencer.reset(handle).unwrap());

        sequencer.activate(handle, 0.0).unwrap();
        assert!(sequencer.reset(handle).unwrap());
        assert!(!sequencer.is_active(handle));

        for (_, state) in sequencer.sample_all(handle, 10_000.0) {
            assert_eq!(state, RevealPreset::Rise.initial());
        }

        // Replayable after a reset
        assert!(sequencer.activate(handle, 20_000.0).unwrap());
        assert_eq!(sequencer.start_time(handle, 0), Some(20_000.0));
    }

    #[test]
    fn test_missing_final_state_is_rejected() {
        let mut sequencer = RevealSequencer::new();
        let groups = vec![
            VisualGroup::from_preset("ok", RevealPreset::Rise),
            VisualGroup::new("broken"),
        ];

        let result = sequencer.register_sequence(groups, ActivationMode::Immediate);
        assert_eq!(
            result,
            Err(ConfigurationError::MissingFinalState {
                group: "broken".to_string()
            })
        );
        assert!(sequencer.is_empty());
    }

    #[test]
    fn test_empty_and_duplicate_groups_are_rejected() {
        let mut sequencer = RevealSequencer::new();
        assert_eq!(
            sequencer.register_sequence(Vec::new(), ActivationMode::Immediate),
            Err(ConfigurationError::EmptySequence)
        );

        let groups = vec![
            VisualGroup::from_preset("same", RevealPreset::Rise),
            VisualGroup::from_preset("same", RevealPreset::Rise),
        ];
        assert_eq!(
            sequencer.register_sequence(groups, ActivationMode::Immediate),
            Err(ConfigurationError::DuplicateGroup {
                group: "same".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_handle_errors() {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence(rise_groups(1), ActivationMode::Immediate)
            .unwrap();
        assert!(sequencer.release(handle));
        assert!(!sequencer.release(handle));

        assert_eq!(
            sequencer.activate(handle, 0.0),
            Err(ConfigurationError::UnknownSequence(handle))
        );
        assert_eq!(sequencer.sample(handle, 0, 0.0), None);
    }

    #[test]
    fn test_is_animating_tracks_in_flight_transitions() {
        let mut sequencer = RevealSequencer::new();
        let a = sequencer
            .register_sequence_with(rise_groups(2), ActivationMode::Immediate, Stagger::new(300.0))
            .unwrap();
        let _idle = sequencer
            .register_sequence(rise_groups(2), ActivationMode::OnViewportEntry)
            .unwrap();

        assert!(!sequencer.is_animating(0.0));

        sequencer.activate(a, 0.0).unwrap();
        // Last group: starts at 300, runs 600
        assert!(sequencer.is_animating(899.0));
        assert!(!sequencer.is_animating(900.0));
        assert!(sequencer.is_revealed(a, 900.0));
    }

    #[test]
    fn test_handles_with_mode() {
        let mut sequencer = RevealSequencer::new();
        let a = sequencer
            .register_sequence(rise_groups(1), ActivationMode::Immediate)
            .unwrap();
        let b = sequencer
            .register_sequence(rise_groups(1), ActivationMode::OnViewportEntry)
            .unwrap();
        let c = sequencer
            .register_sequence(rise_groups(1), ActivationMode::Immediate)
            .unwrap();

        assert_eq!(sequencer.handles_with_mode(ActivationMode::Immediate), vec![a, c]);
        assert_eq!(sequencer.handles_with_mode(ActivationMode::OnViewportEntry), vec![b]);
    }
}
