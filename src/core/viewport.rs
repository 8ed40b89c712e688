//! Viewport triggers: per-region visibility state machines.
//!
//! Regions are fed visibility measurements as the page scrolls. Measurements
//! reported between two rendering frames are coalesced, and
//! [`ViewportTrigger::evaluate_frame`] runs each region's state machine at most
//! once per frame, returning the actions the caller should apply to the
//! reveal sequencer.
//!
//! | From             | Reading                               | To               | Emits      |
//! |------------------|---------------------------------------|------------------|------------|
//! | `BelowThreshold` | fraction >= enter                     | `Active`         | `Activate` |
//! | `Active`         | fraction <= exit, backward (repeatable) | `BelowThreshold` | `Reset`    |
//! | `Active`         | fraction <= exit, forward (repeatable)  | `PastThreshold`  |            |
//! | `PastThreshold`  | fraction > exit                       | `Active`         |            |
//!
//! A non-repeatable region never leaves `Active` once it gets there.

use std::collections::HashMap;

use crate::core::error::ConfigurationError;
use crate::core::sequencer::SequenceHandle;

/// Direction of the last scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Content moving up, reading further down the page
    Forward,
    /// Content moving down, back towards the top
    Backward,
    #[default]
    Still,
}

/// Derives scroll direction from successive scroll offsets.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    last_offset: Option<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, offset: f64) -> ScrollDirection {
        let direction = match self.last_offset {
            Some(last) if offset > last => ScrollDirection::Forward,
            Some(last) if offset < last => ScrollDirection::Backward,
            _ => ScrollDirection::Still,
        };
        self.last_offset = Some(offset);
        direction
    }
}

/// One visibility reading for a region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Portion of the region inside the viewport, in `[0, 1]`. A region
    /// taller than the viewport counts as fully visible once it covers it.
    pub visible_fraction: f64,
    pub direction: ScrollDirection,
}

impl Measurement {
    pub fn new(visible_fraction: f64, direction: ScrollDirection) -> Self {
        Self {
            visible_fraction: visible_fraction.clamp(0.0, 1.0),
            direction,
        }
    }

    /// Visible fraction of a region spanning `top..bottom`, in viewport
    /// coordinates, inside a viewport of `viewport_height`. The visible span
    /// is measured against the smaller of the region and the viewport.
    pub fn from_bounds(
        top: f64,
        bottom: f64,
        viewport_height: f64,
        direction: ScrollDirection,
    ) -> Self {
        let height = bottom - top;
        if height <= 0.0 || viewport_height <= 0.0 {
            return Self::new(0.0, direction);
        }
        let visible = (bottom.min(viewport_height) - top.max(0.0)).max(0.0);
        Self::new(visible / height.min(viewport_height), direction)
    }
}

/// Observation options for one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerOptions {
    pub enter_threshold: f64,
    pub exit_threshold: f64,
    /// Whether the region may reset and fire again after leaving
    pub repeatable: bool,
}

impl TriggerOptions {
    /// Reveal once, when a fifth of the region is visible.
    pub fn once() -> Self {
        Self {
            enter_threshold: 0.2,
            exit_threshold: 0.0,
            repeatable: false,
        }
    }

    /// Reveal when a tenth is visible, reset when scrolled back out of view.
    pub fn replay() -> Self {
        Self {
            enter_threshold: 0.1,
            exit_threshold: 0.0,
            repeatable: true,
        }
    }

    pub fn with_enter(mut self, threshold: f64) -> Self {
        self.enter_threshold = threshold;
        self
    }

    pub fn with_exit(mut self, threshold: f64) -> Self {
        self.exit_threshold = threshold;
        self
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if in_range(self.enter_threshold)
            && in_range(self.exit_threshold)
            && self.exit_threshold < self.enter_threshold
        {
            Ok(())
        } else {
            Err(ConfigurationError::InvalidThresholds {
                enter: self.enter_threshold,
                exit: self.exit_threshold,
            })
        }
    }
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self::once()
    }
}

/// Per-region state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    BelowThreshold,
    Active,
    /// Scrolled beyond the region after it was revealed
    PastThreshold,
}

/// What a state transition asks of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    Activate(SequenceHandle),
    Reset(SequenceHandle),
}

/// Action produced for a specific region during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    pub region: TriggerHandle,
    pub action: TriggerAction,
}

/// Handle to an observed region; pass it to [`ViewportTrigger::dispose`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerHandle(u32);

#[derive(Debug)]
struct Region {
    target: SequenceHandle,
    options: TriggerOptions,
    state: TriggerState,
    pending: Option<Measurement>,
}

impl Region {
    fn step(&mut self, measurement: Measurement) -> Option<TriggerAction> {
        let fraction = measurement.visible_fraction;
        let options = self.options;
        match self.state {
            TriggerState::BelowThreshold if fraction >= options.enter_threshold => {
                self.state = TriggerState::Active;
                Some(TriggerAction::Activate(self.target))
            }
            TriggerState::Active if options.repeatable && fraction <= options.exit_threshold => {
                match measurement.direction {
                    ScrollDirection::Backward => {
                        self.state = TriggerState::BelowThreshold;
                        Some(TriggerAction::Reset(self.target))
                    }
                    ScrollDirection::Forward => {
                        self.state = TriggerState::PastThreshold;
                        None
                    }
                    ScrollDirection::Still => None,
                }
            }
            TriggerState::PastThreshold if fraction > options.exit_threshold => {
                self.state = TriggerState::Active;
                None
            }
            _ => None,
        }
    }
}

/// Registry of observed regions owned by one mounted view.
#[derive(Debug, Default)]
pub struct ViewportTrigger {
    regions: HashMap<TriggerHandle, Region>,
    next_id: u32,
}

impl ViewportTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing a region whose entry activates `target`.
    pub fn observe(
        &mut self,
        target: SequenceHandle,
        options: TriggerOptions,
    ) -> Result<TriggerHandle, ConfigurationError> {
        options.validate()?;
        let handle = TriggerHandle(self.next_id);
        self.next_id += 1;
        self.regions.insert(
            handle,
            Region {
                target,
                options,
                state: TriggerState::BelowThreshold,
                pending: None,
            },
        );
        Ok(handle)
    }

    /// Stop observing. Pending measurements are discarded and no further
    /// events are produced for this region.
    pub fn dispose(&mut self, handle: TriggerHandle) -> bool {
        self.regions.remove(&handle).is_some()
    }

    /// Queue a measurement for the next frame. Later reports within the same
    /// frame replace earlier ones. Returns `false` for a disposed region.
    pub fn report(&mut self, handle: TriggerHandle, measurement: Measurement) -> bool {
        match self.regions.get_mut(&handle) {
            Some(region) => {
                region.pending = Some(measurement);
                true
            }
            None => false,
        }
    }

    /// Whether any region has a measurement waiting for evaluation.
    pub fn has_pending(&self) -> bool {
        self.regions.values().any(|r| r.pending.is_some())
    }

    /// Run every region with a pending measurement through its state machine.
    /// Events are ordered by region handle.
    pub fn evaluate_frame(&mut self) -> Vec<TriggerEvent> {
        let mut events: Vec<TriggerEvent> = self
            .regions
            .iter_mut()
            .filter_map(|(handle, region)| {
                let measurement = region.pending.take()?;
                region.step(measurement).map(|action| TriggerEvent {
                    region: *handle,
                    action,
                })
            })
            .collect();
        events.sort_by_key(|event| event.region);
        events
    }

    pub fn state(&self, handle: TriggerHandle) -> Option<TriggerState> {
        self.regions.get(&handle).map(|r| r.state)
    }

    pub fn handles(&self) -> Vec<TriggerHandle> {
        let mut handles: Vec<_> = self.regions.keys().copied().collect();
        handles.sort();
        handles
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::RevealPreset;
    use crate::core::sequencer::{ActivationMode, RevealSequencer, VisualGroup};

    fn target() -> (RevealSequencer, SequenceHandle) {
        let mut sequencer = RevealSequencer::new();
        let handle = sequencer
            .register_sequence(
                vec![
                    VisualGroup::from_preset("a", RevealPreset::Section),
                    VisualGroup::from_preset("b", RevealPreset::Section),
                ],
                ActivationMode::OnViewportEntry,
            )
            .unwrap();
        (sequencer, handle)
    }

    fn feed(
        trigger: &mut ViewportTrigger,
        handle: TriggerHandle,
        fraction: f64,
        dir: ScrollDirection,
    ) -> Vec<TriggerEvent> {
        trigger.report(handle, Measurement::new(fraction, dir));
        trigger.evaluate_frame()
    }

    #[test]
    fn test_scroll_tracker_direction() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(0.0), ScrollDirection::Still);
        assert_eq!(tracker.observe(120.0), ScrollDirection::Forward);
        assert_eq!(tracker.observe(120.0), ScrollDirection::Still);
        assert_eq!(tracker.observe(40.0), ScrollDirection::Backward);
    }

    #[test]
    fn test_measurement_from_bounds() {
        let fraction = |top, bottom| {
            Measurement::from_bounds(top, bottom, 800.0, ScrollDirection::Still).visible_fraction
        };
        // Entirely below an 800px viewport
        assert_eq!(fraction(900.0, 1100.0), 0.0);
        // Half visible at the bottom edge
        assert_eq!(fraction(700.0, 900.0), 0.5);
        // Fully inside
        assert_eq!(fraction(100.0, 300.0), 1.0);
        // Taller than the viewport, covering it
        assert_eq!(fraction(-400.0, 1200.0), 1.0);
        // Taller than the viewport, top half of the viewport filled
        assert_eq!(fraction(400.0, 4400.0), 0.5);
        // Above the viewport
        assert_eq!(fraction(-300.0, -100.0), 0.0);
        // Degenerate region
        assert_eq!(fraction(10.0, 10.0), 0.0);
    }

    #[test]
    fn test_tall_region_reveals_while_scrolling_through() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::once()).unwrap();

        // 2500px region scrolled through a 400px viewport in 10px steps
        let (height, viewport) = (2500.0, 400.0);
        let forward = ScrollDirection::Forward;
        let mut activated = false;
        let mut top = viewport;
        while top > -height {
            let reading = Measurement::from_bounds(top, top + height, viewport, forward);
            trigger.report(region, reading);
            let events = trigger.evaluate_frame();
            if events.iter().any(|e| e.action == TriggerAction::Activate(seq)) {
                activated = true;
                // A fifth of the viewport filled is enough
                assert!(top <= viewport * 0.8);
                break;
            }
            top -= 10.0;
        }
        assert!(activated);
        assert_eq!(trigger.state(region), Some(TriggerState::Active));
    }

    #[test]
    fn test_invalid_thresholds_rejected() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();

        let inverted = TriggerOptions::once().with_enter(0.1).with_exit(0.5);
        assert!(matches!(
            trigger.observe(seq, inverted),
            Err(ConfigurationError::InvalidThresholds { .. })
        ));

        let out_of_range = TriggerOptions::once().with_enter(1.5);
        assert!(trigger.observe(seq, out_of_range).is_err());
        assert!(trigger.is_empty());
    }

    #[test]
    fn test_enter_fires_activate_once_crossed() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::once()).unwrap();

        assert!(feed(&mut trigger, region, 0.1, ScrollDirection::Forward).is_empty());
        assert_eq!(trigger.state(region), Some(TriggerState::BelowThreshold));

        let events = feed(&mut trigger, region, 0.25, ScrollDirection::Forward);
        assert_eq!(
            events,
            vec![TriggerEvent {
                region,
                action: TriggerAction::Activate(seq)
            }]
        );
        assert_eq!(trigger.state(region), Some(TriggerState::Active));
    }

    #[test]
    fn test_non_repeatable_region_stays_active() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::once()).unwrap();

        feed(&mut trigger, region, 1.0, ScrollDirection::Forward);

        let script = [
            (0.0, ScrollDirection::Forward),
            (0.5, ScrollDirection::Backward),
            (0.0, ScrollDirection::Backward),
            (1.0, ScrollDirection::Forward),
            (0.0, ScrollDirection::Still),
            (0.3, ScrollDirection::Backward),
        ];
        for (fraction, dir) in script {
            assert!(feed(&mut trigger, region, fraction, dir).is_empty());
            assert_eq!(trigger.state(region), Some(TriggerState::Active));
        }
    }

    #[test]
    fn test_repeatable_region_resets_sequence_when_scrolled_out() {
        let (mut sequencer, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::replay()).unwrap();

        let apply = |events: Vec<TriggerEvent>, sequencer: &mut RevealSequencer, now: f64| {
            for event in events {
                match event.action {
                    TriggerAction::Activate(h) => {
                        sequencer.activate(h, now).unwrap();
                    }
                    TriggerAction::Reset(h) => {
                        sequencer.reset(h).unwrap();
                    }
                }
            }
        };

        let events = feed(&mut trigger, region, 0.6, ScrollDirection::Forward);
        apply(events, &mut sequencer, 0.0);
        assert!(sequencer.is_revealed(seq, 10_000.0));

        let events = feed(&mut trigger, region, 0.0, ScrollDirection::Backward);
        assert_eq!(events[0].action, TriggerAction::Reset(seq));
        apply(events, &mut sequencer, 10_000.0);

        assert_eq!(trigger.state(region), Some(TriggerState::BelowThreshold));
        for (_, state) in sequencer.sample_all(seq, 10_000.0) {
            assert_eq!(state, RevealPreset::Section.initial());
        }

        // And it replays on the next entry
        let events = feed(&mut trigger, region, 0.5, ScrollDirection::Forward);
        assert_eq!(events[0].action, TriggerAction::Activate(seq));
    }

    #[test]
    fn test_repeatable_region_passes_through_top_without_reset() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::replay()).unwrap();

        feed(&mut trigger, region, 1.0, ScrollDirection::Forward);

        assert!(feed(&mut trigger, region, 0.0, ScrollDirection::Forward).is_empty());
        assert_eq!(trigger.state(region), Some(TriggerState::PastThreshold));

        // Scrolling back into it does not replay the reveal
        assert!(feed(&mut trigger, region, 0.4, ScrollDirection::Backward).is_empty());
        assert_eq!(trigger.state(region), Some(TriggerState::Active));
    }

    #[test]
    fn test_measurements_coalesce_per_frame() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::once()).unwrap();

        // Crosses then drops back before the frame: only the last reading counts
        trigger.report(region, Measurement::new(0.9, ScrollDirection::Forward));
        trigger.report(region, Measurement::new(0.05, ScrollDirection::Backward));
        assert!(trigger.has_pending());

        assert!(trigger.evaluate_frame().is_empty());
        assert!(!trigger.has_pending());
        assert_eq!(trigger.state(region), Some(TriggerState::BelowThreshold));

        // No new readings, nothing to evaluate
        assert!(trigger.evaluate_frame().is_empty());
    }

    #[test]
    fn test_disposed_region_produces_no_events() {
        let (_, seq) = target();
        let mut trigger = ViewportTrigger::new();
        let region = trigger.observe(seq, TriggerOptions::replay()).unwrap();
        let other = trigger.observe(seq, TriggerOptions::replay()).unwrap();

        trigger.report(region, Measurement::new(1.0, ScrollDirection::Forward));
        assert!(trigger.dispose(region));
        assert!(!trigger.dispose(region));

        assert!(!trigger.report(region, Measurement::new(1.0, ScrollDirection::Forward)));
        assert!(trigger.evaluate_frame().is_empty());
        assert_eq!(trigger.state(region), None);
        assert_eq!(trigger.handles(), vec![other]);
    }
}
