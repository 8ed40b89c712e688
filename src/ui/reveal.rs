//! Scroll-linked and on-mount reveal animations.
//!
//! Every mounted view owns one [`RevealScope`], provided through context by
//! [`RevealBoundary`]. Inside it, a [`RevealSection`] collects the
//! [`RevealItem`]s rendered among its children into one staggered sequence and
//! registers it with the scope when the section is built.
//!
//! On the client the scope runs a frame loop: scroll and resize events mark
//! the layout dirty and request one animation frame; the frame measures every
//! watched section, feeds the measurements to the viewport trigger, applies
//! the resulting activations and resets, then advances the scope clock. A new
//! frame is requested only while some transition is still running.
//!
//! On the server nothing is ever activated, so every item renders its initial
//! state and hydration sees the same markup.

use leptos::context::Provider;
use leptos::prelude::*;

use crate::core::error::ConfigurationError;
use crate::core::motion::{RevealPreset, VisualState};
use crate::core::sequencer::{
    ActivationMode, RevealSequencer, SequenceHandle, Stagger, VisualGroup,
};
use crate::core::viewport::{
    Measurement, ScrollDirection, ScrollTracker, TriggerAction, TriggerHandle, TriggerOptions,
    ViewportTrigger,
};

/// Handles created for one registered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registration {
    pub sequence: SequenceHandle,
    /// Present for sequences activated on viewport entry
    pub region: Option<TriggerHandle>,
}

/// Sequencer and viewport trigger of one scope, glued together.
#[derive(Debug, Default)]
pub struct RevealRuntime {
    sequencer: RevealSequencer,
    trigger: ViewportTrigger,
    tracker: ScrollTracker,
    direction: ScrollDirection,
}

impl RevealRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sequence, and a viewport region for it when it waits for
    /// viewport entry. Nothing stays registered if either step fails.
    pub fn register(
        &mut self,
        groups: Vec<VisualGroup>,
        mode: ActivationMode,
        stagger: Stagger,
        options: TriggerOptions,
    ) -> Result<Registration, ConfigurationError> {
        let sequence = self.sequencer.register_sequence_with(groups, mode, stagger)?;
        let region = match mode {
            ActivationMode::Immediate => None,
            ActivationMode::OnViewportEntry => match self.trigger.observe(sequence, options) {
                Ok(region) => Some(region),
                Err(err) => {
                    self.sequencer.release(sequence);
                    return Err(err);
                }
            },
        };
        Ok(Registration { sequence, region })
    }

    /// Start an on-mount sequence. Returns `false` if it was already running.
    pub fn activate(&mut self, sequence: SequenceHandle, now: f64) -> bool {
        match self.sequencer.activate(sequence, now) {
            Ok(started) => started,
            Err(err) => {
                leptos::logging::warn!("Cannot activate reveal sequence: {}", err);
                false
            }
        }
    }

    /// Record a new scroll offset; later measurements carry its direction.
    pub fn scrolled(&mut self, offset: f64) -> ScrollDirection {
        self.direction = self.tracker.observe(offset);
        self.direction
    }

    /// Queue the bounds of a watched region for the next frame.
    pub fn measure(
        &mut self,
        region: TriggerHandle,
        top: f64,
        bottom: f64,
        viewport_height: f64,
    ) -> bool {
        let measurement = Measurement::from_bounds(top, bottom, viewport_height, self.direction);
        self.trigger.report(region, measurement)
    }

    /// Evaluate queued measurements and apply their actions at `now`.
    /// Returns whether another frame is needed.
    pub fn frame(&mut self, now: f64) -> bool {
        for event in self.trigger.evaluate_frame() {
            let applied = match event.action {
                TriggerAction::Activate(sequence) => self.sequencer.activate(sequence, now),
                TriggerAction::Reset(sequence) => self.sequencer.reset(sequence),
            };
            if let Err(err) = applied {
                leptos::logging::warn!("Dropping trigger event for {:?}: {}", event.region, err);
            }
        }
        self.sequencer.is_animating(now)
    }

    pub fn sample(&self, sequence: SequenceHandle, index: usize, now: f64) -> Option<VisualState> {
        self.sequencer.sample(sequence, index, now)
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.sequencer.is_animating(now)
    }

    pub fn release(&mut self, registration: Registration) {
        self.sequencer.release(registration.sequence);
        if let Some(region) = registration.region {
            self.trigger.dispose(region);
        }
    }

    /// Drop every sequence and region.
    pub fn clear(&mut self) {
        self.sequencer.clear();
        for region in self.trigger.handles() {
            self.trigger.dispose(region);
        }
    }

    pub fn sequence_count(&self) -> usize {
        self.sequencer.len()
    }

    pub fn region_count(&self) -> usize {
        self.trigger.len()
    }
}

#[cfg(not(feature = "ssr"))]
#[derive(Default)]
struct FrameState {
    regions: Vec<(TriggerHandle, web_sys::Element)>,
    pending: bool,
    dirty: bool,
}

/// Reveal state of one mounted view.
#[derive(Clone, Copy)]
pub struct RevealScope {
    runtime: StoredValue<RevealRuntime>,
    /// Time of the last evaluated frame, in ms
    clock: RwSignal<f64>,
    /// Window scroll offset as of the last frame with a layout change
    scroll: RwSignal<f64>,
    #[cfg(not(feature = "ssr"))]
    frame: StoredValue<FrameState, LocalStorage>,
}

impl RevealScope {
    /// Create a scope owned by the current reactive owner. On the client
    /// this also starts listening to scroll and resize; everything is
    /// released when the owner is cleaned up.
    pub fn new() -> Self {
        let scope = Self {
            runtime: StoredValue::new(RevealRuntime::new()),
            clock: RwSignal::new(0.0),
            scroll: RwSignal::new(0.0),
            #[cfg(not(feature = "ssr"))]
            frame: StoredValue::new_local(FrameState::default()),
        };

        #[cfg(not(feature = "ssr"))]
        {
            let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
                let offset = window().scroll_y().unwrap_or_default();
                scope.runtime.try_update_value(|rt| rt.scrolled(offset));
                scope.invalidate();
            });
            let on_resize = window_event_listener(leptos::ev::resize, move |_| {
                scope.invalidate();
            });
            on_cleanup(move || {
                drop(on_scroll);
                drop(on_resize);
                scope.runtime.try_update_value(|rt| rt.clear());
            });
        }

        #[cfg(feature = "ssr")]
        {
            on_cleanup(move || {
                scope.runtime.try_update_value(|rt| rt.clear());
            });
        }

        scope
    }

    /// Register a section's groups. Errors are logged and yield `None`; the
    /// caller then renders the groups in their final state.
    pub fn register(
        &self,
        groups: Vec<VisualGroup>,
        mode: ActivationMode,
        stagger: Stagger,
        options: TriggerOptions,
    ) -> Option<Registration> {
        match self
            .runtime
            .try_update_value(|rt| rt.register(groups, mode, stagger, options))?
        {
            Ok(registration) => Some(registration),
            Err(err) => {
                leptos::logging::warn!("Reveal sequence not registered: {}", err);
                None
            }
        }
    }

    /// Forget a section that unmounted before its view.
    pub fn release(&self, registration: Registration) {
        self.runtime.try_update_value(|rt| rt.release(registration));
        #[cfg(not(feature = "ssr"))]
        {
            self.frame.try_update_value(|frame| {
                frame
                    .regions
                    .retain(|(region, _)| Some(*region) != registration.region)
            });
        }
    }

    /// Inline style of group `index` at the current clock.
    pub fn style(&self, sequence: SequenceHandle, index: usize) -> String {
        let now = self.clock.get();
        self.runtime
            .try_with_value(|rt| rt.sample(sequence, index, now))
            .flatten()
            .unwrap_or(VisualState::VISIBLE)
            .to_style()
    }

    /// Subscribe the caller to scroll frames, for scrubbed effects that
    /// measure their own layout.
    pub fn track_scroll(&self) {
        self.scroll.track();
    }

    /// Start an on-mount sequence now.
    pub fn activate(&self, sequence: SequenceHandle) {
        #[cfg(not(feature = "ssr"))]
        {
            let now = js_sys::Date::now();
            let started = self
                .runtime
                .try_update_value(|rt| rt.activate(sequence, now))
                .unwrap_or(false);
            if started {
                self.schedule_frame();
            }
        }
        #[cfg(feature = "ssr")]
        let _ = sequence;
    }

    /// Measure `element` for `region` on every layout change.
    #[cfg(not(feature = "ssr"))]
    pub fn watch(&self, region: TriggerHandle, element: web_sys::Element) {
        self.frame
            .try_update_value(|frame| frame.regions.push((region, element)));
        self.invalidate();
    }

    #[cfg(not(feature = "ssr"))]
    fn invalidate(&self) {
        self.frame.try_update_value(|frame| frame.dirty = true);
        self.schedule_frame();
    }

    #[cfg(not(feature = "ssr"))]
    fn schedule_frame(&self) {
        let already_pending = self
            .frame
            .try_update_value(|frame| std::mem::replace(&mut frame.pending, true))
            .unwrap_or(true);
        if !already_pending {
            let scope = *self;
            request_animation_frame(move || scope.run_frame());
        }
    }

    #[cfg(not(feature = "ssr"))]
    fn run_frame(&self) {
        let Some(dirty) = self.frame.try_update_value(|frame| {
            frame.pending = false;
            std::mem::take(&mut frame.dirty)
        }) else {
            // Scope was disposed while the frame was queued
            return;
        };

        if dirty {
            let viewport_height = window()
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or_default();
            self.scroll.set(window().scroll_y().unwrap_or_default());
            self.frame.with_value(|frame| {
                for (region, element) in &frame.regions {
                    let rect = element.get_bounding_client_rect();
                    self.runtime.update_value(|rt| {
                        rt.measure(*region, rect.top(), rect.bottom(), viewport_height);
                    });
                }
            });
        }

        let now = js_sys::Date::now();
        let animating = self
            .runtime
            .try_update_value(|rt| rt.frame(now))
            .unwrap_or(false);
        self.clock.set(now);
        if animating {
            self.schedule_frame();
        }
    }
}

impl Default for RevealScope {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_reveal_scope() -> Option<RevealScope> {
    use_context::<RevealScope>()
}

/// Gives its children a fresh [`RevealScope`].
#[component]
pub fn RevealBoundary(children: Children) -> impl IntoView {
    let scope = RevealScope::new();
    view! { <Provider value=scope>{children()}</Provider> }
}

/// Collects the items of one section while its children are built.
#[derive(Clone, Copy)]
struct SectionBuilder {
    groups: StoredValue<Vec<VisualGroup>>,
    sequence: RwSignal<Option<SequenceHandle>>,
}

impl SectionBuilder {
    fn new() -> Self {
        Self {
            groups: StoredValue::new(Vec::new()),
            sequence: RwSignal::new(None),
        }
    }

    fn push(&self, preset: RevealPreset, delay_ms: Option<f64>) -> usize {
        self.groups
            .try_update_value(|groups| {
                let index = groups.len();
                let mut group = VisualGroup::from_preset(format!("item-{}", index), preset);
                if let Some(delay) = delay_ms {
                    group = group.with_delay(delay);
                }
                groups.push(group);
                index
            })
            .unwrap_or_default()
    }

    fn take(&self) -> Vec<VisualGroup> {
        self.groups
            .try_update_value(std::mem::take)
            .unwrap_or_default()
    }
}

/// A `<section>` whose [`RevealItem`]s reveal as one staggered sequence.
///
/// With `preset` set, the section element itself also reveals, replaying
/// each time it re-enters the viewport.
#[component]
pub fn RevealSection(
    /// When the items start revealing
    #[prop(default = ActivationMode::OnViewportEntry)]
    mode: ActivationMode,
    /// Thresholds for the items' viewport trigger
    #[prop(default = TriggerOptions::once())]
    options: TriggerOptions,
    #[prop(default = Stagger::default())] stagger: Stagger,
    /// Reveal of the section element itself
    #[prop(optional)]
    preset: Option<RevealPreset>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let scope = use_reveal_scope();
    let builder = SectionBuilder::new();
    let node_ref = NodeRef::<leptos::html::Section>::new();

    // Items register themselves while the children are built
    let content = view! { <Provider value=builder>{children()}</Provider> };

    let groups = builder.take();
    let items = match (scope, groups.is_empty()) {
        (Some(scope), false) => scope.register(groups, mode, stagger, options),
        _ => None,
    };
    builder.sequence.set(items.map(|r| r.sequence));

    let frame = match (scope, preset) {
        (Some(scope), Some(preset)) => scope.register(
            vec![VisualGroup::from_preset("section", preset)],
            ActivationMode::OnViewportEntry,
            Stagger::default(),
            TriggerOptions::replay(),
        ),
        _ => None,
    };

    if let Some(scope) = scope {
        on_cleanup(move || {
            for registration in [items, frame].into_iter().flatten() {
                scope.release(registration);
            }
        });
    }

    #[cfg(not(feature = "ssr"))]
    {
        if let Some(scope) = scope {
            Effect::new(move |_| {
                let Some(element) = node_ref.get() else {
                    return;
                };
                for registration in [items, frame].into_iter().flatten() {
                    match registration.region {
                        Some(region) => scope.watch(region, element.clone().into()),
                        None => scope.activate(registration.sequence),
                    }
                }
            });
        }
    }

    let style = move || match (scope, frame) {
        (Some(scope), Some(frame)) => scope.style(frame.sequence, 0),
        _ => String::new(),
    };

    view! {
        <section node_ref=node_ref id=id class=class style=style>
            {content}
        </section>
    }
}

/// One staggered unit inside a [`RevealSection`].
///
/// Outside any section it renders fully visible.
#[component]
pub fn RevealItem(
    #[prop(default = RevealPreset::Rise)] preset: RevealPreset,
    /// Fixed start offset instead of the stagger slot
    #[prop(optional)]
    delay_ms: Option<f64>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let scope = use_reveal_scope();
    let builder = use_context::<SectionBuilder>();
    let index = builder.map(|b| b.push(preset, delay_ms));

    let style = move || match (scope, builder.and_then(|b| b.sequence.get()), index) {
        (Some(scope), Some(sequence), Some(index)) => scope.style(sequence, index),
        _ => VisualState::VISIBLE.to_style(),
    };

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(count: usize) -> Vec<VisualGroup> {
        (0..count)
            .map(|i| VisualGroup::from_preset(format!("item-{}", i), RevealPreset::Rise))
            .collect()
    }

    #[test]
    fn test_viewport_entry_drives_the_sequence() {
        let mut rt = RevealRuntime::new();
        let reg = rt
            .register(
                items(3),
                ActivationMode::OnViewportEntry,
                Stagger::new(300.0),
                TriggerOptions::once(),
            )
            .unwrap();
        let region = reg.region.unwrap();

        // Below the fold: nothing starts
        assert!(rt.measure(region, 900.0, 1300.0, 800.0));
        assert!(!rt.frame(0.0));
        assert_eq!(rt.sample(reg.sequence, 0, 0.0), Some(RevealPreset::Rise.initial()));

        rt.scrolled(400.0);
        rt.measure(region, 500.0, 900.0, 800.0);
        assert!(rt.frame(1_000.0));

        // Second item is still waiting for its stagger slot
        assert_eq!(rt.sample(reg.sequence, 1, 1_200.0), Some(RevealPreset::Rise.initial()));
        assert_eq!(rt.sample(reg.sequence, 2, 5_000.0), Some(VisualState::VISIBLE));
        assert!(!rt.is_animating(5_000.0));
    }

    #[test]
    fn test_section_taller_than_viewport_reveals() {
        let mut rt = RevealRuntime::new();
        let reg = rt
            .register(
                items(5),
                ActivationMode::OnViewportEntry,
                Stagger::new(300.0),
                TriggerOptions::once(),
            )
            .unwrap();
        let region = reg.region.unwrap();

        // 2500px section coming up through a 400px viewport, 10px per frame
        let mut offset = 0.0;
        let mut revealed_at = None;
        while offset <= 2900.0 {
            rt.scrolled(offset);
            let top = 400.0 - offset;
            rt.measure(region, top, top + 2500.0, 400.0);
            let now = offset;
            rt.frame(now);
            if rt.sample(reg.sequence, 0, now + 10_000.0) == Some(VisualState::VISIBLE) {
                revealed_at = Some(offset);
                break;
            }
            offset += 10.0;
        }

        // A fifth of the viewport covered is enough
        assert_eq!(revealed_at, Some(80.0));
    }

    #[test]
    fn test_replay_region_resets_when_scrolled_back_out() {
        let mut rt = RevealRuntime::new();
        let reg = rt
            .register(
                vec![VisualGroup::from_preset("section", RevealPreset::Section)],
                ActivationMode::OnViewportEntry,
                Stagger::default(),
                TriggerOptions::replay(),
            )
            .unwrap();
        let region = reg.region.unwrap();

        rt.scrolled(100.0);
        rt.measure(region, 300.0, 700.0, 800.0);
        rt.frame(0.0);
        assert_eq!(rt.sample(reg.sequence, 0, 10_000.0), Some(VisualState::VISIBLE));

        rt.scrolled(0.0);
        assert_eq!(rt.scrolled(-50.0), ScrollDirection::Backward);
        rt.measure(region, 850.0, 1250.0, 800.0);
        assert!(!rt.frame(10_000.0));
        assert_eq!(
            rt.sample(reg.sequence, 0, 10_000.0),
            Some(RevealPreset::Section.initial())
        );
    }

    #[test]
    fn test_immediate_sequences_have_no_region() {
        let mut rt = RevealRuntime::new();
        let reg = rt
            .register(
                items(2),
                ActivationMode::Immediate,
                Stagger::default(),
                TriggerOptions::once(),
            )
            .unwrap();

        assert_eq!(reg.region, None);
        assert_eq!(rt.region_count(), 0);
        assert!(rt.activate(reg.sequence, 50.0));
        assert!(!rt.activate(reg.sequence, 60.0));
        assert!(rt.is_animating(60.0));
    }

    #[test]
    fn test_failed_registration_leaves_nothing_behind() {
        let mut rt = RevealRuntime::new();
        let bad = TriggerOptions::once().with_exit(0.5).with_enter(0.2);

        let entry = ActivationMode::OnViewportEntry;
        let result = rt.register(items(1), entry, Stagger::default(), bad);

        assert!(matches!(result, Err(ConfigurationError::InvalidThresholds { .. })));
        assert_eq!(rt.sequence_count(), 0);
        assert_eq!(rt.region_count(), 0);
        assert!(rt.register(vec![], ActivationMode::Immediate, Stagger::default(), bad).is_err());
    }

    #[test]
    fn test_release_and_clear() {
        let mut rt = RevealRuntime::new();
        let first = rt
            .register(
                items(1),
                ActivationMode::OnViewportEntry,
                Stagger::default(),
                TriggerOptions::once(),
            )
            .unwrap();
        rt.register(
            items(2),
            ActivationMode::Immediate,
            Stagger::default(),
            TriggerOptions::once(),
        )
        .unwrap();

        rt.release(first);
        assert_eq!(rt.sequence_count(), 1);
        assert_eq!(rt.region_count(), 0);
        assert!(!rt.measure(first.region.unwrap(), 0.0, 100.0, 800.0));

        rt.clear();
        assert_eq!(rt.sequence_count(), 0);
    }
}

#[cfg(all(test, feature = "ssr"))]
mod render_tests {
    use leptos::tachys::view::RenderHtml;

    use super::*;

    #[component]
    fn CaptureScope(sink: StoredValue<Option<RevealScope>>) -> impl IntoView {
        sink.set_value(use_reveal_scope());
    }

    #[test]
    fn test_section_registers_its_items_in_order() {
        let owner = Owner::new();
        owner.with(|| {
            let captured = StoredValue::new(None);
            let html = view! {
                <RevealBoundary>
                    <CaptureScope sink=captured />
                    <RevealSection>
                        <RevealItem>"first"</RevealItem>
                        <RevealItem preset=RevealPreset::FormItem>"second"</RevealItem>
                        <div>
                            <RevealItem preset=RevealPreset::MenuItem>"third"</RevealItem>
                        </div>
                    </RevealSection>
                </RevealBoundary>
            }
            .to_html();

            let scope = captured.get_value().expect("boundary provides a scope");
            scope.runtime.with_value(|rt| {
                assert_eq!(rt.sequence_count(), 1);
                assert_eq!(rt.region_count(), 1);
                let sequences = rt.sequencer.handles_with_mode(ActivationMode::OnViewportEntry);
                assert_eq!(sequences.len(), 1);
                assert_eq!(rt.sequencer.group_count(sequences[0]), 3);
            });

            // Nothing activates on the server: each item carries its preset's
            // initial style, in document order
            let presets = [RevealPreset::Rise, RevealPreset::FormItem, RevealPreset::MenuItem];
            let mut cursor = 0;
            for (preset, text) in presets.iter().zip(["first", "second", "third"]) {
                let style = preset.initial().to_style();
                let at = cursor + html[cursor..].find(&style).expect("initial style rendered");
                let end = at + html[at..].find(text).expect("item content rendered");
                assert!(!html[at..end].contains("opacity: 1.000"));
                cursor = end;
            }
        });
    }

    #[test]
    fn test_item_outside_a_section_renders_visible() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <RevealBoundary>
                    <RevealItem>"loose"</RevealItem>
                </RevealBoundary>
            }
            .to_html();
            assert!(html.contains(&VisualState::VISIBLE.to_style()));
        });
    }
}
