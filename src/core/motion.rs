//! Visual state descriptors, easing curves and shared reveal presets.
//!
//! The sequencer never looks inside a [`VisualState`]; it only interpolates
//! between two of them. Rendering to an inline style happens in [`VisualState::to_style`].

/// Opaque style descriptor for one animatable unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Horizontal offset in pixels
    pub offset_x: f64,
    /// Vertical offset in pixels
    pub offset_y: f64,
    pub scale: f64,
    /// Rotation in degrees
    pub rotate: f64,
}

impl VisualState {
    /// Fully visible, untransformed.
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(self.opacity, to.opacity),
            offset_x: mix(self.offset_x, to.offset_x),
            offset_y: mix(self.offset_y, to.offset_y),
            scale: mix(self.scale, to.scale),
            rotate: mix(self.rotate, to.rotate),
        }
    }

    /// Inline CSS for this state.
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate({:.2}px, {:.2}px) scale({:.3}) rotate({:.2}deg);",
            self.opacity, self.offset_x, self.offset_y, self.scale, self.rotate
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Easing curves used by the site's transitions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    /// Strong deceleration, `1 - (1 - t)^5`
    Power4Out,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(2),
            Easing::Power4Out => 1.0 - (1.0 - t).powi(5),
        }
    }
}

/// Scroll-scrubbed vertical drift of a background layer across its region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    /// Travel in pixels once the region has left through the viewport top
    pub distance: f64,
}

impl Parallax {
    /// Hero background layer
    pub const HERO: Parallax = Parallax { distance: 150.0 };

    /// Progress through a region spanning `top..bottom` in viewport
    /// coordinates: 0 while its top is at or below the viewport top, 1 once
    /// its bottom has reached it.
    pub fn progress(top: f64, bottom: f64) -> f64 {
        let height = bottom - top;
        if height <= 0.0 {
            return 0.0;
        }
        (-top / height).clamp(0.0, 1.0)
    }

    pub fn offset(&self, top: f64, bottom: f64) -> f64 {
        self.distance * Self::progress(top, bottom)
    }

    pub fn to_style(&self, top: f64, bottom: f64) -> String {
        format!("transform: translateY({:.2}px);", self.offset(top, bottom))
    }
}

/// Reveal styles shared across views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPreset {
    /// Page items: fade in while rising 30px and straightening a -2° tilt
    Rise,
    /// Scroll sections: rise 100px and grow from 90%
    Section,
    /// Footer block: rise 80px and grow from 95%
    Footer,
    /// Form rows: rise 20px
    FormItem,
    /// Mobile menu entries: slide in 20px from the left
    MenuItem,
}

impl RevealPreset {
    pub fn initial(&self) -> VisualState {
        match self {
            RevealPreset::Rise => VisualState::hidden().with_offset(0.0, 30.0).with_rotate(-2.0),
            RevealPreset::Section => VisualState::hidden().with_offset(0.0, 100.0).with_scale(0.9),
            RevealPreset::Footer => VisualState::hidden().with_offset(0.0, 80.0).with_scale(0.95),
            RevealPreset::FormItem => VisualState::hidden().with_offset(0.0, 20.0),
            RevealPreset::MenuItem => VisualState::hidden().with_offset(-20.0, 0.0),
        }
    }

    pub fn final_state(&self) -> VisualState {
        VisualState::VISIBLE
    }

    /// Transition duration in milliseconds
    pub fn duration_ms(&self) -> f64 {
        match self {
            RevealPreset::Rise => 600.0,
            RevealPreset::Section => 1500.0,
            RevealPreset::Footer => 1200.0,
            RevealPreset::FormItem | RevealPreset::MenuItem => 400.0,
        }
    }

    pub fn easing(&self) -> Easing {
        match self {
            RevealPreset::Rise | RevealPreset::FormItem | RevealPreset::MenuItem => Easing::EaseOut,
            RevealPreset::Section | RevealPreset::Footer => Easing::Power4Out,
        }
    }
}
