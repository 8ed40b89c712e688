//! Framework-free core: routing, reveal sequencing, viewport triggers,
//! form handling and the static site content.

pub mod accordion;
pub mod catalog;
#[cfg(feature = "ssr")]
pub mod config;
pub mod error;
pub mod forms;
pub mod motion;
pub mod route;
pub mod sequencer;
pub mod viewport;

pub use accordion::Accordion;
pub use catalog::CardVariant;
pub use error::{ConfigurationError, RouteNotFound, ValidationError};
pub use forms::{FormFields, FormKind, LoggingSink, Notifier, SubmitSink};
pub use motion::{Easing, RevealPreset, VisualState};
pub use route::{Route, RouteTable, ViewId};
pub use sequencer::{ActivationMode, RevealSequencer, SequenceHandle, Stagger, VisualGroup};
pub use viewport::{
    Measurement, ScrollDirection, ScrollTracker, TriggerAction, TriggerEvent, TriggerHandle,
    TriggerOptions, TriggerState, ViewportTrigger,
};
