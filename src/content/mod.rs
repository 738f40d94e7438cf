// Static content shown by the three panels.
// Every dataset here is a compile-time constant shared read-only by the UI.

pub mod architecture;
pub mod flow;
pub mod modules;

use serde::Serialize;

pub use architecture::{ArchitectureLayer, EVENTS_FLOW, EventsFlow, LAYERS, LayerBox};
pub use flow::{
    BUYER_JOURNEY, CANCEL_PATH, CancelPath, FLOW_STEPS, FlowStep, Journey, SELLER_JOURNEY,
};
pub use modules::{
    INTERACTION_NOTE, INTERACTION_TIERS, InteractionBox, MODULES, ModuleDescriptor,
};

/// Header shown above the tab bar.
pub const TITLE: &str = "Complete Trade Flow & Architecture";

/// Subtitle shown under the header.
pub const SUBTITLE: &str = "Understand how our decentralized marketplace ensures secure, \
transparent transactions using blockchain technology";

/// Symbolic color of a content item. The UI decides the actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Neutral,
}

/// Symbolic icon reference. The UI maps each to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Lock,
    Package,
    CheckCircle,
    User,
    Store,
    ShieldCheck,
    TrendingUp,
    Database,
    Layers,
    Code,
    Wallet,
    FileText,
}

/// Everything the panels render, for `--dump`.
#[derive(Debug, Serialize)]
pub struct ContentSnapshot {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub flow_steps: &'static [FlowStep],
    pub cancel_path: &'static CancelPath,
    pub journeys: [&'static Journey; 2],
    pub layers: &'static [ArchitectureLayer],
    pub events_flow: &'static EventsFlow,
    pub modules: &'static [ModuleDescriptor],
    pub interaction_tiers: &'static [&'static [InteractionBox]],
    pub interaction_note: &'static str,
}

impl ContentSnapshot {
    pub fn new() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
            flow_steps: &FLOW_STEPS,
            cancel_path: &CANCEL_PATH,
            journeys: [&BUYER_JOURNEY, &SELLER_JOURNEY],
            layers: &LAYERS,
            events_flow: &EVENTS_FLOW,
            modules: &MODULES,
            interaction_tiers: &INTERACTION_TIERS,
            interaction_note: INTERACTION_NOTE,
        }
    }
}
