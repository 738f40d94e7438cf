// System architecture content.
// A fixed top-to-bottom list of layers plus the blockchain events illustration.

use serde::Serialize;

use super::{ColorTag, Icon};

/// A named box inside a layer. Some boxes only carry a detail line.
#[derive(Debug, Clone, Serialize)]
pub struct LayerBox {
    pub title: Option<&'static str>,
    pub detail: &'static str,
}

/// One layer of the system diagram.
#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureLayer {
    pub title: &'static str,
    pub icon: Icon,
    pub color: ColorTag,
    /// Grid columns used for `boxes` on wide terminals.
    pub columns: usize,
    pub boxes: &'static [LayerBox],
}

/// The events illustration under the diagram.
#[derive(Debug, Clone, Serialize)]
pub struct EventsFlow {
    pub title: &'static str,
    pub summary: &'static str,
    pub events: &'static [&'static str],
}

pub static LAYERS: [ArchitectureLayer; 4] = [
    ArchitectureLayer {
        title: "Frontend Layer (Next.js)",
        icon: Icon::Code,
        color: ColorTag::Blue,
        columns: 3,
        boxes: &[
            LayerBox {
                title: Some("Buyer UI"),
                detail: "Browse, Purchase, Track Orders",
            },
            LayerBox {
                title: Some("Seller UI"),
                detail: "Manage Products, Orders, Payments",
            },
            LayerBox {
                title: Some("Admin UI"),
                detail: "Platform Management",
            },
        ],
    },
    ArchitectureLayer {
        title: "Aptos Wallet Adapter (Petra, Martian, Pontem)",
        icon: Icon::Wallet,
        color: ColorTag::Purple,
        columns: 1,
        boxes: &[],
    },
    ArchitectureLayer {
        title: "Aptos Blockchain Layer",
        icon: Icon::Layers,
        color: ColorTag::Green,
        columns: 2,
        boxes: &[
            LayerBox {
                title: Some("UserProfile Module"),
                detail: "Registration & Role Management",
            },
            LayerBox {
                title: Some("Product Module"),
                detail: "Listings & Inventory",
            },
            LayerBox {
                title: Some("Order Module"),
                detail: "Order Tracking & Status",
            },
            LayerBox {
                title: Some("Escrow Module"),
                detail: "Secure Payment Processing",
            },
        ],
    },
    ArchitectureLayer {
        title: "Custom Indexer (Rust + PostgreSQL)",
        icon: Icon::Database,
        color: ColorTag::Orange,
        columns: 3,
        boxes: &[
            LayerBox {
                title: None,
                detail: "Process blockchain events in real-time",
            },
            LayerBox {
                title: None,
                detail: "Store indexed data for fast queries",
            },
            LayerBox {
                title: None,
                detail: "Provide REST API for frontend",
            },
        ],
    },
];

pub static EVENTS_FLOW: EventsFlow = EventsFlow {
    title: "Blockchain Events Flow",
    summary: "Smart Contract emits events → Indexer processes → Database stores → Frontend fetches",
    events: &[
        "ProfileCreatedEvent",
        "ProductCreatedEvent",
        "FundsLockedEvent",
        "FundsReleasedEvent",
    ],
};
