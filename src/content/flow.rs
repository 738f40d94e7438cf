// Escrow flow content.
// The three numbered steps, the cancel alternative, and both user journeys.

use serde::Serialize;

use super::{ColorTag, Icon};

/// Status label attached to a step. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StepStatus {
    Holding,
    Delivered,
    Completed,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Holding => "HOLDING",
            StepStatus::Delivered => "DELIVERED",
            StepStatus::Completed => "COMPLETED",
        }
    }
}

/// One step of the escrow process.
#[derive(Debug, Clone, Serialize)]
pub struct FlowStep {
    /// 1-based position in the flow.
    pub step_number: u8,
    pub title: &'static str,
    pub buyer_action: &'static str,
    pub system_action: &'static str,
    pub resulting_action: &'static str,
    pub status: StepStatus,
    pub color: ColorTag,
    pub icon: Icon,
}

/// The off-path alternative shown under the steps.
#[derive(Debug, Clone, Serialize)]
pub struct CancelPath {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub color: ColorTag,
}

/// An ordered list of plain steps for one party.
#[derive(Debug, Clone, Serialize)]
pub struct Journey {
    pub title: &'static str,
    pub icon: Icon,
    pub color: ColorTag,
    pub steps: &'static [&'static str],
}

pub static FLOW_STEPS: [FlowStep; 3] = [
    FlowStep {
        step_number: 1,
        title: "Initiate Trade & Lock Funds",
        buyer_action: "Clicks \"Buy Now\"",
        system_action: "Generates 6-digit delivery code (seller) & 4-digit receiving code (buyer)",
        resulting_action: "Buyer's funds withdrawn and locked in escrow",
        status: StepStatus::Holding,
        color: ColorTag::Blue,
        icon: Icon::Lock,
    },
    FlowStep {
        step_number: 2,
        title: "Deliver Order",
        buyer_action: "Waits for delivery",
        system_action: "Validates delivery code",
        resulting_action: "Seller ships product & enters 6-digit code",
        status: StepStatus::Delivered,
        color: ColorTag::Purple,
        icon: Icon::Package,
    },
    FlowStep {
        step_number: 3,
        title: "Confirm & Release Funds",
        buyer_action: "Receives product & enters 4-digit code",
        system_action: "Validates code & releases funds",
        resulting_action: "Funds automatically transferred to seller",
        status: StepStatus::Completed,
        color: ColorTag::Green,
        icon: Icon::CheckCircle,
    },
];

pub static CANCEL_PATH: CancelPath = CancelPath {
    title: "Alternative: Cancel Order",
    description: "Before delivery (HOLDING status), buyer or seller can cancel. \
Funds automatically refunded to buyer. Status changes to CANCELLED.",
    icon: Icon::FileText,
    color: ColorTag::Red,
};

pub static BUYER_JOURNEY: Journey = Journey {
    title: "Buyer Journey",
    icon: Icon::User,
    color: ColorTag::Blue,
    steps: &[
        "Connect Wallet & Register Profile (Buyer)",
        "Browse & Select Product",
        "Click \"Buy Now\" & Approve Transaction",
        "Funds Locked in Escrow",
        "Receive 4-digit Receiving Code",
        "Track Order Status",
        "Receive Product",
        "Enter Receiving Code",
        "Funds Released to Seller",
    ],
};

pub static SELLER_JOURNEY: Journey = Journey {
    title: "Seller Journey",
    icon: Icon::Store,
    color: ColorTag::Green,
    steps: &[
        "Connect Wallet & Register Profile (Seller)",
        "Create Product Listing",
        "Receive Order Notification",
        "Confirm & Process Order",
        "Receive 6-digit Delivery Code",
        "Ship Product to Buyer",
        "Enter Delivery Code",
        "Wait for Buyer Confirmation",
        "Receive Payment in Wallet",
    ],
};
