// Smart contract module descriptors and the interaction diagram.

use serde::Serialize;

use super::{ColorTag, Icon};

/// One backend module as described on the Smart Contracts tab.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleDescriptor {
    pub name: &'static str,
    /// Illustrative source file, e.g. `escrow.move`.
    pub source_label: &'static str,
    pub color: ColorTag,
    pub icon: Icon,
    pub features: &'static [&'static str],
    pub functions: &'static [&'static str],
    pub events: &'static [&'static str],
}

/// A box in the interaction diagram footer.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionBox {
    pub name: &'static str,
    pub role: &'static str,
    pub color: ColorTag,
}

pub static MODULES: [ModuleDescriptor; 4] = [
    ModuleDescriptor {
        name: "UserProfile Module",
        source_label: "user_profile.move",
        color: ColorTag::Blue,
        icon: Icon::User,
        features: &[
            "User registration with role selection (Buyer/Seller)",
            "Profile information management",
            "Profile activation/deactivation",
            "Role-based access control",
        ],
        functions: &[
            "register_profile()",
            "update_profile()",
            "is_seller()",
            "profile_exists()",
        ],
        events: &[
            "ProfileCreatedEvent",
            "ProfileUpdatedEvent",
            "ProfileDeactivatedEvent",
        ],
    },
    ModuleDescriptor {
        name: "Product Module",
        source_label: "product.move",
        color: ColorTag::Green,
        icon: Icon::Package,
        features: &[
            "Product creation (seller-only)",
            "Inventory management (add/reduce stock)",
            "Product availability toggle",
            "Global product registry",
        ],
        functions: &[
            "create_product()",
            "update_inventory()",
            "get_all_products()",
            "has_enough_stock()",
        ],
        events: &[
            "ProductCreatedEvent",
            "InventoryUpdatedEvent",
            "ProductAvailabilityChangedEvent",
        ],
    },
    ModuleDescriptor {
        name: "Order Module",
        source_label: "order.move",
        color: ColorTag::Purple,
        icon: Icon::FileText,
        features: &[
            "Order placement (buyer-only)",
            "Order status tracking",
            "Order cancellation with conditions",
            "Payment tracking",
        ],
        functions: &[
            "place_order()",
            "update_order_status()",
            "cancel_order()",
            "get_buyer_orders()",
        ],
        events: &[
            "OrderPlacedEvent",
            "OrderStatusUpdatedEvent",
            "PaymentConfirmedEvent",
        ],
    },
    ModuleDescriptor {
        name: "Escrow Module",
        source_label: "escrow.move",
        color: ColorTag::Orange,
        icon: Icon::ShieldCheck,
        features: &[
            "Escrow-based payment protection",
            "6-digit delivery code generation",
            "4-digit receiving code generation",
            "Automatic fund release & refund",
        ],
        functions: &[
            "initiate_trade_and_lock_funds()",
            "deliver_order()",
            "confirm_delivery_and_release_funds()",
            "cancel_escrow_order()",
        ],
        events: &[
            "TradeInitiatedEvent",
            "FundsLockedEvent",
            "FundsReleasedEvent",
            "EscrowCancelledEvent",
        ],
    },
];

/// Dependency order among modules: profile, then product, then order and escrow side by side.
pub static INTERACTION_TIERS: [&[InteractionBox]; 3] = [
    &[InteractionBox {
        name: "User Profile Module",
        role: "Foundation",
        color: ColorTag::Blue,
    }],
    &[InteractionBox {
        name: "Product Module",
        role: "Sellers create products",
        color: ColorTag::Green,
    }],
    &[
        InteractionBox {
            name: "Order Module",
            role: "Buyers place orders",
            color: ColorTag::Purple,
        },
        InteractionBox {
            name: "Escrow Module",
            role: "Secure payments",
            color: ColorTag::Orange,
        },
    ],
];

pub const INTERACTION_NOTE: &str =
    "All modules verify user roles and permissions before executing transactions";
