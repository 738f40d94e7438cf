// Smart Contracts panel.
// One card per module with features, functions, and events side by side,
// then the fixed module interaction diagram.

use crate::content::{ColorTag, InteractionBox, ModuleDescriptor};

use super::view::{Connector, Marker, Node};

pub const FEATURES_HEADING: &str = "Key Features";
pub const FUNCTIONS_HEADING: &str = "Main Functions";
pub const EVENTS_HEADING: &str = "Events Emitted";

/// Build the Smart Contracts panel.
pub fn panel(modules: &[ModuleDescriptor], tiers: &[&[InteractionBox]], note: &str) -> Node {
    let mut children: Vec<Node> = modules.iter().map(module_card).collect();
    children.push(interaction_card(tiers, note));
    Node::Stack { gap: 1, children }
}

fn list(heading: &str, marker: Marker, items: &[&str]) -> Node {
    Node::List {
        heading: Some(heading.to_string()),
        marker,
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn module_card(module: &ModuleDescriptor) -> Node {
    Node::Card {
        title: None,
        tone: module.color,
        children: vec![
            Node::Heading {
                icon: Some(module.icon),
                text: module.name.to_string(),
                tone: module.color,
            },
            Node::Text {
                text: module.source_label.to_string(),
                tone: ColorTag::Neutral,
            },
            Node::Grid {
                columns: 3,
                cells: vec![
                    list(FEATURES_HEADING, Marker::Bullet, module.features),
                    list(FUNCTIONS_HEADING, Marker::Code, module.functions),
                    list(EVENTS_HEADING, Marker::Tag, module.events),
                ],
            },
        ],
    }
}

fn interaction_card(tiers: &[&[InteractionBox]], note: &str) -> Node {
    let mut children = Vec::with_capacity(tiers.len() * 2 + 1);
    for (i, tier) in tiers.iter().enumerate() {
        if i > 0 {
            children.push(Node::Connector(Connector::Down));
        }
        children.push(Node::Grid {
            columns: tier.len(),
            cells: tier.iter().map(interaction_box).collect(),
        });
    }
    children.push(Node::Text {
        text: note.to_string(),
        tone: ColorTag::Neutral,
    });

    Node::Card {
        title: Some("Module Interaction Flow".to_string()),
        tone: ColorTag::Neutral,
        children,
    }
}

fn interaction_box(ib: &InteractionBox) -> Node {
    Node::Card {
        title: None,
        tone: ib.color,
        children: vec![
            Node::Heading {
                icon: None,
                text: ib.name.to_string(),
                tone: ib.color,
            },
            Node::Text {
                text: format!("({})", ib.role),
                tone: ColorTag::Neutral,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{INTERACTION_NOTE, INTERACTION_TIERS, MODULES};

    fn modules_panel() -> Node {
        panel(&MODULES, &INTERACTION_TIERS, INTERACTION_NOTE)
    }

    /// (features, functions, events) item counts of each rendered module card.
    fn list_lengths(panel: &Node) -> Vec<(usize, usize, usize)> {
        panel.children()[..panel.children().len() - 1]
            .iter()
            .map(|card| {
                let mut lens = (0, 0, 0);
                card.walk(&mut |n| {
                    if let Node::List {
                        heading: Some(h),
                        items,
                        ..
                    } = n
                    {
                        match h.as_str() {
                            FEATURES_HEADING => lens.0 = items.len(),
                            FUNCTIONS_HEADING => lens.1 = items.len(),
                            EVENTS_HEADING => lens.2 = items.len(),
                            _ => {}
                        }
                    }
                });
                lens
            })
            .collect()
    }

    #[test]
    fn test_list_lengths_match_dataset() {
        let panel = modules_panel();
        let lens = list_lengths(&panel);

        assert_eq!(lens.len(), MODULES.len());
        for (module, (features, functions, events)) in MODULES.iter().zip(lens) {
            assert_eq!(features, module.features.len());
            assert_eq!(functions, module.functions.len());
            assert_eq!(events, module.events.len());
        }
    }

    #[test]
    fn test_escrow_module_has_four_of_each() {
        let panel = modules_panel();
        assert_eq!(list_lengths(&panel)[3], (4, 4, 4));
    }

    #[test]
    fn test_modules_in_fixed_order() {
        let panel = modules_panel();
        let mut headings = Vec::new();
        for card in &panel.children()[..4] {
            if let Node::Heading { text, .. } = &card.children()[0] {
                headings.push(text.clone());
            }
        }
        assert_eq!(
            headings,
            [
                "UserProfile Module",
                "Product Module",
                "Order Module",
                "Escrow Module"
            ]
        );
    }

    #[test]
    fn test_interaction_footer_is_independent_of_modules() {
        let full = modules_panel();
        let empty = panel(&[], &INTERACTION_TIERS, INTERACTION_NOTE);

        assert_eq!(empty.children().len(), 1);
        assert_eq!(full.children().last(), empty.children().last());
    }

    #[test]
    fn test_interaction_footer_order() {
        let text = modules_panel().plain_text(120);
        let footer = &text[text.find("Module Interaction Flow").unwrap()..];

        let profile = footer.find("User Profile Module").unwrap();
        let product = footer.find("Product Module").unwrap();
        let order = footer.find("Order Module").unwrap();
        let escrow = footer.find("Escrow Module").unwrap();
        assert!(profile < product);
        assert!(product < order);
        assert!(order < escrow);
        assert!(footer.contains(INTERACTION_NOTE));
    }
}
