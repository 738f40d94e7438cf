// Escrow Flow panel.
// Step cards joined by arrows, the cancel alternative, and both journeys.

use crate::content::{CancelPath, ColorTag, FlowStep, Icon, Journey};

use super::view::{Connector, Marker, Node};

/// Build the Escrow Flow panel from its datasets.
pub fn panel(steps: &[FlowStep], cancel: &CancelPath, journeys: [&Journey; 2]) -> Node {
    let mut row = Vec::with_capacity(steps.len() * 2);
    for (i, step) in steps.iter().enumerate() {
        row.push(step_card(step));
        if i + 1 < steps.len() {
            row.push(Node::Connector(Connector::Right));
        }
    }

    Node::Stack {
        gap: 1,
        children: vec![
            Node::Row(row),
            cancel_card(cancel),
            Node::Grid {
                columns: 2,
                cells: journeys.iter().map(|j| journey_card(j)).collect(),
            },
        ],
    }
}

fn step_card(step: &FlowStep) -> Node {
    Node::Card {
        title: Some(format!("Step {}", step.step_number)),
        tone: step.color,
        children: vec![
            Node::Heading {
                icon: Some(step.icon),
                text: step.title.to_string(),
                tone: ColorTag::Neutral,
            },
            Node::Labeled {
                icon: Icon::User,
                label: "Buyer".to_string(),
                text: step.buyer_action.to_string(),
            },
            Node::Labeled {
                icon: Icon::ShieldCheck,
                label: "System".to_string(),
                text: step.system_action.to_string(),
            },
            Node::Labeled {
                icon: Icon::TrendingUp,
                label: "Action".to_string(),
                text: step.resulting_action.to_string(),
            },
            Node::Badge {
                label: format!("Status: {}", step.status.label()),
                tone: step.color,
            },
        ],
    }
}

fn cancel_card(cancel: &CancelPath) -> Node {
    Node::Card {
        title: None,
        tone: cancel.color,
        children: vec![
            Node::Heading {
                icon: Some(cancel.icon),
                text: cancel.title.to_string(),
                tone: cancel.color,
            },
            Node::Text {
                text: cancel.description.to_string(),
                tone: ColorTag::Neutral,
            },
        ],
    }
}

fn journey_card(journey: &Journey) -> Node {
    Node::Card {
        title: None,
        tone: journey.color,
        children: vec![
            Node::Heading {
                icon: Some(journey.icon),
                text: journey.title.to_string(),
                tone: journey.color,
            },
            Node::List {
                heading: None,
                marker: Marker::Numbered,
                items: journey.steps.iter().map(|s| s.to_string()).collect(),
            },
        ],
    }
}
