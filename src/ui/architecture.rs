// Architecture panel.
// Layers top to bottom with arrows between them, then the events illustration.

use crate::content::{ArchitectureLayer, ColorTag, EventsFlow, LayerBox};

use super::view::{Connector, Marker, Node};

/// Build the Architecture panel. Output depends only on the constant datasets.
pub fn panel(layers: &[ArchitectureLayer], events: &EventsFlow) -> Node {
    let mut diagram = Vec::with_capacity(layers.len() * 2);
    for (i, layer) in layers.iter().enumerate() {
        if i > 0 {
            diagram.push(Node::Connector(Connector::Down));
        }
        diagram.push(layer_card(layer));
    }

    Node::Stack {
        gap: 1,
        children: vec![
            Node::Card {
                title: Some("System Architecture".to_string()),
                tone: ColorTag::Neutral,
                children: diagram,
            },
            events_card(events),
        ],
    }
}

fn layer_card(layer: &ArchitectureLayer) -> Node {
    let mut children = vec![Node::Heading {
        icon: Some(layer.icon),
        text: layer.title.to_string(),
        tone: layer.color,
    }];
    if !layer.boxes.is_empty() {
        children.push(Node::Grid {
            columns: layer.columns,
            cells: layer.boxes.iter().map(|b| layer_box(b, layer.color)).collect(),
        });
    }

    Node::Card {
        title: None,
        tone: layer.color,
        children,
    }
}

fn layer_box(layer_box: &LayerBox, tone: ColorTag) -> Node {
    let mut children = Vec::new();
    if let Some(title) = layer_box.title {
        children.push(Node::Heading {
            icon: None,
            text: title.to_string(),
            tone: ColorTag::Neutral,
        });
    }
    children.push(Node::Text {
        text: layer_box.detail.to_string(),
        tone: ColorTag::Neutral,
    });

    Node::Card {
        title: None,
        tone,
        children,
    }
}

fn events_card(events: &EventsFlow) -> Node {
    Node::Card {
        title: Some(events.title.to_string()),
        tone: ColorTag::Neutral,
        children: vec![
            Node::Text {
                text: events.summary.to_string(),
                tone: ColorTag::Blue,
            },
            Node::Grid {
                columns: 2,
                cells: events
                    .events
                    .iter()
                    .map(|e| Node::List {
                        heading: None,
                        marker: Marker::Bullet,
                        items: vec![e.to_string()],
                    })
                    .collect(),
            },
        ],
    }
}
