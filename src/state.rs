// Tab selection state.
// Holds the single active-tab value for one mounted section.

use clap::ValueEnum;
use serde::Serialize;

/// Tab shown in the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Flow,
    Architecture,
    Modules,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [TabId; 3] = [TabId::Flow, TabId::Architecture, TabId::Modules];

    pub fn title(&self) -> &'static str {
        match self {
            TabId::Flow => "Escrow Flow",
            TabId::Architecture => "Architecture",
            TabId::Modules => "Smart Contracts",
        }
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            TabId::Flow => 0,
            TabId::Architecture => 1,
            TabId::Modules => 2,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            TabId::Flow => TabId::Architecture,
            TabId::Architecture => TabId::Modules,
            TabId::Modules => TabId::Flow,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            TabId::Flow => TabId::Modules,
            TabId::Architecture => TabId::Flow,
            TabId::Modules => TabId::Architecture,
        }
    }
}

/// Owner of the active tab. Starts on [`TabId::Flow`].
#[derive(Debug, Clone, Default)]
pub struct TabState {
    active: TabId,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> TabId {
        self.active
    }

    /// Make `id` the active tab. Returns true if the active tab changed.
    pub fn select_tab(&mut self, id: TabId) -> bool {
        if self.active == id {
            return false;
        }
        tracing::debug!(from = ?self.active, to = ?id, "tab selected");
        self.active = id;
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select_tab(self.active.next())
    }

    pub fn select_prev(&mut self) -> bool {
        self.select_tab(self.active.prev())
    }
}
