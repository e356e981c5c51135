//! Long-press side menu
//!
//! A view model only: the host renders [`SideMenu::entries`] next to the
//! button and reports which entry was activated.

use crate::config::Side;
use crate::shortcuts::{ShortcutKind, ShortcutTree};

/// One rendered row of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// Move the button to the given corner
    MoveTo(Side),
    /// Leave the current shortcut group
    Back,
    Shortcut { label: String, group: bool },
}

/// What activating an entry did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// The button should move to this corner; the menu closed
    Reposition(Side),
    /// The host should open this URL; the menu closed
    Navigate(String),
    /// A shortcut group was opened
    Entered { depth: usize },
    /// Returned to the parent group
    Back { depth: usize },
}

#[derive(Debug, Clone, Default)]
pub struct SideMenu {
    open: bool,
    side: Side,
    /// Indices of the opened groups, from the roots down
    path: Vec<usize>,
    shortcuts: Option<ShortcutTree>,
}

impl SideMenu {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            ..Default::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Corner the menu is anchored to
    pub fn side(&self) -> Side {
        self.side
    }

    /// Re-anchor after the button moved
    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and forget any opened group
    pub fn close(&mut self) {
        self.open = false;
        self.path.clear();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_shortcuts(&mut self, shortcuts: ShortcutTree) {
        self.shortcuts = Some(shortcuts);
        self.path.clear();
    }

    pub fn shortcuts(&self) -> Option<&ShortcutTree> {
        self.shortcuts.as_ref()
    }

    /// Number of shortcut groups currently opened
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        let mut entries = Vec::new();
        if self.path.is_empty() {
            entries.push(MenuEntry::MoveTo(self.side.opposite()));
        } else {
            entries.push(MenuEntry::Back);
        }

        if let Some(nodes) = self.shortcuts.as_ref().and_then(|t| t.entries_at(&self.path)) {
            entries.extend(nodes.iter().map(|node| MenuEntry::Shortcut {
                label: node.label.clone(),
                group: matches!(node.kind, ShortcutKind::Group(_)),
            }));
        }

        entries
    }

    /// Activate the entry at `index` of [`SideMenu::entries`]
    pub fn activate(&mut self, index: usize) -> Option<MenuAction> {
        if !self.open {
            return None;
        }

        if index == 0 {
            if self.path.pop().is_some() {
                return Some(MenuAction::Back { depth: self.path.len() });
            }
            let side = self.side.opposite();
            self.close();
            return Some(MenuAction::Reposition(side));
        }

        let position = index - 1;
        let node = self
            .shortcuts
            .as_ref()?
            .entries_at(&self.path)?
            .get(position)?;

        match &node.kind {
            ShortcutKind::Link(url) => {
                let url = url.clone();
                self.close();
                Some(MenuAction::Navigate(url))
            }
            ShortcutKind::Group(_) => {
                self.path.push(position);
                Some(MenuAction::Entered { depth: self.path.len() })
            }
        }
    }
}
