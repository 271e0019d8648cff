//! Side menu: navigation drawer state and badge counts

use crate::state::View;

/// One drawer entry
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: &'static str,
    pub view: View,
    pub badge: u32,
}

/// Drawer controller
#[derive(Debug)]
pub struct SideMenu {
    open: bool,
    items: Vec<MenuItem>,
}

impl Default for SideMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl SideMenu {
    pub fn new() -> Self {
        let items = vec![
            MenuItem {
                label: "Feed",
                view: View::Feed,
                badge: 0,
            },
            MenuItem {
                label: "Discover",
                view: View::Discover,
                badge: 0,
            },
            MenuItem {
                label: "Messages",
                view: View::Messages,
                badge: 0,
            },
            MenuItem {
                label: "Bookings",
                view: View::Bookings,
                badge: 0,
            },
            MenuItem {
                label: "Wishlist",
                view: View::Wishlist,
                badge: 0,
            },
            MenuItem {
                label: "Settings",
                view: View::Settings,
                badge: 0,
            },
            MenuItem {
                label: "Help & Support",
                view: View::HelpSupport,
                badge: 0,
            },
        ];
        Self { open: false, items }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Update the badge on the entry for a view, if it has one
    pub fn set_badge(&mut self, view: View, badge: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.view == view) {
            item.badge = badge;
        }
    }
}
