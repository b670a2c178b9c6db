//! Catalog outcome.

use chrono::NaiveDateTime;

use crate::model::menu::{MenuDto, MENU_STATUS_NO_UPDATE};

/// Result of a catalog read.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuOutcome {
    /// The caller already holds `version`; nothing else was read.
    NoUpdate { version: NaiveDateTime },
    /// The full catalog.
    Menu(MenuDto),
}

impl MenuOutcome {
    pub fn into_dto(self) -> MenuDto {
        match self {
            Self::NoUpdate { version } => MenuDto {
                status: MENU_STATUS_NO_UPDATE.to_string(),
                last_menu_update: Some(version),
                products_types: Vec::new(),
                components_types: Vec::new(),
                delays: Vec::new(),
            },
            Self::Menu(menu) => menu,
        }
    }
}
