//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuExternalLink as ExternalLink, LuHouse as Home, LuLayoutGrid as Grid, LuList as List,
        LuLock as Lock, LuMapPin as Location, LuPencil as Edit, LuPlus as Plus, LuUser as User,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsGeoAltFill as Location, BsGrid as Grid,
        BsHouseFill as Home, BsListUl as List, BsLockFill as Lock, BsPencil as Edit,
        BsPerson as User, BsPlusLg as Plus, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(HOME, Home);
themed_icon!(GRID, Grid);
themed_icon!(LIST, List);
themed_icon!(LOCK, Lock);
themed_icon!(LOCATION, Location);
themed_icon!(EDIT, Edit);
themed_icon!(PLUS, Plus);
themed_icon!(USER, User);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
