//! Centralized icon definitions.
//!
//! Maps semantic icon names to Bootstrap icons.

use drive_nav::ViewId;
use icondata::Icon;

pub const CHEVRON_RIGHT: Icon = icondata::BsChevronRight;
pub const HOME: Icon = icondata::BsHouseFill;
pub const RECENT: Icon = icondata::BsClock;
pub const FAVOURITES: Icon = icondata::BsStar;
pub const SHARED: Icon = icondata::BsPeople;
pub const TRASH: Icon = icondata::BsTrash;
pub const NOTIFICATIONS: Icon = icondata::BsBell;
pub const FILE: Icon = icondata::BsFileEarmark;
pub const FOLDER: Icon = icondata::BsFolderFill;
pub const DOCUMENT: Icon = icondata::BsFileEarmarkText;

/// Icon for a view, if it has one.
pub fn for_view(view: ViewId) -> Option<Icon> {
    match view {
        ViewId::Home => Some(HOME),
        ViewId::Recent => Some(RECENT),
        ViewId::Favourites => Some(FAVOURITES),
        ViewId::Shared => Some(SHARED),
        ViewId::Trash => Some(TRASH),
        ViewId::Notifications => Some(NOTIFICATIONS),
        ViewId::File => Some(FILE),
        ViewId::Folder => Some(FOLDER),
        ViewId::Document => Some(DOCUMENT),
        ViewId::Login | ViewId::Signup | ViewId::NotFound => None,
    }
}

#[cfg(test)]
mod tests {
    use drive_nav::RouteTable;

    use super::*;

    #[test]
    fn test_sidebar_routes_have_icons() {
        for route in RouteTable::drive().sidebar() {
            let view = route.view.unwrap();
            assert!(for_view(view).is_some(), "{} has no icon", route.name);
        }
    }
}
