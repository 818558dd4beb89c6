// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod detail_list;
pub mod empty_state;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod star_rating;

// Primitive wrappers
pub mod switch;

// Overlays
pub mod alert_dialog;
pub mod dialog;
pub mod toast;

// Navigation
pub mod navbar;
pub mod sidebar;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use detail_list::*;
pub use dialog::*;
pub use empty_state::*;
pub use input::*;
pub use navbar::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;
pub use star_rating::*;
pub use switch::*;
pub use toast::*;
