pub mod error;
pub mod feature_flags;

// Delivery domain
pub mod delivery;
pub mod geocode;
pub mod navigation;
pub mod order;
pub mod signature;
pub mod table;

#[cfg(feature = "geocoding")]
pub mod geocode_client;

pub use error::*;
pub use feature_flags::*;

pub use delivery::*;
pub use geocode::*;
pub use navigation::*;
pub use order::*;
pub use signature::*;
pub use table::*;

#[cfg(feature = "geocoding")]
pub use geocode_client::GeocodeClient;
