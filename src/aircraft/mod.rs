pub mod aircraft;
pub mod catalog;

pub use aircraft::AircraftProfile;
pub use catalog::Catalog;
