//! Assets module - asset identifier model and the key contract used by balance sheets.

mod assets_model;
mod assets_traits;


pub use assets_model::Asset;
pub use assets_traits::AssetIdentifier;
