//! Factory functions assembling the stock material mixtures.

pub mod matte;
pub mod metal;
pub mod plastic;
pub mod substrate;

pub use matte::{create_matte, create_matte_rough};
pub use metal::create_metal;
pub use plastic::{create_coated_plastic, create_plastic};
pub use substrate::create_ashikhmin_shirley;
