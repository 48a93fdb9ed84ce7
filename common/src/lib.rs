pub mod description;
pub mod export;
pub mod logging;
pub mod shading;
