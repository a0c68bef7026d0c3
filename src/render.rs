pub mod export;
pub mod fonts;
pub mod raster;
