pub mod draw;
pub mod raster;
pub mod scene;
pub mod style;
pub mod surface;
pub mod svg;
