pub mod canvas;
pub mod raster;
pub mod sketch;
pub mod style;
pub mod surface;
