pub(crate) mod composite;
pub(crate) mod envelope;
pub(crate) mod geometry;
pub(crate) mod pipeline;
pub(crate) mod raster;
