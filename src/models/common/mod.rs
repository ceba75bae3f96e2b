pub mod labels;
pub mod pagination;
pub mod params;
