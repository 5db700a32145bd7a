pub mod catalog;
pub mod model;
pub mod mount;
pub mod svg;
