pub mod controller;
pub mod filter;
pub mod form;
pub mod motion;
pub mod nav;
pub mod surface;
pub mod theme;
