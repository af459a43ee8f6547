pub mod drawer;
pub mod line;
