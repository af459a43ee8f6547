pub mod drawer;
pub mod price_tag;
pub mod ui;
