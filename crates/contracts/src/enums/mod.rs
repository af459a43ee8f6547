pub mod category_key;
pub mod section;
