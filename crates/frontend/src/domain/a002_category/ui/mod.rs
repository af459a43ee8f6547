pub mod cards;
pub mod selector;
