pub mod maps;
pub mod marathons;
pub mod pages;
