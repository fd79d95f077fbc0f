pub mod config;
pub mod machine;
pub mod resources;
pub mod translate;
pub mod ui;
