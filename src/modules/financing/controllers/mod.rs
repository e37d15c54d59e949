pub mod financing_controller;

pub use financing_controller::configure;
