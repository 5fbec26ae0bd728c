pub mod class_list;
pub mod fixed_color_scheme;
pub mod listener_registry;
mod platform;
pub mod simulated_color_scheme;
pub mod system_color_scheme;
