pub mod color_scheme;
pub mod color_scheme_signal;
pub mod style_marker;
pub mod subscription;
