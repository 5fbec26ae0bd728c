mod logo_image;

pub use logo_image::logo_image;
