pub mod logo_image;

pub use logo_image::{DecodedLogo, LogoError, LogoImage};
