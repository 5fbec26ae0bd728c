use iced::widget::image;
use iced::{Element, Length};

use myorg_core::components::LogoImage;

const LOGO_SIZE: f32 = 120.0;

pub fn logo_image<'a, Message: 'a>() -> Element<'a, Message> {
    image(image::Handle::from_bytes(LogoImage::bytes()))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .into()
}
