mod app;
mod pages;
mod settings;
mod theme;
mod widgets;

use app::App;
use myorg_core::components::LogoImage;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("Blank")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(420.0, 640.0),
            icon: load_icon(),
            ..Default::default()
        })
        .run()
}

fn load_icon() -> Option<iced::window::Icon> {
    let logo = LogoImage::decode()
        .map_err(|e| log::warn!("No window icon: {e}"))
        .ok()?;
    iced::window::icon::from_rgba(logo.rgba, logo.width, logo.height).ok()
}
