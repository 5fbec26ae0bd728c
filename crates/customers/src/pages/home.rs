use iced::widget::{column, container, pick_list, row, text, toggler, Space};
use iced::{Alignment, Element, Length};

use myorg_core::theme::{use_theme, ThemeContext};

use crate::app::Message;
use crate::settings::{Appearance, Settings};
use crate::widgets::logo_image;

const TITLE: &str = "Blank";

pub fn view<'a>(context: &ThemeContext, settings: &Settings) -> Element<'a, Message> {
    let theme = use_theme(context);

    let toolbar = container(text(TITLE).size(17.0))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([10, 0]);

    let content = column![
        text(TITLE).size(34.0),
        Space::new().height(16),
        logo_image(),
        Space::new().height(24),
        row![
            text("Dark mode").size(14.0),
            toggler(theme.is_dark_mode()).on_toggle(Message::DarkModeToggled),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
        Space::new().height(12),
        row![
            text("Appearance").size(14.0),
            pick_list(Appearance::ALL, Some(settings.appearance), |a| {
                Message::AppearanceChanged(a)
            })
            .text_size(14.0),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    ]
    .spacing(0)
    .padding(16);

    column![toolbar, content].height(Length::Fill).into()
}
