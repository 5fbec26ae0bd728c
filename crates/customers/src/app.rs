use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use iced::{Element, Subscription, Task, Theme};

use myorg_core::theme::infrastructure::class_list::ClassList;
use myorg_core::theme::infrastructure::fixed_color_scheme::FixedColorScheme;
use myorg_core::theme::infrastructure::system_color_scheme::SystemColorScheme;
use myorg_core::theme::{use_theme, ColorScheme, ColorSchemeSignal, ThemeContext, ThemeProvider};

use crate::pages;
use crate::settings::{Appearance, Settings};
use crate::theme;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    DarkModeToggled(bool),
    AppearanceChanged(Appearance),
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub settings: Settings,
    settings_path: Option<PathBuf>,
    system_scheme: Arc<dyn ColorSchemeSignal>,
    /// Document-level style marker. The app is its only owner; the provider
    /// writes it through the `StyleMarkerSink` interface.
    document: Arc<ClassList>,
    provider: ThemeProvider,
    context: ThemeContext,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let settings_path = Settings::config_path();
        let settings = Settings::load();
        (
            Self::with_parts(settings, settings_path, Arc::new(SystemColorScheme::new())),
            Task::none(),
        )
    }

    pub fn with_parts(
        settings: Settings,
        settings_path: Option<PathBuf>,
        system_scheme: Arc<dyn ColorSchemeSignal>,
    ) -> Self {
        let document = Arc::new(ClassList::new());
        let provider = mount_theme(settings.appearance, system_scheme.as_ref(), &document);
        let context = ThemeContext::from(&provider);
        Self {
            settings,
            settings_path,
            system_scheme,
            document,
            provider,
            context,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DarkModeToggled(enabled) => {
                use_theme(&self.context).set_dark_mode(enabled);
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                if let Some(path) = &self.settings_path {
                    self.settings.save_to(path);
                }
                self.provider =
                    mount_theme(appearance, self.system_scheme.as_ref(), &self.document);
                self.context = ThemeContext::from(&self.provider);
            }
            Message::PollSystemTheme => {
                self.system_scheme.refresh();
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        pages::home::view(&self.context, &self.settings)
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(&self.document)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.settings.appearance == Appearance::System {
            let interval = Duration::from_secs(self.settings.poll_interval_secs.max(1));
            iced::time::every(interval).map(|_| Message::PollSystemTheme)
        } else {
            Subscription::none()
        }
    }
}

fn mount_theme(
    appearance: Appearance,
    system_scheme: &dyn ColorSchemeSignal,
    document: &Arc<ClassList>,
) -> ThemeProvider {
    match appearance {
        Appearance::System => ThemeProvider::mount(system_scheme, document.clone()),
        Appearance::Dark => {
            ThemeProvider::mount(&FixedColorScheme(ColorScheme::Dark), document.clone())
        }
        Appearance::Light => {
            ThemeProvider::mount(&FixedColorScheme(ColorScheme::Light), document.clone())
        }
    }
}
