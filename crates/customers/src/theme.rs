use iced::color;
use iced::theme::Palette;
use iced::Theme;

use myorg_core::theme::infrastructure::class_list::ClassList;

/// Resolve the iced Theme from the document's style marker.
pub fn resolve_theme(document: &ClassList) -> Theme {
    let palette = if document.is_dark() {
        dark_palette()
    } else {
        light_palette()
    };

    Theme::custom("MyOrg Customers", palette)
}

fn dark_palette() -> Palette {
    Palette {
        background: color!(0x12, 0x12, 0x12),
        text: color!(0xff, 0xff, 0xff),
        primary: color!(0x42, 0x8c, 0xff),
        success: color!(0x2f, 0xdf, 0x75),
        warning: color!(0xff, 0xd5, 0x34),
        danger: color!(0xff, 0x49, 0x61),
    }
}

fn light_palette() -> Palette {
    Palette {
        background: color!(0xff, 0xff, 0xff),
        text: color!(0x00, 0x00, 0x00),
        primary: color!(0x38, 0x80, 0xff),
        success: color!(0x2d, 0xd3, 0x6f),
        warning: color!(0xff, 0xc4, 0x09),
        danger: color!(0xeb, 0x44, 0x5a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use myorg_core::theme::infrastructure::class_list::DARK_CLASS;

    #[test]
    fn test_marker_selects_palette() {
        let document = ClassList::new();
        assert_eq!(
            resolve_theme(&document).palette().background,
            light_palette().background
        );

        document.toggle(DARK_CLASS, true);
        assert_eq!(
            resolve_theme(&document).palette().background,
            dark_palette().background
        );
    }
}
