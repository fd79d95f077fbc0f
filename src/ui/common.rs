use crate::translate::Text;
use crate::ui::host::InfoPage;

pub const PAUSED_SUFFIX: &str = " (paused)";

pub const KEY_RELEASE: u16 = 0x80;
pub const KEY_CODE_MASK: u16 = 0x7f;

pub fn window_title(name: &str, paused: bool) -> String {
    if paused {
        format!("{name}{PAUSED_SUFFIX}")
    } else {
        name.to_string()
    }
}

pub fn decode_raw_key(code: u16) -> (u8, bool) {
    let pressed = code & KEY_RELEASE == 0;
    ((code & KEY_CODE_MASK) as u8, pressed)
}

pub fn same_language(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

pub fn info_page_texts(page: InfoPage) -> (Text, Option<Text>) {
    match page {
        InfoPage::About => (Text::About, None),
        InfoPage::Contributors => (Text::Contributors, Some(Text::ContributorsIntro)),
        InfoPage::License => (Text::License, None),
        InfoPage::Warranty => (Text::NoWarranty, Some(Text::WarrantyIntro)),
        InfoPage::CommandLine => (Text::CommandLineOptions, Some(Text::CommandLineIntro)),
        InfoPage::Features => (Text::CompileFeatures, Some(Text::FeaturesIntro)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_keys_split_into_code_and_direction() {
        assert_eq!(decode_raw_key(0x45), (0x45, true));
        assert_eq!(decode_raw_key(0xC5), (0x45, false));
        assert_eq!(decode_raw_key(0x80), (0x00, false));
    }

    #[test]
    fn paused_titles_get_a_suffix() {
        assert_eq!(window_title("C64", true), "C64 (paused)");
        assert_eq!(window_title("C64", false), "C64");
    }

    #[test]
    fn language_codes_compare_case_insensitively() {
        assert!(same_language("de", "DE"));
        assert!(!same_language("de", "da"));
    }
}
