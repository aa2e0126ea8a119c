use log::Level;

/// WhatsApp number that receives appointment requests, in E.164 without the plus.
/// Set `PETGREEN_WHATSAPP_NUMBER` at build time to point the form somewhere else.
pub const WHATSAPP_NUMBER: &str = match option_env!("PETGREEN_WHATSAPP_NUMBER") {
    Some(number) => number,
    None => "5584996977221",
};

pub const INSTAGRAM_URL: &str = "https://instagram.com/petgreennatal";
pub const INSTAGRAM_HANDLE: &str = "@petgreennatal";

pub const DEVELOPER_SITE_URL: &str = "https://uicode-dev.netlify.app/";
pub const DEVELOPER_INSTAGRAM_URL: &str = "https://instagram.com/uicode.dev";
pub const DEVELOPER_WHATSAPP_URL: &str = "https://wa.me/5511916474626";

// Developer credit popup timings, relative to page mount.
pub const POPUP_SHOW_DELAY_MS: u32 = 4000;
pub const POPUP_READ_TIME_MS: u32 = 5000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty logs while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_is_plain_digits() {
        assert!(!WHATSAPP_NUMBER.is_empty());
        assert!(WHATSAPP_NUMBER.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn popup_minimizes_after_it_shows() {
        assert!(POPUP_READ_TIME_MS > 0);
        assert_eq!(POPUP_SHOW_DELAY_MS + POPUP_READ_TIME_MS, 9000);
    }
}
