// ASCII icons that work in all terminals

pub struct Icons;

impl Icons {
    // Sections
    pub const STATS: &'static str = "[#]";
    pub const TRANSACTIONS: &'static str = "[~]";
    pub const HOLDERS: &'static str = "[H]";
    pub const STAKING: &'static str = "[S]";
    pub const SIMULATOR: &'static str = "[%]";

    // Status
    pub const WALLET: &'static str = "[W]";
    pub const LOADING: &'static str = "[~]";
    pub const SUCCESS: &'static str = "[+]";
    pub const ERROR: &'static str = "[!]";
    pub const INFO: &'static str = "[i]";

    // Effects
    pub const BEAN: &'static str = "(o)";
    pub const SPARKLE: &'static str = "*";

    // UI
    pub const MENU: &'static str = "[=]";
    pub const KEYBOARD: &'static str = "[K]";
    pub const ARROW_RIGHT: &'static str = ">";
}
