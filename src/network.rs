//! Network URL constants for the swap SDK.

/// Default price feed endpoint (JSON array of `{currency, date, price}`).
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Default base for token icons; icons live at `<base>/<currency>.svg`.
pub const DEFAULT_TOKEN_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// File extension of token icons.
pub const TOKEN_ICON_EXTENSION: &str = "svg";
