pub mod locale;

pub use locale::{CurrencyLocale, LocaleError};
