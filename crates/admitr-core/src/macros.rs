#[macro_export]
macro_rules! get_admitr_setting {
    ($setting:ident) => {
        ::std::env::var(stringify!($setting)).unwrap_or(admitr_core::config::$setting.to_string())
    };
    ($setting:ident, usize) => {
        match ::std::env::var(stringify!($setting)) {
            Ok(v) => match v.parse() {
                Ok(i) => i,
                Err(_) => {
                    ::log::warn!(
                        "Env var setting {} is not a valid unsigned integer. Using default",
                        stringify!($setting)
                    );
                    admitr_core::config::$setting
                }
            },
            Err(_) => admitr_core::config::$setting,
        }
    };
}
