/// This config file lists out all the default values for the main ADMITR env configs.
/// All can be overridden by an ENV var of the same name. These should only be
/// primitive types.

/// facility name shown in the dashboard header
pub static ADMITR_FACILITY_NAME: &'static str = "AIDO Hospital";

/// copyright line shown in the dashboard footer
pub static ADMITR_FOOTER_TEXT: &'static str = "copyright aido@2025";

/// terminal event poll interval for the main loop
pub static ADMITR_TICK_RATE_MS: usize = 16;
