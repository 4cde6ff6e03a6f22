//! Fuzz target for `hazop.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! Invalid boundaries, unknown levels and bad globs must come back as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Config files must be UTF-8
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = hazop_settings::parse_config_toml(text)
    {
        let _ = hazop_settings::resolve_config(cfg, hazop_settings::Overrides::default());
    }
});
