//! Default configuration values

/// Label appended by the guidon (handlebar) step
pub const GUIDON_LABEL: &str = "PartA1";

/// Label appended by the cadre (frame) step
pub const CADRE_LABEL: &str = "PartB1";

/// Label appended by the roue (wheel) step
pub const ROUE_LABEL: &str = "PartC1";

/// Heading for the director-driven minimal build
pub const MINIMAL_TITLE: &str = "Standard basic velo";

/// Heading for the director-driven full build
pub const FULL_TITLE: &str = "Standard full featured velo";

/// Heading for an ad-hoc build driven directly on the builder
pub const CUSTOM_TITLE: &str = "Custom velo";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application name used in directory paths
pub const APP_NAME: &str = "velo";
