pub mod yml_settings;

pub use yml_settings::ExpanderSettings;
