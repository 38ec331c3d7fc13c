pub mod env;
pub mod templates;
pub mod yml_settings;
