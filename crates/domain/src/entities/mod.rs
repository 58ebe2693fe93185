//! Domain entities

mod settings_record;

pub use settings_record::SettingsRecord;
