pub mod assets;
pub mod html_export;
pub mod settings;

pub use assets::Asset;
pub use settings::AppSettings;
