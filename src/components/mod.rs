pub mod advice_body;
pub mod dashboard;
pub mod error_panel;
pub mod input_form;
pub mod loader;
pub mod metrics_grid;
pub mod research_sources;
pub mod select_field;
pub mod text_field;

pub use dashboard::Dashboard;
pub use input_form::InputForm;
