pub mod client;
pub mod config;
pub mod debounce;
pub mod display;
pub mod error;
pub mod proto;
pub mod render;
pub mod search;
pub mod widget;

pub use typeahead_api as api;
pub use typeahead_query as query;

pub use config::WidgetConfig;
pub use widget::SearchWidget;
