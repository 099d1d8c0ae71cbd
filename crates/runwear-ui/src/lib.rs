//! Page output and pipeline orchestration for RunWear.

pub mod page;
pub mod pipeline;
pub mod render;

pub use page::{ImageElement, Page, PageState, RecommendationView, RecordingPage, TerminalPage};
pub use pipeline::{WeatherPipeline, FETCH_FAILED_MESSAGE, NO_RECOMMENDATIONS_MESSAGE};
pub use render::{format_forecast, render};
