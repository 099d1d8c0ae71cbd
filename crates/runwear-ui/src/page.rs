//! Page regions the pipeline writes to.

use std::io::Write;

use parking_lot::Mutex;

/// Alt text of every recommendation image.
pub const IMAGE_ALT: &str = "clothing item";
/// Display width of every recommendation image, in pixels.
pub const IMAGE_WIDTH_PX: u32 = 200;

/// One rendered clothing recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    pub src: String,
    pub alt: String,
    pub width_px: u32,
}

impl ImageElement {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: IMAGE_ALT.to_string(),
            width_px: IMAGE_WIDTH_PX,
        }
    }
}

/// Output surface for one page.
///
/// Each setter replaces the previous contents of its region.
pub trait Page: Send + Sync {
    fn set_forecast_text(&self, text: &str);

    fn set_status_text(&self, text: &str);

    fn set_recommendation_images(&self, images: &[ImageElement]);

    fn set_recommendation_text(&self, text: &str);

    /// Blocking, user-visible notice.
    fn alert(&self, message: &str);

    fn focus_zip_input(&self);
}

/// Page that prints regions to stdout and alerts to stderr.
#[derive(Debug, Default)]
pub struct TerminalPage;

impl TerminalPage {
    pub fn new() -> Self {
        Self
    }
}

impl Page for TerminalPage {
    fn set_forecast_text(&self, text: &str) {
        if !text.is_empty() {
            println!("Forecast: {}", text);
        }
    }

    fn set_status_text(&self, text: &str) {
        if !text.is_empty() {
            println!("{}", text);
        }
    }

    fn set_recommendation_images(&self, images: &[ImageElement]) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "What to wear:");
        for image in images {
            let _ = writeln!(out, "  - {}", image.src);
        }
    }

    fn set_recommendation_text(&self, text: &str) {
        println!("{}", text);
    }

    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn focus_zip_input(&self) {
        // No input widget on a terminal; the alert already prompted the user.
    }
}

/// What the recommendation region currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecommendationView {
    #[default]
    Empty,
    Images(Vec<ImageElement>),
    Text(String),
}

/// Snapshot of a [`RecordingPage`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub forecast_text: String,
    pub status_text: String,
    pub recommendations: RecommendationView,
    pub alerts: Vec<String>,
    pub zip_focus_count: usize,
}

/// In-memory page for tests and embedders.
#[derive(Debug, Default)]
pub struct RecordingPage {
    state: Mutex<PageState>,
}

impl RecordingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageState {
        self.state.lock().clone()
    }
}

impl Page for RecordingPage {
    fn set_forecast_text(&self, text: &str) {
        self.state.lock().forecast_text = text.to_string();
    }

    fn set_status_text(&self, text: &str) {
        self.state.lock().status_text = text.to_string();
    }

    fn set_recommendation_images(&self, images: &[ImageElement]) {
        self.state.lock().recommendations = RecommendationView::Images(images.to_vec());
    }

    fn set_recommendation_text(&self, text: &str) {
        self.state.lock().recommendations = RecommendationView::Text(text.to_string());
    }

    fn alert(&self, message: &str) {
        self.state.lock().alerts.push(message.to_string());
    }

    fn focus_zip_input(&self) {
        self.state.lock().zip_focus_count += 1;
    }
}
