//! Dioxus RSX components for the walking-survey app.

mod dataset_info;
mod error_display;
mod loading_spinner;
mod scatter_plot;
mod site_detail;
mod site_map;
mod site_summary_text;
mod site_title;

pub use dataset_info::DatasetInfo;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use scatter_plot::ScatterPlot;
pub use site_detail::SiteDetail;
pub use site_map::SiteMap;
pub use site_summary_text::SiteSummaryText;
pub use site_title::SiteTitle;
