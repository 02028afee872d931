mod experiment_report;
mod landing;

pub use experiment_report::ExperimentReportPage;
pub use landing::LandingPage;
