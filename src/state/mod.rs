/// State management module
///
/// This module owns all workflow state, including:
/// - The current uploaded image and its preview (ingest.rs)
/// - The analysis request lifecycle (session.rs)
/// - The decoded analysis report (report.rs)
/// - The image comparison view mode (view_mode.rs)

pub mod ingest;
pub mod report;
pub mod session;
pub mod view_mode;
