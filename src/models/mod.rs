pub mod report;
pub mod outcome;

pub use report::{ListingOutcome, Reporte, ReportListResponse};
pub use outcome::{SubmissionOutcome, SubmitReportResponse};
