pub mod report_form_viewmodel;
pub mod report_list_viewmodel;

pub use report_form_viewmodel::ReportFormViewModel;
pub use report_list_viewmodel::ReportListViewModel;
