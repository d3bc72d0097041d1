pub mod report_form;
pub mod report_list;

pub use report_form::render_report_form;
pub use report_list::render_report_list;
