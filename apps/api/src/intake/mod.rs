// Intake: HTML form / JSON bodies -> ResumeRecord, and the handlers that
// hand the record to layout + render.

pub mod extract;
pub mod form;
pub mod handlers;
