// Layout: résumé record + template -> positioned draw operations on a single
// US letter page. Pure and synchronous; rendering the plan to PDF lives in
// `render`.

pub mod cursor;
pub mod engine;
pub mod template;

// Re-export the public API consumed by other modules (render, intake handlers).
pub use engine::{layout_resume, DrawOp, LayoutPlan, LayoutWarning};
pub use template::{Rgb, StandardFont, TemplateName, TemplateStyle};
