// Report layer: the HTML renderer and the bundled fallback roster. Both sit
// outside the normalization core and only consume `ReportRecord`s.

pub mod html;
pub mod seed;
