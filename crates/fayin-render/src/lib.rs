pub mod escape;
pub mod rows;
pub mod table;

pub use escape::escape_html;
pub use rows::{HeadwordCell, PhoneticCell, ResultRow, build_rows};
pub use table::render_results;
