pub mod photo_detail;
pub mod photo_grid;

pub use photo_detail::photo_detail;
pub use photo_grid::photo_grid;
