pub mod gallery;
pub mod navigation;
pub mod photo;

pub use gallery::GalleryState;
pub use navigation::Screen;
pub use photo::PhotoRef;
