pub mod action_button;

pub use action_button::{
    add_photo_button, delete_photo_button, thumbnail_button_style, FAB_CLEARANCE, FAB_MARGIN,
};
