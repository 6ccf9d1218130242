use crate::model::PhotoRef;
use rfd::AsyncFileDialog;

/// Filter used by the add button.
pub const IMAGE_MIME_FILTER: &str = "image/*";

const ANY_IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff", "tif", "ico",
];

/// File extensions accepted for a MIME-type filter. Empty means "no filter".
pub fn extensions_for_mime(mime: &str) -> &'static [&'static str] {
    match mime.trim().to_ascii_lowercase().as_str() {
        "image/*" => ANY_IMAGE_EXTENSIONS,
        "image/png" => &["png"],
        "image/jpeg" | "image/jpg" => &["jpg", "jpeg"],
        "image/gif" => &["gif"],
        "image/bmp" => &["bmp"],
        "image/webp" => &["webp"],
        "image/tiff" => &["tiff", "tif"],
        "image/x-icon" | "image/vnd.microsoft.icon" => &["ico"],
        _ => &[],
    }
}

/// Opens the native file dialog and resolves to the picked photo, or `None`
/// when the user cancels.
pub async fn pick_photo(mime: &str) -> Option<PhotoRef> {
    let extensions = extensions_for_mime(mime);
    let mut dialog = AsyncFileDialog::new().set_title("Pick a photo");
    if extensions.is_empty() {
        log::warn!("No extensions known for {mime}, showing all files");
    } else {
        dialog = dialog.add_filter("Images", extensions);
    }

    match dialog.pick_file().await {
        Some(handle) => {
            let photo = PhotoRef::from_path(handle.path());
            log::info!("Picked photo {photo}");
            Some(photo)
        }
        None => {
            log::debug!("Photo picker cancelled");
            None
        }
    }
}
