use crate::model::PhotoRef;

#[derive(Debug, Clone)]
pub enum Message {
    PickPhoto,
    PhotoPicked(Option<PhotoRef>),
    OpenPhoto(PhotoRef),
    ShowPrevious,
    ShowNext,
    BackToGrid,
    DeletePhoto(PhotoRef),
    DeleteSelected,
}
