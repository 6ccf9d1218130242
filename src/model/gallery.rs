use super::PhotoRef;

/// Ordered photo list plus the photo currently shown full-size.
///
/// A selected photo is always present in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    photos: Vec<PhotoRef>,
    selected: Option<PhotoRef>,
}

impl GalleryState {
    pub fn new(photos: Vec<PhotoRef>) -> Self {
        Self {
            photos,
            selected: None,
        }
    }

    pub fn photos(&self) -> &[PhotoRef] {
        &self.photos
    }

    pub fn selected(&self) -> Option<&PhotoRef> {
        self.selected.as_ref()
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Index of the first occurrence of `photo`.
    pub fn position(&self, photo: &PhotoRef) -> Option<usize> {
        self.photos.iter().position(|candidate| candidate == photo)
    }

    /// Selects `photo`. Unknown refs are ignored and reported as `false`.
    pub fn select(&mut self, photo: &PhotoRef) -> bool {
        if self.position(photo).is_none() {
            log::debug!("Ignoring selection of unknown photo {photo}");
            return false;
        }
        self.selected = Some(photo.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn add(&mut self, photo: PhotoRef) {
        log::info!("Adding photo {photo}");
        self.photos.push(photo);
    }

    /// Removes the first occurrence of `photo`, clearing the selection when it
    /// pointed at it. Does nothing for unknown refs.
    pub fn remove(&mut self, photo: &PhotoRef) {
        let Some(index) = self.position(photo) else {
            return;
        };
        log::info!("Removing photo {photo}");
        self.photos.remove(index);
        if self.selected.as_ref() == Some(photo) {
            self.selected = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (GalleryState, PhotoRef, PhotoRef, PhotoRef) {
        let a = PhotoRef::new("a.png");
        let b = PhotoRef::new("b.png");
        let c = PhotoRef::new("c.png");
        let state = GalleryState::new(vec![a.clone(), b.clone(), c.clone()]);
        (state, a, b, c)
    }

    #[test]
    fn starts_without_selection() {
        let (state, ..) = sample();
        assert_eq!(state.len(), 3);
        assert!(state.selected().is_none());
    }

    #[test]
    fn select_known_photo() {
        let (mut state, _, b, _) = sample();
        assert!(state.select(&b));
        assert_eq!(state.selected(), Some(&b));
    }

    #[test]
    fn select_unknown_photo_is_ignored() {
        let (mut state, a, ..) = sample();
        state.select(&a);
        assert!(!state.select(&PhotoRef::new("missing.png")));
        assert_eq!(state.selected(), Some(&a));
    }

    #[test]
    fn clear_selection_returns_to_none() {
        let (mut state, a, ..) = sample();
        state.select(&a);
        state.clear_selection();
        assert!(state.selected().is_none());
    }

    #[test]
    fn add_appends_and_preserves_order() {
        let (mut state, a, b, c) = sample();
        let d = PhotoRef::new("d.png");
        state.add(d.clone());
        assert_eq!(state.photos(), &[a, b, c, d]);
    }

    #[test]
    fn add_duplicate_still_grows_by_one() {
        let (mut state, a, ..) = sample();
        state.add(a.clone());
        assert_eq!(state.len(), 4);
        assert_eq!(state.position(&a), Some(0));
    }

    #[test]
    fn removing_selected_photo_clears_selection() {
        let (mut state, a, b, c) = sample();
        state.select(&c);
        state.remove(&c);
        assert!(state.selected().is_none());
        assert_eq!(state.photos(), &[a, b]);
    }

    #[test]
    fn removing_other_photo_keeps_selection() {
        let (mut state, a, b, c) = sample();
        state.select(&b);
        state.remove(&a);
        assert_eq!(state.selected(), Some(&b));
        assert_eq!(state.photos(), &[b, c]);
    }

    #[test]
    fn remove_only_drops_first_occurrence() {
        let (mut state, a, b, c) = sample();
        state.add(a.clone());
        state.remove(&a);
        assert_eq!(state.photos(), &[b, c, a]);
    }

    #[test]
    fn remove_absent_photo_is_noop() {
        let (mut state, _, b, _) = sample();
        state.select(&b);
        let before = state.clone();
        state.remove(&PhotoRef::new("missing.png"));
        assert_eq!(state, before);
    }
}
