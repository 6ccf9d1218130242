use super::{GalleryState, PhotoRef};

/// Photo before the current selection, if any.
pub fn previous(state: &GalleryState) -> Option<&PhotoRef> {
    let index = selected_index(state)?;
    index.checked_sub(1).and_then(|i| state.photos().get(i))
}

/// Photo after the current selection, if any.
pub fn next(state: &GalleryState) -> Option<&PhotoRef> {
    let index = selected_index(state)?;
    state.photos().get(index + 1)
}

fn selected_index(state: &GalleryState) -> Option<usize> {
    state.selected().and_then(|photo| state.position(photo))
}

/// Which of the two screens the gallery is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Grid,
    Detail(&'a PhotoRef),
}

impl<'a> Screen<'a> {
    pub fn of(state: &'a GalleryState) -> Self {
        match state.selected() {
            Some(photo) => Screen::Detail(photo),
            None => Screen::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<PhotoRef> {
        names.iter().map(|name| PhotoRef::new(*name)).collect()
    }

    #[test]
    fn middle_photo_has_both_neighbours() {
        let photos = refs(&["A", "B", "C"]);
        let mut state = GalleryState::new(photos.clone());
        state.select(&photos[1]);
        assert_eq!(previous(&state), Some(&photos[0]));
        assert_eq!(next(&state), Some(&photos[2]));
    }

    #[test]
    fn first_photo_has_no_previous() {
        let photos = refs(&["A", "B", "C"]);
        let mut state = GalleryState::new(photos.clone());
        state.select(&photos[0]);
        assert_eq!(previous(&state), None);
        assert_eq!(next(&state), Some(&photos[1]));
    }

    #[test]
    fn last_photo_has_no_next() {
        let photos = refs(&["A", "B", "C"]);
        let mut state = GalleryState::new(photos.clone());
        state.select(&photos[2]);
        assert_eq!(previous(&state), Some(&photos[1]));
        assert_eq!(next(&state), None);
    }

    #[test]
    fn single_photo_has_no_neighbours() {
        let photos = refs(&["A"]);
        let mut state = GalleryState::new(photos.clone());
        state.select(&photos[0]);
        assert_eq!(previous(&state), None);
        assert_eq!(next(&state), None);
    }

    #[test]
    fn nothing_selected_means_no_neighbours() {
        let state = GalleryState::new(refs(&["A", "B"]));
        assert_eq!(previous(&state), None);
        assert_eq!(next(&state), None);
    }

    #[test]
    fn neighbours_follow_index_arithmetic_for_every_position() {
        let photos = refs(&["A", "B", "C", "D", "E"]);
        let mut state = GalleryState::new(photos.clone());
        for (i, photo) in photos.iter().enumerate() {
            state.select(photo);
            let expected_previous = if i > 0 { photos.get(i - 1) } else { None };
            assert_eq!(previous(&state), expected_previous);
            assert_eq!(next(&state), photos.get(i + 1));
        }
    }

    #[test]
    fn screen_tracks_selection() {
        let photos = refs(&["A", "B"]);
        let mut state = GalleryState::new(photos.clone());
        assert_eq!(Screen::of(&state), Screen::Grid);
        state.select(&photos[1]);
        assert_eq!(Screen::of(&state), Screen::Detail(&photos[1]));
        state.remove(&photos[1]);
        assert_eq!(Screen::of(&state), Screen::Grid);
    }
}
