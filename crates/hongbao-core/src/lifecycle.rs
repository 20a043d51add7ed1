/// Why the page is being hidden, read from `PageTransitionEvent.persisted`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHide {
    /// Kept in the back/forward cache; the running view survives a restore.
    Cached,
    Unloading,
}

impl PageHide {
    pub fn from_persisted(persisted: bool) -> Self {
        if persisted {
            PageHide::Cached
        } else {
            PageHide::Unloading
        }
    }

    /// Only an unloading page releases the fireworks view.
    pub fn tears_down(self) -> bool {
        self == PageHide::Unloading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unloading_tears_down() {
        assert_eq!(PageHide::from_persisted(true), PageHide::Cached);
        assert!(!PageHide::from_persisted(true).tears_down());
        assert_eq!(PageHide::from_persisted(false), PageHide::Unloading);
        assert!(PageHide::from_persisted(false).tears_down());
    }
}
