//! Lightbox controller
//!
//! Two-state machine for the modal image viewer. The open state carries the
//! active image source, so "source set iff open" holds by construction.

/// What a click inside the lightbox landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the image
    Backdrop,
    /// The enlarged image itself
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { active_src: String },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open { .. })
    }

    pub fn active_src(&self) -> Option<&str> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open { active_src } => Some(active_src),
        }
    }

    /// Background scrolling is suspended exactly while the viewer is open.
    /// The iced overlay reads this to decide whether it swallows wheel events.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Show an image. Re-targets directly if already open.
    pub fn open(&mut self, src: impl Into<String>) {
        let active_src = src.into();
        tracing::debug!("🖼️  Lightbox open: {}", active_src);
        *self = Lightbox::Open { active_src };
    }

    /// Hide the viewer. Closing a closed lightbox does nothing.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("🖼️  Lightbox closed");
        }
        *self = Lightbox::Closed;
    }

    /// Only a click on the backdrop itself dismisses
    pub fn dismiss(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }

    /// Escape closes an open viewer and is ignored otherwise
    pub fn escape(&mut self) {
        if self.is_open() {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(lightbox: &Lightbox) {
        assert_eq!(lightbox.is_open(), lightbox.active_src().is_some());
        assert_eq!(lightbox.scroll_locked(), lightbox.is_open());
    }

    #[test]
    fn test_starts_closed() {
        let lightbox = Lightbox::default();
        assert!(!lightbox.is_open());
        assert_invariant(&lightbox);
    }

    #[test]
    fn test_open_retarget_close() {
        let mut lightbox = Lightbox::default();

        lightbox.open("a.jpg");
        assert_eq!(lightbox.active_src(), Some("a.jpg"));
        assert!(lightbox.is_open());

        // No intermediate closed state
        lightbox.open("b.jpg");
        assert_eq!(
            lightbox,
            Lightbox::Open {
                active_src: "b.jpg".to_string()
            }
        );

        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
        assert_eq!(lightbox.active_src(), None);

        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut lightbox = Lightbox::default();
        lightbox.escape();
        assert_eq!(lightbox, Lightbox::Closed);

        lightbox.open("a.jpg");
        lightbox.escape();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_only_backdrop_click_dismisses() {
        let mut lightbox = Lightbox::default();
        lightbox.open("a.jpg");

        lightbox.dismiss(ClickTarget::Image);
        assert_eq!(lightbox.active_src(), Some("a.jpg"));

        lightbox.dismiss(ClickTarget::Backdrop);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_invariant_holds_across_sequences() {
        let mut lightbox = Lightbox::default();
        let steps: [fn(&mut Lightbox); 6] = [
            |l| l.open("a.jpg"),
            |l| l.escape(),
            |l| l.dismiss(ClickTarget::Backdrop),
            |l| l.open("b.jpg"),
            |l| l.dismiss(ClickTarget::Image),
            |l| l.close(),
        ];

        // Every ordered pair of steps, applied repeatedly
        for first in steps {
            for second in steps {
                for _ in 0..2 {
                    first(&mut lightbox);
                    assert_invariant(&lightbox);
                    second(&mut lightbox);
                    assert_invariant(&lightbox);
                }
            }
        }
    }
}
