//! Current scroll offset of the document, whichever accessor reports it

use crate::platform::{Axis, Document};

/// Read the scroll offset along `axis`.
///
/// Accessors are tried in order (window page offset, root element, body).
/// A zero reading falls through to the next accessor since older engines
/// keep one of them at zero while another tracks the real offset.
pub fn offset<D: Document + ?Sized>(document: &D, axis: Axis) -> f64 {
    [
        document.page_offset(axis),
        document.root_offset(axis),
        document.body_offset(axis),
    ]
    .into_iter()
    .flatten()
    .find(|value| *value != 0.0)
    .unwrap_or(0.0)
}

#[inline]
pub fn x<D: Document + ?Sized>(document: &D) -> f64 {
    offset(document, Axis::Horizontal)
}

#[inline]
pub fn y<D: Document + ?Sized>(document: &D) -> f64 {
    offset(document, Axis::Vertical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeDocument;

    #[test]
    fn test_page_offset_wins() {
        let mut doc = FakeDocument::new(1000.0, 800.0);
        doc.scroll_y = 120.0;
        doc.root_y = Some(7.0);
        assert_eq!(y(&doc), 120.0);
    }

    #[test]
    fn test_falls_back_to_root_then_body() {
        let mut doc = FakeDocument::new(1000.0, 800.0);
        doc.page_offsets_supported = false;
        doc.root_y = Some(0.0);
        doc.body_y = Some(42.0);
        assert_eq!(y(&doc), 42.0);

        doc.root_y = Some(30.0);
        assert_eq!(y(&doc), 30.0);
    }

    #[test]
    fn test_defaults_to_zero() {
        let mut doc = FakeDocument::new(1000.0, 800.0);
        doc.page_offsets_supported = false;
        assert_eq!(x(&doc), 0.0);
        assert_eq!(y(&doc), 0.0);
    }
}
