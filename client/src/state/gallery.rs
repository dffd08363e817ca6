//! Gallery items and the lightbox cursor.
//!
//! The cursor only exists while the lightbox is open. It can only be built
//! over a non-empty sequence with an in-range start index, and navigation
//! wraps modulo the sequence length, so `index` is always a valid position.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// One archival photograph in the gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub src: &'static str,
    pub caption: &'static str,
    pub source: &'static str,
}

impl GalleryItem {
    /// Attribution line shown under the lightbox image.
    #[must_use]
    pub fn attribution(&self) -> String {
        format!("Источник: {}", self.source)
    }
}

pub const GALLERY_ITEMS: &[GalleryItem] = &[
    GalleryItem {
        id: 1,
        src: "assets/images/gallery-1.jpg",
        caption: "Советские войска в наступлении, 1943 год",
        source: "Архив РГАСПИ",
    },
    GalleryItem {
        id: 2,
        src: "assets/images/gallery-2.jpg",
        caption: "Разрушенные здания Сталинграда, 1942 год",
        source: "Музей-панорама \"Сталинградская битва\"",
    },
    GalleryItem {
        id: 3,
        src: "assets/images/gallery-3.jpg",
        caption: "Портреты партизан из архива сопротивления",
        source: "РГАКФД",
    },
    GalleryItem {
        id: 4,
        src: "assets/images/gallery-4.jpg",
        caption: "Госпиталь Красного Креста, полевая медицина",
        source: "Музей Победы",
    },
    GalleryItem {
        id: 5,
        src: "assets/images/gallery-5.jpg",
        caption: "Минская операция, июль 1944 года",
        source: "Архив ВИМАИВиВС",
    },
    GalleryItem {
        id: 6,
        src: "assets/images/gallery-6.jpg",
        caption: "Берлинская операция, май 1945 года",
        source: "РГАКФД",
    },
];

/// Move `index` by `delta` positions within `len`, wrapping at both ends.
///
/// `len` must be non-zero.
#[must_use]
pub fn wrap_index(index: usize, delta: i32, len: usize) -> usize {
    let step = delta.unsigned_abs() as usize % len;
    if delta >= 0 {
        (index % len + step) % len
    } else {
        (index % len + len - step) % len
    }
}

/// Position inside the item sequence bound to an open lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxCursor {
    items: &'static [GalleryItem],
    index: usize,
}

impl LightboxCursor {
    /// Build a cursor, or `None` if `start` is not a position in `items`.
    #[must_use]
    pub fn new(items: &'static [GalleryItem], start: usize) -> Option<Self> {
        (start < items.len()).then_some(Self { items, index: start })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn current(&self) -> &'static GalleryItem {
        &self.items[self.index]
    }

    pub fn navigate(&mut self, delta: i32) {
        self.index = wrap_index(self.index, delta, self.items.len());
    }
}

/// Lightbox controller state provided to components through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub cursor: Option<LightboxCursor>,
}

impl LightboxState {
    /// Open the lightbox at `start`. Returns `false` (and stays closed) when
    /// `start` is out of range for `items`.
    pub fn open(&mut self, items: &'static [GalleryItem], start: usize) -> bool {
        self.cursor = LightboxCursor::new(items, start);
        self.cursor.is_some()
    }

    pub fn close(&mut self) {
        self.cursor = None;
    }

    /// Step the cursor; ignored while closed.
    pub fn navigate(&mut self, delta: i32) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.navigate(delta);
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    #[must_use]
    pub fn current(&self) -> Option<&'static GalleryItem> {
        self.cursor.as_ref().map(LightboxCursor::current)
    }
}
