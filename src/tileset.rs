//! The glyph catalogs a frontend can draw tile faces from, and the picker
//! that cycles between them on the new-game screen.

/// A named set of glyphs, one per face. The glyph names are from the
/// Material icon font, which is what the stock frontends render with; a
/// frontend with its own art can ignore these entirely and key off
/// [`Tile::face`](crate::Tile::face) instead.
pub struct TileSet {
    pub name: &'static str,
    pub glyphs: &'static [&'static str],
}

/// Every built-in tile set. Each carries one glyph per face of a standard
/// deal ([`gameplay::FACES`](crate::constants::gameplay::FACES)).
pub const TILESETS: &[TileSet] = &[
    TileSet {
        name: "Food and Drink",
        glyphs: &[
            "cake",
            "free_breakfast",
            "restaurant",
            "local_bar",
            "local_dining",
            "fastfood",
            "local_pizza",
            "local_drink",
        ],
    },
    TileSet {
        name: "Transport",
        glyphs: &[
            "directions_bike",
            "directions_boat",
            "directions_bus",
            "directions_car",
            "flight",
            "local_shipping",
            "tram",
            "train",
        ],
    },
    TileSet {
        name: "Emoticons",
        glyphs: &[
            "mood",
            "mood_bad",
            "sentiment_dissatisfied",
            "sentiment_satisfied",
            "sentiment_very_dissatisfied",
            "thumb_down",
            "thumb_up",
            "favorite",
        ],
    },
];

/// Tracks which [`TileSet`] is selected, with wrapping previous/next
/// controls for the two arrows on the new-game screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetPicker {
    current: usize,
}

impl SetPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected set.
    pub fn current(&self) -> &'static TileSet {
        &TILESETS[self.current]
    }

    /// Step to the next set, wrapping past the end.
    pub fn next(&mut self) {
        self.current = if self.current == TILESETS.len() - 1 {
            0
        } else {
            self.current + 1
        };
    }

    /// Step to the previous set, wrapping past the start.
    pub fn prev(&mut self) {
        self.current = if self.current == 0 {
            TILESETS.len() - 1
        } else {
            self.current - 1
        };
    }

    /// The glyph the current set draws for a face.
    pub fn glyph(&self, face: usize) -> &'static str {
        self.current().glyphs[face]
    }
}
