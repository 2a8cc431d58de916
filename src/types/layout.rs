//! Button sizes and the row layout used when baking buttons into a background.

use serde::{Deserialize, Serialize};

/// Button geometry shared by icon rendering and background baking.
///
/// The 8px spacing is inherited from existing themes and was never measured
/// precisely; it stays configurable but the default must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonLayout {
    /// Edge length of the big (OS) button.
    pub big: u32,
    /// Edge length of the small (other) button.
    pub small: u32,
    /// Horizontal gap between neighbouring buttons.
    pub spacing: u32,
    /// Vertical gap between the big row and the small row.
    pub row_gap: u32,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self {
            big: 256,
            small: 64,
            spacing: 8,
            row_gap: 16,
        }
    }
}

/// How many buttons to bake into each row of the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonCounts {
    pub big: u32,
    pub small: u32,
}

impl ButtonCounts {
    /// The same count for both rows.
    pub fn uniform(count: u32) -> Self {
        Self {
            big: count,
            small: count,
        }
    }
}

/// Placement of one row of equally sized buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub x: i64,
    pub y: i64,
    pub size: u32,
    pub step: i64,
    pub count: u32,
}

impl Row {
    /// Top-left corner of every button in the row, left to right.
    pub fn positions(self) -> impl Iterator<Item = (i64, i64)> {
        let Row { x, y, step, .. } = self;
        (0..self.count as i64).map(move |i| (x + step * i, y))
    }
}

impl ButtonLayout {
    /// The big row, vertically centred on the canvas.
    pub fn big_row(&self, width: u32, height: u32, count: u32) -> Row {
        let y = (height as i64 - self.big as i64) / 2;
        self.row(width, y, self.big, count)
    }

    /// The small row, placed below the big one.
    pub fn small_row(&self, width: u32, height: u32, count: u32) -> Row {
        let y = (height as i64 - self.small as i64) / 2 + self.big as i64 + self.row_gap as i64;
        self.row(width, y, self.small, count)
    }

    fn row(&self, width: u32, y: i64, size: u32, count: u32) -> Row {
        let spacing = self.spacing as i64;
        let step = size as i64 + spacing;
        // Signed division truncates towards zero, so wide rows may start off-canvas.
        let x = (width as i64 + spacing - step * count as i64) / 2;
        Row {
            x,
            y,
            size,
            step,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn table(layout: &ButtonLayout, width: u32, height: u32, count: u32) -> String {
        let fmt = |row: Row| {
            row.positions()
                .map(|(x, y)| format!("{},{}", x, y))
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "big   {}\nsmall {}",
            fmt(layout.big_row(width, height, count)),
            fmt(layout.small_row(width, height, count))
        )
    }

    #[test]
    fn test_default_layout() {
        let layout = ButtonLayout::default();
        assert_eq!(layout.big, 256);
        assert_eq!(layout.small, 64);
        assert_eq!(layout.spacing, 8);
        assert_eq!(layout.row_gap, 16);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let layout = ButtonLayout::default();
        assert_eq!(layout.big_row(1920, 1080, 0).positions().next(), None);
        assert_eq!(layout.small_row(1920, 1080, 0).positions().next(), None);
    }

    #[test]
    fn test_single_button_is_centred() {
        let layout = ButtonLayout::default();
        for (w, h) in [(1920, 1080), (1921, 1081), (640, 480)] {
            let big = layout.big_row(w, h, 1);
            assert_eq!(big.positions().collect::<Vec<_>>(), vec![((w as i64 - 256) / 2, (h as i64 - 256) / 2)]);

            let small = layout.small_row(w, h, 1);
            assert_eq!(
                small.positions().collect::<Vec<_>>(),
                vec![((w as i64 - 64) / 2, (h as i64 - 64) / 2 + 256 + 16)]
            );
        }
    }

    #[test]
    fn test_three_buttons_on_1080p() {
        let layout = ButtonLayout::default();
        assert_snapshot!(table(&layout, 1920, 1080, 3), @r"
        big   568,412 832,412 1096,412
        small 856,780 928,780 1000,780
        ");
    }

    #[test]
    fn test_overfull_row_starts_off_canvas() {
        let layout = ButtonLayout::default();
        // 10 big buttons need 2632px; the row starts left of the canvas.
        let row = layout.big_row(1920, 1080, 10);
        assert_eq!(row.x, (1920 + 8 - 264 * 10) / 2);
        assert!(row.x < 0);
        assert_eq!(row.positions().count(), 10);
    }

    #[test]
    fn test_huge_row_is_lazy() {
        let layout = ButtonLayout::default();
        let row = layout.big_row(1920, 1080, u32::MAX);

        let mut positions = row.positions();
        assert_eq!(positions.next(), Some((row.x, 412)));
        assert_eq!(positions.next(), Some((row.x + 264, 412)));
        assert_eq!(row.positions().size_hint().0, u32::MAX as usize);
    }

    #[test]
    fn test_parse_partial_layout() {
        let layout: ButtonLayout = serde_yaml::from_str("spacing: 12").unwrap();
        assert_eq!(layout.spacing, 12);
        assert_eq!(layout.big, 256);
    }
}
