// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for plot rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub axis_label: skia::Color,
    pub line_stroke: skia::Color,
    pub focus: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            // steelblue, the classic line-chart stroke
            line_stroke: skia::Color::from_argb(255, 70, 130, 180),
            focus: skia::Color::from_argb(255, 70, 130, 180),
            tooltip_fill: skia::Color::from_argb(230, 255, 255, 240),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            line_stroke: skia::Color::from_argb(255, 96, 156, 230),
            focus: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_fill: skia::Color::from_argb(230, 40, 40, 48),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            focus: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            tooltip_fill: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("no-such-theme").name, "light");
    }
}
