//! The icon seam. Several fragments interpolate inline SVG icons (person,
//! comment, watch, archive, edit, chevrons); the SVG subsystem itself lives
//! with the theme, so fragments only see this trait.

/// Supplies inline SVG markup by icon name and pixel size. Implementations
/// own escaping of whatever they return; fragments interpolate the markup
/// verbatim.
pub trait IconSet {
    fn icon(&self, name: &str, size: u32) -> String;
}

/// The default [`IconSet`]: renders no icon markup at all.
pub struct NoIcons;

impl IconSet for NoIcons {
    fn icon(&self, _name: &str, _size: u32) -> String {
        String::new()
    }
}
