//! Geometry of pinned section headers.
//!
//! Offsets are relative to the viewport top. A sticky header sits at its natural
//! position until that scrolls above the viewport; it then stays pinned at the top
//! until the end of its section pushes it out.

/// Where a header is drawn and reported for one layout pass.
pub fn header_offset(natural_top: f32, section_bottom: f32, header_height: f32, sticky: bool) -> f32 {
    if !sticky || natural_top >= 0.0 {
        return natural_top;
    }
    (section_bottom - header_height).min(0.0).max(natural_top)
}

/// True when the header is currently drawn detached from its natural position.
pub fn is_pinned(natural_top: f32, section_bottom: f32, header_height: f32, sticky: bool) -> bool {
    header_offset(natural_top, section_bottom, header_height, sticky) != natural_top
}
