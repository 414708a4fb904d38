//! Built-in icon names, grouped by style like the Material icon set.

pub mod filled {
    use sprout_core::ImageVector;

    pub const EXPAND_MORE: ImageVector = ImageVector {
        name: "ExpandMore",
    };
    pub const EXPAND_LESS: ImageVector = ImageVector {
        name: "ExpandLess",
    };
}
