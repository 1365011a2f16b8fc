use crate::models::FontMapping;

/// Fonts bundled with the site, in copy order
pub const FONTS: &[FontMapping] = &[
    // JetBrains Mono
    FontMapping::new(
        "@fontsource/jetbrains-mono/files/jetbrains-mono-latin-300-normal.woff2",
        "JetBrainsMono-Light.woff2",
    ),
    FontMapping::new(
        "@fontsource/jetbrains-mono/files/jetbrains-mono-latin-400-normal.woff2",
        "JetBrainsMono-Regular.woff2",
    ),
    FontMapping::new(
        "@fontsource/jetbrains-mono/files/jetbrains-mono-latin-500-normal.woff2",
        "JetBrainsMono-Medium.woff2",
    ),
    FontMapping::new(
        "@fontsource/jetbrains-mono/files/jetbrains-mono-latin-700-normal.woff2",
        "JetBrainsMono-Bold.woff2",
    ),
    // Space Mono
    FontMapping::new(
        "@fontsource/space-mono/files/space-mono-latin-400-normal.woff2",
        "SpaceMono-Regular.woff2",
    ),
    FontMapping::new(
        "@fontsource/space-mono/files/space-mono-latin-700-normal.woff2",
        "SpaceMono-Bold.woff2",
    ),
    // Playfair Display
    FontMapping::new(
        "@fontsource/playfair-display/files/playfair-display-latin-400-normal.woff2",
        "PlayfairDisplay-Regular.woff2",
    ),
    FontMapping::new(
        "@fontsource/playfair-display/files/playfair-display-latin-700-normal.woff2",
        "PlayfairDisplay-Bold.woff2",
    ),
    FontMapping::new(
        "@fontsource/playfair-display/files/playfair-display-latin-900-normal.woff2",
        "PlayfairDisplay-Black.woff2",
    ),
];
