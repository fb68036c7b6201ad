//! react-native-svg component table.
//!
//! React Native has no DOM, so every SVG element must map to a component
//! exported by `react-native-svg`. Elements missing from this table have no
//! native equivalent and make the file untranslatable for the native
//! dialect.

/// `(svg element, react-native-svg component)`, sorted by element name.
const COMPONENTS: &[(&str, &str)] = &[
    ("circle", "Circle"),
    ("clipPath", "ClipPath"),
    ("defs", "Defs"),
    ("ellipse", "Ellipse"),
    ("foreignObject", "ForeignObject"),
    ("g", "G"),
    ("image", "Image"),
    ("line", "Line"),
    ("linearGradient", "LinearGradient"),
    ("marker", "Marker"),
    ("mask", "Mask"),
    ("path", "Path"),
    ("pattern", "Pattern"),
    ("polygon", "Polygon"),
    ("polyline", "Polyline"),
    ("radialGradient", "RadialGradient"),
    ("rect", "Rect"),
    ("stop", "Stop"),
    ("svg", "Svg"),
    ("symbol", "Symbol"),
    ("text", "Text"),
    ("textPath", "TextPath"),
    ("tspan", "TSpan"),
    ("use", "Use"),
];

/// The react-native-svg component for an SVG element, if there is one.
pub fn component_for(element: &str) -> Option<&'static str> {
    COMPONENTS
        .binary_search_by(|(name, _)| name.cmp(&element))
        .ok()
        .map(|i| COMPONENTS[i].1)
}

/// Whether `component` is one of the names [`component_for`] can return.
pub fn is_component(component: &str) -> bool {
    COMPONENTS.iter().any(|(_, c)| *c == component)
}
