//! Named color tables.
//!
//! CSS names are recognized by the parser and reported by the formatter;
//! their values come from `csscolorparser`. A short table of Spanish basic
//! names is recognized by the parser only.

use chromora_common::Color;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The CSS Color Module Level 4 named colors.
///
/// Order matters for reverse lookup: where two names share a value
/// (`aqua`/`cyan`, `fuchsia`/`magenta`, `gray`/`grey`), the first wins.
pub const CSS_COLOR_NAMES: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

/// Spanish basic color names accepted as input.
///
/// `verde`, `rosa` and `morado` differ from their nearest CSS names.
pub const SPANISH_NAMED_COLORS: &[(&str, &str)] = &[
    ("rojo", "#ff0000"),
    ("verde", "#00ff00"),
    ("azul", "#0000ff"),
    ("amarillo", "#ffff00"),
    ("naranja", "#ffa500"),
    ("rosa", "#ff69b4"),
    ("morado", "#800080"),
    ("violeta", "#ee82ee"),
    ("blanco", "#ffffff"),
    ("negro", "#000000"),
    ("gris", "#808080"),
    ("marron", "#a52a2a"),
    ("cian", "#00ffff"),
    ("turquesa", "#40e0d0"),
    ("oro", "#ffd700"),
    ("plateado", "#c0c0c0"),
];

static CSS_COLORS: LazyLock<Vec<(&'static str, Color)>> = LazyLock::new(|| {
    CSS_COLOR_NAMES
        .iter()
        .filter_map(|&name| css_value(name).map(|color| (name, color)))
        .collect()
});

static BY_NAME: LazyLock<HashMap<&'static str, Color>> = LazyLock::new(|| {
    let spanish = SPANISH_NAMED_COLORS
        .iter()
        .filter_map(|&(name, hex)| css_value(hex).map(|color| (name, color)));
    CSS_COLORS.iter().copied().chain(spanish).collect()
});

static BY_COLOR: LazyLock<HashMap<Color, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::with_capacity(CSS_COLORS.len());
    for &(name, color) in CSS_COLORS.iter() {
        map.entry(color).or_insert(name);
    }
    map
});

fn css_value(input: &str) -> Option<Color> {
    let [r, g, b, _] = csscolorparser::parse(input).ok()?.to_rgba8();
    Some(Color::from_rgb(r, g, b))
}

/// Look up a lowercase color name in the CSS and Spanish tables.
pub fn lookup(name: &str) -> Option<Color> {
    BY_NAME.get(name).copied()
}

/// The CSS name of a color, if it is exactly one of the named colors.
pub fn name_of(color: Color) -> Option<&'static str> {
    BY_COLOR.get(&color.opaque()).copied()
}
