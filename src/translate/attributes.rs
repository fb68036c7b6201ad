//! Attribute name and value translation.
//!
//! SVG attributes are kebab-case (`stroke-width`) or namespaced
//! (`xlink:href`); React props are camelCase. A handful of names collide with
//! JavaScript keywords or DOM property names and are renamed outright.

/// Names that are not a mechanical camelCase of the SVG attribute.
const RENAMED: &[(&str, &str)] = &[
    ("class", "className"),
    ("crossorigin", "crossOrigin"),
    ("for", "htmlFor"),
    ("tabindex", "tabIndex"),
];

/// Characters that force a value into a `{"..."}` expression.
const EXPRESSION_CHARS: &[char] = &['"', '\\', '&', '{', '}', '\n', '\r'];

/// Translate an SVG attribute name to its React prop name.
///
/// `data-*` and `aria-*` keep their hyphenated form, which React passes
/// through unchanged. Names that are already camelCase come back as-is.
pub fn prop_name(name: &str) -> String {
    if let Some((_, renamed)) = RENAMED.iter().find(|(from, _)| *from == name) {
        return (*renamed).to_string();
    }
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }
    camel_case(name)
}

/// Join `-` and `:` separated words into camelCase.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, word) in name
        .split(['-', ':'])
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

/// Render an attribute value as the right-hand side of a JSX attribute.
pub fn prop_value(value: &str) -> String {
    if value.contains(EXPRESSION_CHARS) {
        format!("{{{}}}", js_string(value))
    } else {
        format!("\"{value}\"")
    }
}

/// A double-quoted JavaScript string literal.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Translate an inline `style` declaration list into a JSX style object.
///
/// Returns `None` when the declaration list is empty.
///
/// ```text
/// "stop-color:#fff; stop-opacity:.5"  →  {{ stopColor: "#fff", stopOpacity: ".5" }}
/// ```
pub fn style_object(style: &str) -> Option<String> {
    let entries: Vec<String> = declarations(style)
        .into_iter()
        .filter_map(|decl| decl.split_once(':'))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| format!("{}: {}", style_key(key), js_string(value)))
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(format!("{{{{ {} }}}}", entries.join(", ")))
    }
}

/// Split a declaration list on `;` outside parentheses and quotes.
fn declarations(style: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;

    for (i, c) in style.char_indices() {
        match (quote, c) {
            (Some(q), _) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                out.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    out.push(&style[start..]);
    out
}

/// Style object key for a CSS property name.
fn style_key(property: &str) -> String {
    if property.starts_with("--") {
        // Custom properties keep their exact name
        return js_string(property);
    }
    match property.strip_prefix('-') {
        // Vendor prefixes: -webkit-x → WebkitX, -ms-x → msX
        Some(vendor) if vendor.starts_with("ms-") => camel_case(vendor),
        Some(vendor) => {
            let camel = camel_case(vendor);
            let mut chars = camel.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => camel,
            }
        }
        None => camel_case(property),
    }
}
