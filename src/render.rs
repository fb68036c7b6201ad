//! Component source rendering.
//!
//! Assembles one generated file from fixed template parts and the translated
//! markup. The parts differ per [`Target`] and live in a single table,
//! [`Templates::for_target`], so adding or changing a dialect is a table
//! edit, not a new branch.
//!
//! ## Document Layout
//!
//! ```text
//! import React from 'react'                         ← react import
//! import { Svg, Path } from 'react-native-svg'      ← native only, used tags
//!
//! const Icon = (props) => {                         ← declaration header
//!   return (
//!     <Svg viewBox="0 0 24 24" {...props}>          ← markup, indented
//!       <Path d="M0 0h24v24H0z" />
//!     </Svg>
//!   )
//! }                                                 ← declaration close
//!
//! export default Icon                               ← export
//! ```

use crate::translate::{Translation, native};
use crate::types::{Language, Platform, Target};

const MARKUP_INDENT: &str = "    ";
const NATIVE_SVG_MODULE: &str = "react-native-svg";

/// Fixed strings for one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Templates {
    pub react_import: &'static str,
    /// Parameter list of the component function, including parentheses.
    pub props_signature: &'static str,
    /// Whether the supporting react-native-svg import is emitted.
    pub native_import: bool,
    pub extension: &'static str,
}

const JS_WEB: Templates = Templates {
    react_import: "import React from 'react'",
    props_signature: "(props)",
    native_import: false,
    extension: "js",
};

const TS_WEB: Templates = Templates {
    react_import: "import * as React from 'react'",
    props_signature: "(props: React.SVGProps<SVGSVGElement>)",
    native_import: false,
    extension: "tsx",
};

const JS_NATIVE: Templates = Templates {
    react_import: "import React from 'react'",
    props_signature: "(props)",
    native_import: true,
    extension: "js",
};

const TS_NATIVE: Templates = Templates {
    react_import: "import * as React from 'react'",
    props_signature: "(props: React.ComponentProps<typeof Svg>)",
    native_import: true,
    extension: "tsx",
};

impl Templates {
    pub fn for_target(target: Target) -> &'static Templates {
        match (target.language, target.platform) {
            (Language::JavaScript, Platform::Web) => &JS_WEB,
            (Language::TypeScript, Platform::Web) => &TS_WEB,
            (Language::JavaScript, Platform::Native) => &JS_NATIVE,
            (Language::TypeScript, Platform::Native) => &TS_NATIVE,
        }
    }
}

/// Builds the source text of one component file.
#[derive(Debug)]
pub struct ComponentBuilder<'a> {
    templates: &'static Templates,
    identifier: &'a str,
    translation: &'a Translation,
}

impl<'a> ComponentBuilder<'a> {
    pub fn new(target: Target, identifier: &'a str, translation: &'a Translation) -> Self {
        Self {
            templates: Templates::for_target(target),
            identifier,
            translation,
        }
    }

    /// File extension for this dialect, without the dot.
    pub fn extension(&self) -> &'static str {
        self.templates.extension
    }

    /// `import { A, B } from 'react-native-svg'`, or `None` when not needed.
    pub fn native_import(&self) -> Option<String> {
        if !self.templates.native_import {
            return None;
        }
        let names: Vec<&str> = self
            .translation
            .used_tags
            .iter()
            .map(String::as_str)
            .filter(|tag| native::is_component(tag))
            .collect();
        if names.is_empty() {
            return None;
        }
        Some(format!(
            "import {{ {} }} from '{}'",
            names.join(", "),
            NATIVE_SVG_MODULE
        ))
    }

    pub fn declaration_header(&self) -> String {
        format!(
            "const {} = {} => {{\n  return (",
            self.identifier, self.templates.props_signature
        )
    }

    pub fn declaration_close(&self) -> &'static str {
        "  )\n}"
    }

    pub fn export(&self) -> String {
        format!("export default {}", self.identifier)
    }

    fn indented_markup(&self) -> String {
        self.translation
            .markup
            .lines()
            .map(|line| format!("{MARKUP_INDENT}{line}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The complete file contents, ending in a newline.
    pub fn build(&self) -> String {
        let mut doc = String::new();
        doc.push_str(self.templates.react_import);
        doc.push('\n');
        if let Some(import) = self.native_import() {
            doc.push_str(&import);
            doc.push('\n');
        }
        doc.push('\n');
        doc.push_str(&self.declaration_header());
        doc.push('\n');
        doc.push_str(&self.indented_markup());
        doc.push('\n');
        doc.push_str(self.declaration_close());
        doc.push_str("\n\n");
        doc.push_str(&self.export());
        doc.push('\n');
        doc
    }
}
