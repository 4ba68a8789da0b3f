//! Generation configuration
//!
//! Built once from the command line and passed explicitly through the
//! pipeline. The renderer derives every identifier it emits from here.

use std::path::PathBuf;

use crate::error::EmbedError;

/// Default module name for the generated code
pub const DEFAULT_PACKAGE: &str = "main";

/// Default identifier for the generated manifest static
pub const DEFAULT_VAR: &str = "assets";

/// Strict and reserved keywords that cannot name a module or static
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Where the generated source goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Standard output
    #[default]
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl Output {
    /// Parse a `--filename` value; `-` and the empty string mean stdout
    #[must_use]
    pub fn from_arg(value: &str) -> Self {
        match value {
            "" | "-" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => write!(f, "stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Destination of the generated source
    pub output: Output,
    /// Name of the module wrapping the generated items
    pub package: String,
    /// Identifier of the manifest static
    pub var: String,
    /// Emit the `HttpFileSystem`-shaped `open`
    pub include_http: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: Output::Stdout,
            package: DEFAULT_PACKAGE.to_string(),
            var: DEFAULT_VAR.to_string(),
            include_http: false,
        }
    }
}

impl Config {
    /// Create a config writing to stdout with the given names
    #[must_use]
    pub fn new(package: &str, var: &str) -> Self {
        Self {
            package: package.to_string(),
            var: var.to_string(),
            ..Self::default()
        }
    }

    /// Set the destination
    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Enable or disable the HTTP-compatible `open`
    #[must_use]
    pub const fn with_include_http(mut self, include_http: bool) -> Self {
        self.include_http = include_http;
        self
    }

    /// Check that the package and var names are usable identifiers
    pub fn validate(&self) -> Result<(), EmbedError> {
        check_identifier("package", &self.package)?;
        check_identifier("var", &self.var)
    }

    /// Prefix for the generated type names, in UpperCamelCase
    ///
    /// `assets` becomes `Assets`, `web_assets` becomes `WebAssets`.
    #[must_use]
    pub fn type_prefix(&self) -> String {
        let prefix: String = self
            .var
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect::<String>()
                })
            })
            .collect();

        if prefix.is_empty() { "Embedded".to_string() } else { prefix }
    }

    /// Identifier of the static holding the data buffer
    #[must_use]
    pub fn data_ident(&self) -> String {
        format!("{}_DATA", self.var.trim_matches('_').to_uppercase())
    }

    /// Whether the manifest static is public outside the crate
    ///
    /// A leading upper-case letter exports it, anything else keeps it
    /// `pub(crate)`.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.var.chars().next().is_some_and(char::is_uppercase)
    }
}

fn check_identifier(kind: &'static str, name: &str) -> Result<(), EmbedError> {
    let reject = |reason| {
        Err(EmbedError::InvalidIdentifier {
            kind,
            name: name.to_string(),
            reason,
        })
    };

    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return reject("empty");
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return reject("must start with a letter or underscore");
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return reject("may only contain ASCII letters, digits and underscores");
    }
    if name == "_" {
        return reject("a lone underscore is not an identifier");
    }
    if KEYWORDS.contains(&name) {
        return reject("is a Rust keyword");
    }
    Ok(())
}
