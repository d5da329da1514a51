//! `${VAR}` substitution in raw endpoint configuration strings.
//!
//! Credentials stay out of the endpoint structure: the list references
//! `${TOKEN}` and the value is supplied through the variable source at load
//! time. Resolution happens on the raw string, before any parsing.

use thiserror::Error;

/// Lookup source for template variables.
pub trait VarSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// Process-environment variable source.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVars;

impl VarSource for EnvVars {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed in-memory variable source.
#[derive(Debug, Clone, Default)]
pub struct MapVars(pub std::collections::BTreeMap<String, String>);

impl MapVars {
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }
}

impl VarSource for MapVars {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template variable ${{{name}}} is referenced but {name} is not defined")]
    Unresolved { name: String },
    #[error("template variable name must not be empty")]
    EmptyName,
    #[error("unclosed template variable (missing '}}')")]
    Unclosed,
}

/// Whether `input` contains at least one `${...}` reference.
pub fn has_vars(input: &str) -> bool {
    input
        .find("${")
        .is_some_and(|start| input[start..].contains('}'))
}

/// Replace every `${NAME}` in `input` with the value from `vars`.
///
/// An undefined variable is a hard error carrying the variable name; input
/// without references passes through unchanged. `$` not followed by `{` is
/// literal.
pub fn resolve(input: &str, vars: &dyn VarSource) -> Result<String, TemplateError> {
    if !input.contains("${") {
        return Ok(input.to_string());
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            out.push(ch);
            continue;
        }
        chars.next();

        let mut name = String::new();
        let mut closed = false;
        for n in chars.by_ref() {
            if n == '}' {
                closed = true;
                break;
            }
            name.push(n);
        }

        if !closed {
            return Err(TemplateError::Unclosed);
        }
        if name.is_empty() {
            return Err(TemplateError::EmptyName);
        }

        match vars.get(&name) {
            Some(value) => out.push_str(&value),
            None => return Err(TemplateError::Unresolved { name }),
        }
    }

    Ok(out)
}
