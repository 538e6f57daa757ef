//! Module restriction for split APKs.

use std::collections::BTreeSet;

use crate::matcher::errors::MatchError;

/// A non-empty set of module names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedModules {
    names: BTreeSet<String>,
}

impl AllowedModules {
    /// Create an allow-list. Fails if `modules` is empty.
    pub fn new<I, S>(modules: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = modules.into_iter().map(Into::into).collect();

        if names.is_empty() {
            return Err(MatchError::InvalidConfiguration {
                reason: "set of allowed split modules cannot be empty".to_string(),
            });
        }

        Ok(AllowedModules { names })
    }

    pub fn contains(&self, module_name: &str) -> bool {
        self.names.contains(module_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

/// Which modules split APKs may come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModuleFilter {
    /// No restriction
    #[default]
    All,
    /// Only modules in the allow-list
    Only(AllowedModules),
}

impl ModuleFilter {
    /// Build a filter from an optional list of names.
    ///
    /// `None` means no restriction. `Some` with no names is rejected.
    pub fn from_optional<I, S>(modules: Option<I>) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match modules {
            None => Ok(ModuleFilter::All),
            Some(modules) => Ok(ModuleFilter::Only(AllowedModules::new(modules)?)),
        }
    }

    pub fn allows(&self, module_name: &str) -> bool {
        match self {
            ModuleFilter::All => true,
            ModuleFilter::Only(allowed) => allowed.contains(module_name),
        }
    }

    pub fn is_restricted(&self) -> bool {
        matches!(self, ModuleFilter::Only(_))
    }
}
