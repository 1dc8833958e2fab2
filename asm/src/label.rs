use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    error::Error,
    literal::{looks_numeric, parse_literal},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub address: u16,
    pub defined: bool,
    /// Line of the definition in effect.
    #[serde(skip)]
    pub line: usize,
}

/// Label name to address, in order of first definition.
#[derive(Debug, Clone, Default)]
pub struct Labels(IndexMap<String, Symbol>);

impl Labels {
    pub fn new() -> Self {
        Labels(IndexMap::new())
    }

    /// Last definition wins. Returns the overwritten symbol, if any.
    pub fn define(&mut self, name: &str, address: u16, line: usize) -> Option<Symbol> {
        let symbol = Symbol {
            name: name.to_string(),
            address,
            defined: true,
            line,
        };
        self.0.insert(name.to_string(), symbol)
    }

    pub fn get_val(&self, name: &str) -> Option<u16> {
        self.0
            .get(name)
            .filter(|symbol| symbol.defined)
            .map(|symbol| symbol.address)
    }

    /// Numeric literal first, then label lookup.
    pub fn resolve(&self, token: &str) -> Result<u16, Error> {
        if let Ok(value) = parse_literal(token) {
            return Ok(value as u16);
        }
        let token = token.trim();
        match self.get_val(token) {
            Some(address) => Ok(address),
            None if looks_numeric(token) => Err(Error::InvalidLiteral(token.to_string())),
            None => Err(Error::UndefinedSymbol(token.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.0.values()
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.iter().collect::<Vec<_>>())
    }
}
