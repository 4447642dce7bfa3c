use crate::functions::register_defaults;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named unary function: one number in, one number out.
pub type Function = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Name resolution used by the evaluator. Function lookup always wins over
/// variable lookup for the same name.
pub trait Symbols {
    fn function(&self, name: &str) -> Option<&Function>;
    fn variable(&self, name: &str) -> Option<f64>;
}

/// Case-sensitive registry of variables and unary functions. A name may live
/// in both maps at once.
#[derive(Clone)]
pub struct SymbolTable {
    variables: HashMap<String, f64>,
    functions: HashMap<String, Function>,
}

impl SymbolTable {
    /// A table seeded with `e`, `pi` and the default math functions.
    pub fn new() -> Self {
        let mut table = Self::empty();
        register_defaults(&mut table);
        table
    }

    pub fn empty() -> Self {
        Self {
            variables: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) -> &mut Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Registers `function` under `name`, replacing any previous one.
    pub fn set_function<F>(&mut self, name: impl Into<String>, function: F) -> &mut Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.functions.insert(name.into(), Arc::new(function));
        self
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variables.remove(name)
    }

    pub fn remove_function(&mut self, name: &str) -> Option<Function> {
        self.functions.remove(name)
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbols for SymbolTable {
    fn function(&self, name: &str) -> Option<&Function> {
        SymbolTable::function(self, name)
    }

    fn variable(&self, name: &str) -> Option<f64> {
        SymbolTable::variable(self, name)
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut functions: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        functions.sort_unstable();
        f.debug_struct("SymbolTable")
            .field("variables", &self.variables)
            .field("functions", &functions)
            .finish()
    }
}

/// Per-call variable bindings layered over a shared table. Local variables
/// shadow the table's variables; functions come from the table only.
pub struct Overlay<'a> {
    base: &'a SymbolTable,
    locals: &'a HashMap<String, f64>,
}

impl<'a> Overlay<'a> {
    pub fn new(base: &'a SymbolTable, locals: &'a HashMap<String, f64>) -> Self {
        Self { base, locals }
    }
}

impl Symbols for Overlay<'_> {
    fn function(&self, name: &str) -> Option<&Function> {
        self.base.function(name)
    }

    fn variable(&self, name: &str) -> Option<f64> {
        self.locals
            .get(name)
            .copied()
            .or_else(|| self.base.variable(name))
    }
}
