pub mod elementary;
pub mod trigonometry;

use crate::symbols::SymbolTable;

pub const E: f64 = 2.718281828459045;
pub const PI: f64 = 3.141592653589793;

/// Seeds a table with the constants and function families every new
/// calculator starts with.
pub fn register_defaults(table: &mut SymbolTable) {
    table.set_variable("e", E).set_variable("pi", PI);

    elementary::register(table);
    trigonometry::register(table);
}
