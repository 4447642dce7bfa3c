use crate::symbols::SymbolTable;

pub fn register(table: &mut SymbolTable) {
    table
        .set_function("abs", f64::abs)
        .set_function("exp", f64::exp)
        .set_function("floor", f64::floor)
        .set_function("ln", f64::ln)
        .set_function("log", f64::log10)
        .set_function("sqrt", f64::sqrt);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(table: &SymbolTable, name: &str, value: f64) -> f64 {
        let function = table.function(name).unwrap();
        function(value)
    }

    #[test]
    fn test_elementary_functions() {
        let mut table = SymbolTable::empty();
        register(&mut table);

        assert_eq!(call(&table, "abs", -4.5), 4.5);
        assert_eq!(call(&table, "exp", 0.0), 1.0);
        assert_eq!(call(&table, "floor", -1.5), -2.0);
        assert_eq!(call(&table, "sqrt", 16.0), 4.0);
        assert!((call(&table, "log", 1000.0) - 3.0).abs() < 1e-12);
        assert!((call(&table, "ln", std::f64::consts::E) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_domain_yields_nan() {
        let mut table = SymbolTable::empty();
        register(&mut table);

        assert!(call(&table, "sqrt", -1.0).is_nan());
        assert_eq!(call(&table, "ln", 0.0), f64::NEG_INFINITY);
    }
}
