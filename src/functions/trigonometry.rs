use crate::functions::PI;
use crate::symbols::SymbolTable;

pub fn register(table: &mut SymbolTable) {
    table
        .set_function("sin", f64::sin)
        .set_function("cos", f64::cos)
        .set_function("tan", f64::tan)
        .set_function("asin", f64::asin)
        .set_function("acos", f64::acos)
        .set_function("atan", f64::atan)
        .set_function("deg2rad", deg2rad)
        .set_function("rad2deg", rad2deg);
}

fn deg2rad(degrees: f64) -> f64 {
    (PI / 180.0) * degrees
}

fn rad2deg(radians: f64) -> f64 {
    (180.0 / PI) * radians
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_angle_conversion() {
        assert!((deg2rad(180.0) - PI).abs() < EPSILON);
        assert!((rad2deg(PI / 2.0) - 90.0).abs() < EPSILON);
        assert!((rad2deg(deg2rad(37.5)) - 37.5).abs() < EPSILON);
    }

    #[test]
    fn test_registered_functions() {
        let mut table = SymbolTable::empty();
        register(&mut table);

        let cos = table.function("cos").unwrap();
        assert_eq!(cos(0.0), 1.0);
        let atan = table.function("atan").unwrap();
        assert!((atan(1.0) - PI / 4.0).abs() < EPSILON);
        let asin = table.function("asin").unwrap();
        assert!(asin(2.0).is_nan());
    }
}
