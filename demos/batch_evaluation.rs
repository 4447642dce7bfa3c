use evalix_rs::Calculator;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let rows = vec![
        HashMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        HashMap::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
    ];

    let mut calc = Calculator::new();
    calc.set_function("half", |v| v / 2.0);
    let compiled = calc.compile("price * log(volume) - half(price)");

    for (i, result) in calc.evaluate_batch(&compiled, &rows).iter().enumerate() {
        println!("Result {}: {}", i, result);
    }
}
