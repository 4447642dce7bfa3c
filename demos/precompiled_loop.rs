use evalix_rs::Calculator;

fn main() {
    pretty_env_logger::init();

    let mut calc = Calculator::new();
    let compiled = calc.compile("-3.5*cos(x*5)+pi*(-2+sqrt(x*pi^2))/3");

    let mut sum: f64 = 0.0;
    for _ in 0..100 {
        calc.set_variable("x", sum.abs());
        sum += calc.evaluate_postfix(&compiled);
    }

    println!("Result 02: {}", sum);
}
