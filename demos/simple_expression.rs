use evalix_rs::{render, Calculator};
use log::debug;

fn main() {
    pretty_env_logger::init();

    let mut calc = Calculator::new();

    let i = calc.evaluate("2+3*4");
    let expression = "-3.5*cos(i*5)+pi*(-2+sqrt(i*pi^2))/3";
    debug!("compiled: {}", render(&calc.compile(expression)));

    let y = calc.set_variable("i", i).evaluate(expression);
    println!("Result 01: {}", y);

    match calc.try_evaluate("2*(i+1") {
        Ok(value) => println!("Strict result: {}", value),
        Err(err) => println!("Strict error: {}", err),
    }
}
