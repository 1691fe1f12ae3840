use grapher_rs::expression::Parser;
use log::debug;

fn main() {
    pretty_env_logger::init();

    let expressions: Vec<String> = std::env::args().skip(1).collect();
    let expressions = if expressions.is_empty() {
        vec![
            "x ^ 2 - 2 * x + 1".to_string(),
            "sin ( x ) / x".to_string(),
            "max ( x , 0 - x )".to_string(),
            "2x + 1".to_string(),
        ]
    } else {
        expressions
    };

    let parser = Parser::new();
    for expression in &expressions {
        debug!("postfix: {:?}", parser.to_postfix(expression));

        match parser.try_parse(expression) {
            Ok(function) => {
                println!("f(x) = {}", expression);
                for x in [-2.0, -1.0, 0.0, 1.0, 2.0] {
                    println!("  f({:>4}) = {}", x, function.eval(x));
                }
            }
            Err(err) => println!("Invalid input '{}': {}", expression, err),
        }
    }
}
