use grapher_rs::parse_function;
use grapher_rs::sampling::{NonFiniteOnly, SampleConfig, Sampler};

fn main() {
    pretty_env_logger::init();

    let config = SampleConfig::default().with_domain(-5.0, 5.0).with_step(0.05);

    for expression in ["1 / x", "tan ( x )", "sqrt ( 4 - x ^ 2 )"] {
        let Some(function) = parse_function(expression) else {
            println!("Invalid input '{}'", expression);
            continue;
        };

        let steep = Sampler::new(config.clone());
        let connected = Sampler::new(config.clone()).with_strategy(NonFiniteOnly);

        match (steep.polylines(&function), connected.polylines(&function)) {
            (Ok(split), Ok(joined)) => {
                println!("{}", expression);
                println!("  slope threshold: {} polylines", split.len());
                println!("  non-finite only: {} polylines", joined.len());
                for line in split.iter().filter(|line| line.len() > 1) {
                    let (first, last) = (line[0], line[line.len() - 1]);
                    println!(
                        "    ({:.2}, {:.3}) .. ({:.2}, {:.3}) [{} points]",
                        first.x,
                        first.y,
                        last.x,
                        last.y,
                        line.len()
                    );
                }
            }
            (Err(err), _) | (_, Err(err)) => println!("Sampling failed: {}", err),
        }
    }
}
