use anyhow::Result;
use cli::{execute, load_store, parse_args};
use common::{config::AppConfig, logging};
use engine::Predictor;

fn main() -> Result<()> {
    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let command = parse_args(std::env::args().skip(1))?;
    let store = load_store(&config.mapping)?;
    let predictor = Predictor::new(store, config.engine.clone());

    println!("{}", execute(&predictor, &command)?);
    Ok(())
}
