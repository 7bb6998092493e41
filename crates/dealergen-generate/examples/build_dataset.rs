use dealergen_generate::{DatasetEngine, GenerateOptions, default_catalog};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let engine = DatasetEngine::new(default_catalog()?, GenerateOptions::default())?;
    let dataset = engine.build_dataset()?;
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
