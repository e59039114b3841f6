use anyhow::Result;

use pwaicons::{capability::Strategy, config::Config, generator, output::DirSink};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::default();
    let mut sink = DirSink::new(".");
    let mut stdout = std::io::stdout().lock();
    generator::run(&config, Strategy::detect(), &mut sink, &mut stdout)?;

    Ok(())
}
