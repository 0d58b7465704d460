use tracing_subscriber::EnvFilter;

use marathons::config::Config;
use marathons::engine::Engine;
use marathons::server::serve;

#[tokio::main]
async fn main() {
    let config = Config::from_env().unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log))
        .init();

    let engine = Engine::new(&config);

    serve(engine, config.addr).await.unwrap();
}
