use clap::Parser;
use playdex_backend::{
    api::{FirestoreApi, RawgApi},
    games::DetailsCache,
    http, util, Status, Tracing,
};
use std::{env, sync::Arc};
use tracing::info;
use warp::{self, Filter};

#[derive(Parser)]
struct Opts {
    /// Port number to use for listening to HTTP requests.
    #[clap(short, long, default_value = "8080")]
    port: u16,

    /// JSON file containing the external service credentials.
    #[clap(long, default_value = "keys.json")]
    key_store: String,

    #[clap(long)]
    prod_tracing: bool,
}

#[tokio::main]
async fn main() -> Result<(), Status> {
    let opts: Opts = Opts::parse();

    match opts.prod_tracing {
        false => Tracing::setup("playdex-http-server")?,
        true => Tracing::setup_prod("playdex-library")?,
    }

    // Let ENV VAR override flag.
    let port: u16 = match env::var("PORT") {
        Ok(port) => match port.parse::<u16>() {
            Ok(port) => port,
            Err(_) => opts.port,
        },
        Err(_) => opts.port,
    };

    let keys = util::keys::Keys::from_file(&opts.key_store)?;
    let firestore = FirestoreApi::connect().await?;
    let rawg = RawgApi::new(&keys.rawg.api_key);
    let cache = DetailsCache::new(Arc::new(rawg.clone()));

    info!("playdex http server started");

    warp::serve(
        http::routes::routes(Arc::new(firestore), Arc::new(rawg), Arc::new(cache)).with(
            warp::cors()
                .allow_methods(vec!["GET", "POST"])
                .allow_headers(vec!["Content-Type", "Authorization"])
                .allow_any_origin()
                .allow_credentials(true),
        ),
    )
    .run(([0, 0, 0, 0], port))
    .await;

    Ok(())
}
