use http::request::Parts;
use serde::Serialize;
use tracing::info;

use emit::config::Config;
use emit::server::Server;
use emit::{Cookie, ResponseRecorder, SameSite};

#[derive(Serialize)]
struct Greeting<'a> {
    message: &'a str,
    version: &'a str,
}

/// Demo handler: one path per terminal operation.
fn demo(request: &Parts, response: &mut ResponseRecorder) {
    let builder = emit::new(response).header("X-Powered-By", "emit");

    match request.uri.path() {
        "/" | "/text" => builder.text("Hello, world!"),
        "/json" => builder.json(&Greeting {
            message: "Hello",
            version: emit::VERSION,
        }),
        "/created" => builder.status(201).json(&Greeting {
            message: "Created",
            version: emit::VERSION,
        }),
        "/cookie" => {
            let session = Cookie::build(("session", "abc123"))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            builder.cookie(Some(&session)).text("cookie set")
        }
        "/error" => builder.error_json("something went wrong"),
        "/bad-request" => builder.status(400).error_json("bad request"),
        "/empty" => builder.no_content(),
        _ => builder.status(404).error_json("not found"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    emit::logging::init(&config.logging)?;

    info!("Starting emit demo {}", emit::VERSION);
    config.log_summary();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(config))
}

async fn async_main(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let server = Server::bind(&config.server, demo)
        .await?
        .with_service_name(&config.logging.service_name);

    tokio::select! {
        result = server.run() => {
            if let Err(e) = result {
                eprintln!("Server error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down...");
        }
    }

    Ok(())
}
