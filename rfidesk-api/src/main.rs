use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use rfidesk_api::config::ApiConfig;
use rfidesk_api::models::multipart_form_config;
use rfidesk_api::{handlers, SharedExtractor};
use rfidesk_pdf::PdfTextExtractor;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rfidesk-api", about = "Demo RFI processing API server")]
struct Cli {
    /// Path to the TOML config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) = ApiConfig::load(cli.config.as_deref())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The non-blocking writer guard has to outlive the server
    let _guard = match config.logging.as_ref() {
        Some(logging) => {
            let appender = tracing_appender::rolling::daily(&logging.dir, "rfidesk-api.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(env_filter).init();
            None
        }
    };

    info!(config_path = %config_path.display(), "Loaded configuration");

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting rfidesk-api server at http://{}", bind_addr);

    let extractor: SharedExtractor = Arc::new(PdfTextExtractor);
    let app_config = config.clone();

    HttpServer::new(move || {
        let cors = match app_config.cors.as_ref() {
            Some(cors_config) => cors_config
                .allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header(),
            None => Cors::default(),
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(extractor.clone()))
            .app_data(web::Data::new(app_config.clone()))
            .app_data(multipart_form_config(&app_config))
            .service(handlers::process_rfi::process_rfi)
            .service(handlers::scenarios::list_scenarios)
            .service(handlers::health::health)
    })
    .bind(bind_addr)?
    .run()
    .await
}
