#[tokio::main]
async fn main() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    wickview::app::logging::init();

    let args: Vec<String> = std::env::args().collect();
    let cli = match wickview::app::cli::parse_args(&args) {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("error: {}", err.message);
            std::process::exit(1);
        }
    };

    if cli.show_help {
        wickview::app::cli::print_usage();
        return;
    }

    let config = match wickview::app::cli::load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err.message);
            std::process::exit(1);
        }
    };

    let addr = config.server.addr.clone();
    if let Err(err) = wickview::app::ui_server::run(&addr, config).await {
        eprintln!("error: {}", err.message);
        std::process::exit(1);
    }
}
