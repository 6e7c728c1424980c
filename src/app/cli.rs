use crate::config::Config;
use crate::{Error, Result};

pub struct Cli {
    pub config_path: String,
    pub addr_override: Option<String>,
    pub symbol_override: Option<String>,
    pub show_help: bool,
}

pub fn parse_args(args: &[String]) -> Result<Cli> {
    let mut cli = Cli {
        config_path: "config.toml".to_string(),
        addr_override: None,
        symbol_override: None,
        show_help: false,
    };

    let mut index = 1;
    while index < args.len() {
        match args[index].as_str() {
            "--config" | "-c" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| Error::config("missing value for --config"))?;
                cli.config_path = value.to_string();
                index += 2;
            }
            "--addr" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| Error::config("missing value for --addr"))?;
                cli.addr_override = Some(value.to_string());
                index += 2;
            }
            "--symbol" => {
                let value = args
                    .get(index + 1)
                    .ok_or_else(|| Error::config("missing value for --symbol"))?;
                cli.symbol_override = Some(value.to_string());
                index += 2;
            }
            "--help" | "-h" => {
                cli.show_help = true;
                index += 1;
            }
            unknown => {
                return Err(Error::config(format!("unknown argument: {unknown}")));
            }
        }
    }

    Ok(cli)
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(&cli.config_path)?;
    if let Some(symbol) = &cli.symbol_override {
        config.symbol = symbol.clone();
    }
    if let Some(addr) = &cli.addr_override {
        config.server.addr = addr.clone();
    }
    config.validate()?;
    Ok(config)
}

pub fn print_usage() {
    println!("usage: wickview [--config <path>] [--addr <host:port>] [--symbol <pair>]");
    println!("  -c, --config   Path to config.toml (default: config.toml)");
    println!("      --addr     Bind address (default: 127.0.0.1:8088 or WICKVIEW_ADDR)");
    println!("      --symbol   Market pair to chart (default: config symbol)");
}
