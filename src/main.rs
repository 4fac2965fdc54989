// webk-build: Web K build configuration composer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> ConfigLoader --> Logging --> BuildContext --> Command Dispatch
//!   Version | Options | Inis | Emit | Resolve | Plugins | Proxy | Dev
//! ```

use std::process::ExitCode;

use webk_build::cli::global::GlobalOptions;
use webk_build::cli::{self, Command};
use webk_build::cmd::config::{run_inis_command, run_options_command};
use webk_build::cmd::dev::run_dev_command;
use webk_build::cmd::emit::run_emit_command;
use webk_build::cmd::inspect::{run_plugins_command, run_proxy_command, run_resolve_command};
use webk_build::config::Config;
use webk_build::config::loader::ConfigLoader;
use webk_build::context::BuildContext;
use webk_build::logging::init_logging;
use webk_build::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Project-level config file picked up from the current directory.
const DEFAULT_CONFIG_FILE: &str = "webk.toml";

/// Prefix of `WEBK_<SECTION>__<KEY>` overrides.
const ENV_PREFIX: &str = "WEBK";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = load_config(&cli.global);

    let log_config = build_log_config(&cli.global, config.as_ref().ok());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, config).await
}

fn build_log_config(global: &GlobalOptions, config: Option<&Config>) -> LogConfig {
    // Loaded config already carries the CLI flags as overrides.
    if let Some(config) = config {
        return LogConfig::builder()
            .with_console_level(config.global.output_log_level)
            .with_file_level(config.global.file_log_level)
            .maybe_with_log_file(
                config
                    .global
                    .log_file
                    .as_ref()
                    .map(|p| p.display().to_string()),
            )
            .with_json(config.global.json_logs)
            .build();
    }

    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_json(global.json_logs)
        .build()
}

async fn dispatch_command(
    cli: &cli::Cli,
    config: webk_build::error::Result<Config>,
) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Proxy(args)) => run_proxy_command(&args.path),
        Some(Command::Options) => config.map(|config| run_options_command(&config)),
        Some(Command::Emit(args)) => match config.and_then(BuildContext::from_config) {
            Ok(ctx) => run_emit_command(args, &ctx).await,
            Err(e) => Err(e),
        },
        Some(Command::Resolve) => {
            config
                .and_then(BuildContext::from_config)
                .map(|ctx| run_resolve_command(&ctx))
        }
        Some(Command::Plugins) => config
            .and_then(BuildContext::from_config)
            .and_then(|ctx| run_plugins_command(&ctx)),
        Some(Command::Dev(args)) => match config.and_then(BuildContext::from_config) {
            Ok(ctx) => run_dev_command(args, &ctx).await,
            Err(e) => Err(e),
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions) -> webk_build::error::Result<Config> {
    build_config_loader(global)
        .apply_overrides(&global.to_config_overrides())?
        .build()
}
