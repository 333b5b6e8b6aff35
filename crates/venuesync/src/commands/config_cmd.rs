//! Config command handlers. These run before the data store is opened.

use venuesync_config::{Config, ConfigError, config_path, load_config, save_config};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = load_config()?;
            let out = output::render_single(
                &global.output,
                &cfg,
                render_toml,
                |c| c.defaults.output.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let mut cfg = load_config()?;
            apply_set(&mut cfg, &key, &value)?;
            cfg.validate().map_err(CliError::Config)?;
            save_config(&cfg)?;
            if !global.quiet {
                eprintln!("Set {key} = {value}");
            }
            Ok(())
        }
    }
}

fn render_toml(cfg: &Config) -> String {
    toml::to_string_pretty(cfg)
        .map_err(ConfigError::Serialization)
        .unwrap_or_else(|e| format!("<unrenderable config: {e}>"))
}

fn apply_set(cfg: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    match key {
        "data_dir" => cfg.data_dir = Some(value.into()),
        "defaults.output" => {
            // Validate against the CLI's own output formats.
            parse_as::<OutputFormat>(key, value)?;
            cfg.defaults.output = value.to_owned();
        }
        "defaults.color" => cfg.defaults.color = value.to_owned(),
        "pricing.tax_rate" => {
            cfg.pricing.tax_rate = value.parse().map_err(|_| CliError::Validation {
                field: key.to_owned(),
                reason: format!("'{value}' is not a number"),
            })?;
        }
        "pricing.currency" => cfg.pricing.currency = value.to_owned(),
        other => {
            return Err(CliError::Validation {
                field: "key".into(),
                reason: format!("unknown config key '{other}'"),
            });
        }
    }
    Ok(())
}

fn parse_as<T: clap::ValueEnum>(key: &str, value: &str) -> Result<T, CliError> {
    T::from_str(value, true).map_err(|_| CliError::Validation {
        field: key.to_owned(),
        reason: format!("'{value}' is not a valid value"),
    })
}
