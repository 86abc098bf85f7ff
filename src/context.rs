use crate::configuration::Configuration;

pub struct Context {
    pub config: Configuration,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        let cfg = Configuration {
            log_file: cli.log_file.clone(),
            script: cli.script.clone(),
            format: cli.format,
            room_capacity: cli.capacity,
            activity_limit: cli.activity_limit,
            seed: !cli.empty,
        };
        Self { config: cfg }
    }
}
