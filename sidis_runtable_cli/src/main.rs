use clap::{Arg, Command};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use libsidis_runtable::config::Config;
use libsidis_runtable::process::process;

fn make_template_config(path: &Path) {
    let config = Config::default();
    let yaml_str = serde_yaml::to_string(&config).unwrap();
    let mut file = File::create(path).expect("Could create template config file!");
    file.write_all(yaml_str.as_bytes())
        .expect("Failed to write yaml data to file!");
}

fn main() {
    // Create a cli
    let matches = Command::new("sidis_runtable_cli")
        .arg_required_else_help(true)
        .subcommand(Command::new("new").about("Make a template configuration yaml file"))
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .help("Path to the configuration file"),
        )
        .get_matches();

    // Initialize feedback
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("Could not create logging!");

    // Parse the cli
    let config_path = PathBuf::from(matches.get_one::<String>("path").expect("We require args"));

    if let Some(("new", _)) = matches.subcommand() {
        log::info!(
            "Making a template config at {}...",
            config_path.to_string_lossy()
        );

        make_template_config(&config_path);
        log::info!("Done.");
        return;
    }

    // Load our config
    log::info!("Loading config from {}...", config_path.to_string_lossy());
    let config = match Config::read_config_file(&config_path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    log::info!("Config successfully loaded.");
    log::info!("Run catalog: {}", config.catalog_path.to_string_lossy());
    log::info!(
        "Report dirs: coin {} | arm_a {} | arm_b {}",
        config.coin_report_dir.to_string_lossy(),
        config.arm_a_report_dir.to_string_lossy(),
        config.arm_b_report_dir.to_string_lossy()
    );
    log::info!(
        "Coincidence statistics: {}",
        config.coin_stats_dir.to_string_lossy()
    );
    log::info!("Fan table: {}", config.fan_table_path.to_string_lossy());
    log::info!(
        "Polarization table: {}",
        config.polarization_table_path.to_string_lossy()
    );
    log::info!("Output: {}", config.output_path.to_string_lossy());

    match process(&config) {
        Ok(_) => log::info!("Successfully built the run-information table!"),
        Err(e) => log::error!("Table build failed with error: {e}"),
    }

    log::info!("Done.");
}
