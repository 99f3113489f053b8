use database::db::create_connection;
use datafetcher::{
    cli::{PopulateSettings, USAGE, parse_source},
    client::UwaterlooClient,
    error::PipelineError,
    pipeline::{PopulationReport, ProductionPipeline},
    sample::{SampleLoader, USER_FILE, load_users},
    sink::DatabaseSink,
};
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use std::{env, process::ExitCode};

const RULE: &str = "-----------------------------------";

/// Drops and re-creates the schema, then fills it from the configured source
async fn populate(settings: PopulateSettings) -> Result<PopulationReport, PipelineError> {
    let db = create_connection(&settings.database).await?;

    info!("Re-creating the catalog schema");
    Migrator::fresh(&db).await?;

    let mut sink = DatabaseSink::new(&db);
    let data_dir = &settings.data_dir;

    let report = match settings.api {
        None => {
            SampleLoader::new(data_dir.join("sample"))
                .load(&mut sink)
                .await?
        }
        Some(api_config) => {
            // The production administrator account
            let users = data_dir.join("prod").join(USER_FILE);
            let mut report = load_users(&mut sink, &users).await?;

            info!(
                "Processing all production data. This will take a while because the API needs to be requested several times."
            );
            let client = UwaterlooClient::new(api_config);
            report += ProductionPipeline::new(client, &mut sink).run().await?;
            report
        }
    };

    db.close().await?;
    Ok(report)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Anything but a single valid source prints the usage guide and does nothing
    let Some(source) = parse_source(env::args_os()) else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    println!("LOADING {} DATA\n{RULE}", source.label());

    let result = match PopulateSettings::from_env(source) {
        Ok(settings) => populate(settings).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            println!("{report}");
            println!("{RULE}\nFinished!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
