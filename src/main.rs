use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use storage_bucket::{
    util, BucketClient, BucketOptions, ClientConfig, ConfigError, RequestError, StorageResponse,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let bucket_id = || Arg::new("BUCKET_ID").required(true).index(1);
    let public = || {
        Arg::new("public")
            .long("public")
            .action(ArgAction::SetTrue)
            .help("Make the bucket publicly readable")
    };

    clap::command!()
        .arg(
            Arg::new("url")
                .long("url")
                .env("STORAGE_URL")
                .required(true)
                .help("Base URL of the storage API, e.g. https://<project>/storage/v1"),
        )
        .arg(
            Arg::new("key")
                .long("key")
                .env("STORAGE_KEY")
                .hide_env_values(true)
                .help("API key, sent as `apikey` and as a bearer token"),
        )
        .arg(
            Arg::new("header")
                .short('H')
                .long("header")
                .action(ArgAction::Append)
                .help("Extra request header, `Name: value`"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("create")
                .about("Create a bucket")
                .arg(bucket_id())
                .arg(public()),
        )
        .subcommand(Command::new("get").about("Show a bucket").arg(bucket_id()))
        .subcommand(Command::new("list").about("List all buckets"))
        .subcommand(
            Command::new("update")
                .about("Update a bucket")
                .arg(bucket_id())
                .arg(public()),
        )
        .subcommand(Command::new("delete").about("Delete an empty bucket").arg(bucket_id()))
        .subcommand(
            Command::new("empty")
                .about("Remove every object from a bucket")
                .arg(bucket_id()),
        )
}

fn build_config(matches: &ArgMatches) -> Result<ClientConfig, ConfigError> {
    let url = matches
        .get_one::<String>("url")
        .map(String::as_str)
        .unwrap_or_default();

    let mut headers = Vec::new();
    if let Some(key) = matches.get_one::<String>("key") {
        headers.push(("apikey".to_string(), key.clone()));
        headers.push(("Authorization".to_string(), util::header::bearer(key)));
    }

    for header in matches.get_many::<String>("header").unwrap_or_default() {
        headers.push(util::header::parse_header(header)?);
    }

    ClientConfig::new(url, headers)
}

async fn run(client: &BucketClient, matches: &ArgMatches) -> Result<StorageResponse, RequestError> {
    let id = |sub: &ArgMatches| {
        sub.get_one::<String>("BUCKET_ID")
            .cloned()
            .unwrap_or_default()
    };
    let options = |sub: &ArgMatches| Some(BucketOptions::public(sub.get_flag("public")));

    match matches.subcommand() {
        Some(("create", sub)) => client.create_bucket(&id(sub), options(sub)).await,
        Some(("get", sub)) => client.get_bucket(&id(sub)).await,
        Some(("list", _)) => client.list_buckets().await,
        Some(("update", sub)) => client.update_bucket(&id(sub), options(sub)).await,
        Some(("delete", sub)) => client.delete_bucket(&id(sub)).await,
        Some(("empty", sub)) => client.empty_bucket(&id(sub)).await,
        _ => unreachable!("subcommand is required"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .json()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(context = "main", "called");

    let matches = cli().get_matches();

    let config = match build_config(&matches) {
        Err(err) => {
            error!(error_message=%err, error_group="config");
            return ExitCode::from(2);
        }
        Ok(config) => config,
    };
    info!(url = %config.url, "args");

    let client = BucketClient::new(config);

    let res = match run(&client, &matches).await {
        Err(err) => {
            error!(error_message=%err, error_group="request");
            return ExitCode::from(2);
        }
        Ok(res) => res,
    };

    match serde_json::to_string_pretty(&res) {
        Err(err) => {
            error!(error_message=%err, error_group="output");
            return ExitCode::from(2);
        }
        Ok(out) => println!("{}", out),
    }

    if res.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}
