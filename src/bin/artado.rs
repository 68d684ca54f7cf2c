use anyhow::Result;
use clap::Parser;

use artado::api::ConnectionsClient;
use artado::config::Config;
use artado::core::ExitCode;
use artado::core::operations::{
    BulkAttachOperation, GraftOperation, GraftRequest, SnapshotExportOperation, read_repo_list,
};
use artado::core::output::Table;
use artado::logging::{LogConfig, init_logging};
use artado::models::{Args, Commands};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let args = Args::parse();

    // Logging is resolved early so config failures are traceable too.
    let _log_guard = init_logging(LogConfig::resolve(&args.shared));

    match run(args).await {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("X {e:#}");
            ExitCode::GeneralError.into()
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    // Handle --create-config flag
    if args.create_config {
        let path = Config::create_sample_config()?;
        println!("Sample configuration written to {}", path.display());
        return Ok(ExitCode::Success);
    }

    let Some(command) = args.command else {
        anyhow::bail!("a subcommand is required (see --help)");
    };

    // Resolve configuration from CLI args, environment variables, and config file
    let config = Config::resolve_from(&args.shared)?;

    let client = ConnectionsClient::new(
        config.organization.clone(),
        config.project.clone(),
        config.username.clone(),
        config.token.clone(),
    )?;

    match command {
        Commands::List => {
            let connections = client.list_connections().await?;

            let mut table = Table::new(vec![
                "Connection ID",
                "Connection Name",
                "Connection Type",
                "Connected Repo(s)",
            ]);
            for connection in &connections {
                table.add_row(vec![
                    connection.id.clone(),
                    connection.name.clone(),
                    connection.authorization_type.clone(),
                    connection.repo_urls.join("\n"),
                ]);
            }
            table.write_to(&mut std::io::stdout())?;

            Ok(ExitCode::Success)
        }

        Commands::Add { repo, connection } => {
            let receipt = client.attach_repo(&repo, &connection).await?;

            let mut table = Table::new(vec!["Connection ID", "Repo Name (added)"]);
            table.add_row(vec![receipt.connection_id, receipt.repo_url]);
            table.write_to(&mut std::io::stdout())?;

            Ok(ExitCode::Success)
        }

        Commands::AddBulk { file, connection } => {
            let repos = read_repo_list(&file)?;
            println!(
                "Adding {} repositories to connection {}",
                repos.len(),
                connection
            );

            let outcome = BulkAttachOperation::new(client)
                .attach_all(&repos, &connection)
                .await;

            let mut table = Table::new(vec!["Connection ID", "Repo Name (added)"]);
            for receipt in &outcome.succeeded {
                table.add_row(vec![receipt.connection_id.clone(), receipt.repo_url.clone()]);
            }
            table.write_to(&mut std::io::stdout())?;

            // Partial results are printed above before the failure is reported.
            if let Some(failure) = outcome.failure() {
                eprintln!("X {failure}");
                return Ok(ExitCode::PartialSuccess);
            }

            Ok(ExitCode::Success)
        }

        Commands::Output => {
            let export = SnapshotExportOperation::new(client).run().await?;
            print!("{}", export.content);
            println!("Snapshot written to {}", export.path.display());

            Ok(ExitCode::Success)
        }

        Commands::Graft {
            snapshot_file,
            from,
            to,
        } => {
            let outcome = GraftOperation::new(client)
                .run(&GraftRequest {
                    snapshot_path: snapshot_file,
                    source_id: from,
                    target_id: to,
                })
                .await?;

            let mut table = Table::new(vec![format!(
                "Repos Grafted to Connection ID {}",
                outcome.target_id
            )]);
            for url in &outcome.copied {
                table.add_row(vec![url.clone()]);
            }
            table.write_to(&mut std::io::stdout())?;

            Ok(ExitCode::Success)
        }
    }
}
