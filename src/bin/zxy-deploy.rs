//! `zxy-deploy` packages the dashboard for a remote host.
//!
//! Usage:
//!   zxy-deploy [--server <host>] [--port <port>] [--root <project-dir>]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zxy_dashboard::deploy::Deployer;

/// Build the deployment archive and server configuration files.
#[derive(Parser, Debug)]
#[command(name = "zxy-deploy", about = "Deploy ZXY Dashboard")]
struct Cli {
    /// Target server host name or IP.
    #[arg(long, default_value = "localhost")]
    server: String,

    /// Target port.
    #[arg(long, default_value_t = 80)]
    port: u16,

    /// Project root containing the release build and templates.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let deployer = Deployer::new(&cli.server, cli.port, &cli.root);

    println!("ZXY Dashboard deployment to {}:{}", cli.server, cli.port);
    println!("{}", "=".repeat(60));

    let report = match deployer.deploy() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Deployment failed: {e:#}");
            std::process::exit(1);
        }
    };

    println!("\nDeployment package created successfully!");
    println!("\nFiles created:");
    println!("   Deployment archive: {}", report.archive.display());
    println!("   Startup script:     {}", report.startup_script.display());
    println!("   Nginx config:       {}", report.nginx_config.display());
    println!("   Systemd service:    {}", report.systemd_unit.display());
    println!("   Instructions:       {}", report.instructions.display());

    println!("\nNext steps:");
    println!("   1. Upload {} to your server", zxy_dashboard::deploy::ARCHIVE_NAME);
    println!("   2. Follow the instructions in DEPLOYMENT_INSTRUCTIONS.md");
    println!("   3. Access your dashboard at http://{}:{}", cli.server, cli.port);
}
