use anyhow::Context;
use clap::Parser;
use gui_bridge::bridge::GuiBridge;
use log::info;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::ConsoleConfig;
use workflow::query::IncidentQuery;
use workflow::runner::Runner;

mod generator;
mod gui_bridge;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "EyeGuard monitoring console driver")]
struct Args {
    /// Generate a session and print the dashboard summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a console config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Camera count (default 28), applied over --config
    #[arg(long)]
    cameras: Option<usize>,
    /// Incident count (default 50), applied over --config
    #[arg(long)]
    incidents: Option<usize>,
    /// Seed for a reproducible session, applied over --config
    #[arg(long)]
    seed: Option<u64>,
    /// Incident search text
    #[arg(long)]
    search: Option<String>,
    /// Incident severity filter (critical, warning, info, all)
    #[arg(long)]
    severity: Option<String>,
    /// Incident status filter (pending, reviewed, dismissed, all)
    #[arg(long)]
    status: Option<String>,
    /// Keep the HTTP bridge alive for the dashboard front-end
    #[arg(long, default_value_t = false)]
    serve: bool,
    /// Bridge listen address, overriding the config
    #[arg(long)]
    bind: Option<String>,
    #[arg(long, default_value = "tools/data/offline_dashboard.log")]
    report: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut console_config = if let Some(path) = args.config.as_ref() {
        ConsoleConfig::load(path)?
    } else {
        ConsoleConfig::default()
    };
    console_config.apply_overrides(args.cameras, args.incidents, args.seed);
    if let Some(bind) = args.bind {
        console_config.bind = bind;
    }

    let runner = Runner::new(console_config.clone());
    let store = runner.session()?;

    if args.offline {
        let query = IncidentQuery {
            search: args.search,
            severity: args.severity,
            status: args.status,
        };
        let report = runner.execute(&store, &query)?;

        println!(
            "Offline session -> cameras {}/{} active, incidents today {}, pending {}, critical {}",
            report.stats.active_cameras,
            report.stats.total_cameras,
            report.stats.total_incidents_today,
            report.stats.alerts_pending,
            report.stats.critical_alerts
        );
        for incident in &report.visible_incidents {
            println!(
                "  {} [{}/{}] {} @ {} ({}%)",
                incident.id,
                incident.severity,
                incident.status,
                incident.description,
                incident.camera_name,
                incident.confidence
            );
        }
        println!(
            "Alerts {}, users {}",
            report.alert_count, report.user_count
        );
        for note in &report.notes {
            println!("  note: {}", note);
        }

        let line = runner.report_line(&store, &report);
        if let Some(parent) = args.report.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&args.report)
            .with_context(|| format!("opening report {}", args.report.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing report {}", args.report.display()))?;
    }

    if args.serve {
        let addr = console_config.bind_address()?;
        let bridge = GuiBridge::new(store);
        let _server = bridge.serve(addr);
        bridge.publish_status(&format!(
            "HTTP bridge listening on {} (Ctrl+C to stop)...",
            addr
        ));
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    } else if !args.offline {
        info!("nothing to do: pass --offline and/or --serve");
    }

    Ok(())
}
