use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workspace_lineage::{Result, config::Config, graph, input, view};

#[derive(Parser)]
#[command(name = "workspace-lineage")]
#[command(about = "Workspace lineage graph builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the lineage graph and write the renderer hand-off JSON.
    Graph {
        /// Scan document(s); workspaces are concatenated in argument order.
        #[arg(long, required = true, num_args = 1..)]
        input: Vec<String>,

        /// Output file (stdout if omitted).
        #[arg(short = 'o', long)]
        out: Option<String>,

        /// Only keep workspaces whose name matches this regex.
        #[arg(long)]
        workspace: Option<String>,

        /// Base URL for per-workspace lineage links.
        #[arg(long)]
        portal_url: Option<String>,

        /// Write single-line JSON.
        #[arg(long)]
        compact: bool,
    },
    /// Print graph totals and every dropped link.
    Summary {
        #[arg(long, required = true, num_args = 1..)]
        input: Vec<String>,

        #[arg(long)]
        workspace: Option<String>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workspace_lineage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Graph {
            input,
            out,
            workspace,
            portal_url,
            compact,
        } => {
            let config = Config::new(workspace.as_deref(), portal_url.as_deref(), compact)?;

            // 1) Load + normalize.
            let workspaces = config.select_workspaces(input::load_workspaces(&input)?);

            // 2) Build, link, validate.
            let construction = graph::construct(&workspaces);

            // 3) Annotate for the renderer.
            let data = view::build_graph_view(&workspaces, &construction, &config);
            let json = if config.pretty {
                serde_json::to_string_pretty(&data)?
            } else {
                serde_json::to_string(&data)?
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    tracing::info!(
                        nodes = data.totals.nodes,
                        links = data.totals.links,
                        dropped = data.totals.dropped_links,
                        "wrote {}",
                        path
                    );
                }
                None => println!("{}", json),
            }
        }
        Commands::Summary { input, workspace } => {
            let config = Config::new(workspace.as_deref(), None, false)?;
            let workspaces = config.select_workspaces(input::load_workspaces(&input)?);
            let construction = graph::construct(&workspaces);
            let totals = view::build_graph_view(&workspaces, &construction, &config).totals;

            println!("workspaces:    {}", totals.workspaces);
            println!("artifacts:     {}", totals.artifacts);
            println!("nodes:         {}", totals.nodes);
            println!("links:         {}", totals.links);
            println!("dropped links: {}", totals.dropped_links);
            for link in &construction.dropped {
                println!("  {}", link);
            }
        }
    }

    Ok(())
}
