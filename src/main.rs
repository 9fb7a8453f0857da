use anyhow::Result;
use clap::{Parser, Subcommand};
use poi_navigator::commands::{self, DataOpts, KindArg, PlannerOpts};
use poi_navigator::nav::config::ConfigOverrides;

#[derive(Parser, Debug)]
#[command(name = "poi-navigator", version, about = "Walk and translocator route planner for points of interest")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Plan the cheapest route between two places
    Route {
        /// Starting place id
        #[arg(long)]
        from: String,
        /// Destination place id
        #[arg(long)]
        to: String,
        /// Print the route as JSON (null when no route exists)
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        planner: PlannerOpts,
        #[command(flatten)]
        data: DataOpts,
    },

    /// List known places in load order
    Nodes {
        /// Only list places of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        #[command(flatten)]
        data: DataOpts,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let env = ConfigOverrides::from_env_defaults();
    match cli.command {
        Commands::Route { from, to, json, planner, data } => {
            let settings = commands::merge_settings(&data, &planner, env);
            let graph = commands::prepare(&settings)?;
            commands::route::cmd_route(&graph, &from, &to, &settings, json)
        }
        Commands::Nodes { kind, data } => {
            let settings = commands::merge_settings(&data, &PlannerOpts::default(), env);
            let graph = commands::prepare(&settings)?;
            commands::nodes::cmd_nodes(&graph, kind.map(Into::into))
        }
    }
}
