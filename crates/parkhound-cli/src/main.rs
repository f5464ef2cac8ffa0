use clap::{Parser, Subcommand};

use parkhound_core::{filter_parks, rank_parks, Coordinates, FilterSet, Park};

#[derive(Debug, Parser)]
#[command(name = "parkhound-cli")]
#[command(about = "Brisbane dog-park directory command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch and fuse the three datasets, then print the collection.
    Fetch {
        /// Print the full collection as JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Print the nearest parks to a reference point.
    Nearby {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Maximum number of results; defaults to the configured limit.
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        night_lighting: bool,
        #[arg(long)]
        fenced: bool,
        #[arg(long)]
        off_leash: bool,
        #[arg(long)]
        small_dog_enclosure: bool,
        #[arg(long)]
        agility: bool,
        #[arg(long)]
        water_fountain: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = parkhound_core::load_app_config_from_env()?;
    let lexicon = parkhound_core::load_lexicon(config.lexicon_path.as_deref())?;
    let client = parkhound_ingest::DatasetClient::new(
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Fetch { json } => {
            let parks = parkhound_ingest::load_parks(&client, &config, &lexicon).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&parks)?);
            } else {
                print_summary(&parks);
            }
        }
        Commands::Nearby {
            lat,
            lng,
            limit,
            night_lighting,
            fenced,
            off_leash,
            small_dog_enclosure,
            agility,
            water_fountain,
        } => {
            let parks = parkhound_ingest::load_parks(&client, &config, &lexicon).await;
            let filters = FilterSet {
                night_lighting,
                fenced,
                off_leash,
                small_dog_enclosure,
                agility,
                water_fountain,
            };
            let filtered = filter_parks(&parks, &filters);
            let ranked = rank_parks(
                &filtered,
                Some(Coordinates::new(lng, lat)),
                limit.unwrap_or(config.result_limit),
            );
            print_ranked(&ranked);
        }
    }

    Ok(())
}

fn print_summary(parks: &[Park]) {
    let off_leash = parks.iter().filter(|p| p.is_off_leash).count();
    println!(
        "{} parks ({} regular, {} off-leash)",
        parks.len(),
        parks.len() - off_leash,
        off_leash
    );
    for park in parks {
        let facilities: Vec<&str> = park.facilities.iter().map(String::as_str).collect();
        println!(
            "  [{:>3}] {} ({}): {}",
            park.id,
            park.name,
            park.kind,
            facilities.join(", ")
        );
    }
}

fn print_ranked(parks: &[Park]) {
    for park in parks {
        match park.distance_km {
            Some(distance) => println!("{distance:>6.1} km  {}", park.name),
            None => println!("     ? km  {}", park.name),
        }
    }
}
