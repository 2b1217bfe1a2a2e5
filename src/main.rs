use cosmic_animal_awards::model::Category;
use cosmic_animal_awards::{run, CliOptions, Command};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DATA_DIR_ENV: &str = "COSMIC_AWARDS_DATA";

fn usage() -> ! {
    eprintln!(
        "Usage: cosmic-animal-awards [--data-dir DIR] [animals [earth|alien] | show ID | awards \
| battle ID1 ATTR1 ID2 ATTR2]"
    );
    std::process::exit(1);
}

fn next_arg(args: &mut impl Iterator<Item = String>, what: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing {what}"))
}

fn parse_args(
    args: impl IntoIterator<Item = String>,
    default_data_dir: PathBuf,
) -> anyhow::Result<CliOptions> {
    let mut data_dir = default_data_dir;
    let mut command = Command::Summary;

    let mut args = args.into_iter().peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data-dir" => {
                data_dir = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--data-dir requires a path (e.g. --data-dir data)")
                })?;
            }
            "animals" => {
                let category = args
                    .next_if(|next| !next.starts_with("--"))
                    .map(|c| c.parse::<Category>())
                    .transpose()?;
                command = Command::Animals(category);
            }
            "show" => command = Command::Show(next_arg(&mut args, "animal id for show")?),
            "awards" => command = Command::Awards,
            "battle" => {
                command = Command::Battle {
                    animal_a: next_arg(&mut args, "first animal id")?,
                    attribute_a: next_arg(&mut args, "first attribute")?,
                    animal_b: next_arg(&mut args, "second animal id")?,
                    attribute_b: next_arg(&mut args, "second attribute")?,
                };
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions { data_dir, command })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cosmic_animal_awards=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_dir = env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let opts = parse_args(env::args().skip(1), data_dir)?;
    run(opts)
}
