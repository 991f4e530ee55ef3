use clap::{Parser, Subcommand};
use showcase::form::{FormState, Tone};
use showcase::{config, generate, landing, output, readme};
use std::path::PathBuf;
use std::time::Duration;

/// Form fields shared by every generating command.
///
/// Flags override values from a `--form` file, which override `[defaults]`
/// from the config.
#[derive(clap::Args, Clone)]
struct FormArgs {
    /// Repository URL; its last path segment becomes the project name
    #[arg(long)]
    repo_url: Option<String>,

    /// Short project description
    #[arg(long)]
    description: Option<String>,

    /// Live demo URL
    #[arg(long)]
    demo_url: Option<String>,

    /// Caption voice
    #[arg(long, value_enum)]
    tone: Option<Tone>,

    /// Comma-separated hashtag seeds
    #[arg(long)]
    tags: Option<String>,

    /// Caption variations to produce
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    variations: Option<u8>,

    /// List a single generic tech-stack entry instead of the detected list
    #[arg(long)]
    no_auto_detect: bool,

    /// Read form fields from a TOML file
    #[arg(long)]
    form: Option<PathBuf>,
}

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Turn project metadata into LinkedIn captions, a README, and a landing page")]
#[command(long_about = "\
Turn project metadata into LinkedIn captions, a README, and a landing page

Give it a repository URL or a short description (or both) and it produces
three ready-to-publish artifacts from fixed templates. Nothing is fetched
or inspected; generation is deterministic template interpolation.

Inputs layer in order:

  showcase.toml [defaults]     # Sticky defaults (tone, tags, variations)
  --form request.toml          # A saved form, sparse TOML
  --repo-url, --tone, ...      # Flags override everything

Example form file:

  repo_url = \"https://github.com/alice/cool-app\"
  project_description = \"A collaborative whiteboard for remote teams.\"
  demo_url = \"https://cool-app.example\"
  tone = \"classy\"
  tags = \"React, TypeScript\"
  variations = 3

Artifacts land in the output directory:

  showcase-out/
  ├── caption-1.txt            # LinkedIn captions, one per variation
  ├── caption-2.txt
  ├── README.md
  ├── readme-preview.html      # README rendered to HTML
  ├── landing.html             # Self-contained landing page
  └── bundle.json              # Everything as one JSON manifest

Run 'showcase gen-config' to generate a documented showcase.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "showcase.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate all artifacts and write them to the output directory
    Generate {
        #[command(flatten)]
        form: FormArgs,
        /// Output directory
        #[arg(long, default_value = "showcase-out")]
        out: PathBuf,
        /// Sleep this many milliseconds before generating, standing in for
        /// the backend round-trip a hosted version would make
        #[arg(long, value_name = "MS")]
        simulate_latency: Option<u64>,
    },
    /// Print the LinkedIn captions to stdout
    Captions {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Print the README markdown to stdout
    Readme {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Print the landing page HTML to stdout
    Landing {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Validate the form inputs and show the resolved request
    Check {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Print a stock showcase.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            form,
            out,
            simulate_latency,
        } => {
            let (form, config) = load_and_resolve(&form, &cli.config)?;
            println!("==> Generating showcase for {}", form.project_name());
            if let Some(ms) = simulate_latency {
                // The transform below is synchronous; the delay only wraps it.
                std::thread::sleep(Duration::from_millis(ms));
            }
            let bundle = generate::generate(&form, &config);
            let report = generate::write_bundle(&bundle, &out)?;
            output::print_generate_output(&report);
        }
        Command::Captions { form } => {
            let (form, config) = load_and_resolve(&form, &cli.config)?;
            let bundle = generate::generate(&form, &config);
            for (i, caption) in bundle.linkedin_captions.iter().enumerate() {
                if i > 0 {
                    println!("\n---\n");
                }
                println!("{caption}");
            }
        }
        Command::Readme { form } => {
            let (form, _) = load_and_resolve(&form, &cli.config)?;
            print!("{}", readme::build_readme(&form));
        }
        Command::Landing { form } => {
            let (form, config) = load_and_resolve(&form, &cli.config)?;
            println!("{}", landing::build_landing(&form, &config));
        }
        Command::Check { form } => {
            let (form, _) = load_and_resolve(&form, &cli.config)?;
            output::print_check_output(&form);
            println!("==> Form is valid");
        }
        // Works before any (possibly broken) showcase.toml exists
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config, then resolve the final form over it.
fn load_and_resolve(
    args: &FormArgs,
    config_path: &std::path::Path,
) -> Result<(FormState, config::ShowcaseConfig), Box<dyn std::error::Error>> {
    let config = config::load_config(config_path)?;
    let form = resolve_form(args, &config)?;
    Ok((form, config))
}

/// Resolve the final form: config defaults, then the form file, then flags.
///
/// Form files are merged as sparse TOML over the defaults so a file that
/// names two fields leaves the other six alone.
fn resolve_form(
    args: &FormArgs,
    config: &config::ShowcaseConfig,
) -> Result<FormState, Box<dyn std::error::Error>> {
    let base = FormState::from_defaults(&config.defaults);

    let mut form = match &args.form {
        Some(path) => {
            let base_value = toml::Value::try_from(&base)?;
            let content = std::fs::read_to_string(path)?;
            let overlay: toml::Value = toml::from_str(&content)?;
            let merged: FormState = config::merge_toml(base_value, overlay).try_into()?;
            merged
        }
        None => base,
    };

    if let Some(url) = &args.repo_url {
        form.repo_url = url.clone();
    }
    if let Some(description) = &args.description {
        form.project_description = description.clone();
    }
    if let Some(url) = &args.demo_url {
        form.demo_url = url.clone();
    }
    if let Some(tone) = args.tone {
        form.tone = tone;
    }
    if let Some(tags) = &args.tags {
        form.tags = tags.clone();
    }
    if let Some(variations) = args.variations {
        form.variations = variations;
    }
    if args.no_auto_detect {
        form.auto_detect_tech = false;
    }

    form.validate()?;
    Ok(form)
}
