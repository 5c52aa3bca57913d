//! t2i-prompt - prompt enhancement CLI for text-to-image models

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use t2i_prompt::config::Config;
use t2i_prompt::enhancer::{
    enhance, extract_keywords, negative_prompt, prompt_variations, NegativeCategory,
    PromptEnhancer, PromptRequest, Style,
};
use t2i_prompt::output::{ensure_output_dir, image_paths};
use t2i_prompt::request::GenerationRequest;

#[derive(Parser, Debug)]
#[command(name = "t2i-prompt")]
#[command(about = "Prompt enhancement and request preparation for text-to-image models")]
struct Args {
    /// JSON config file with model presets and output settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append style keywords to a prompt
    Enhance {
        prompt: String,
        /// realistic, artistic, professional, cinematic (unknown values use realistic)
        #[arg(long, default_value = "realistic")]
        style: String,
    },
    /// Print the negative prompt for a subject category
    Negative {
        /// general, portrait, landscape, object (unknown values use general)
        #[arg(long, default_value = "general")]
        category: String,
    },
    /// Build a generation request as JSON
    Prepare {
        prompt: String,
        /// Negative prompt; the category default is used when blank
        #[arg(long, default_value = "")]
        negative: String,
        #[arg(long, default_value = "realistic")]
        style: String,
        #[arg(long, default_value = "general")]
        category: String,
        /// Send the prompt as typed, without style keywords
        #[arg(long)]
        no_enhance: bool,
        /// Collapse whitespace in the prompt before enhancing
        #[arg(long)]
        preprocess: bool,
        /// Model preset key (defaults to the configured default model)
        #[arg(long)]
        model: Option<String>,
        #[arg(long, default_value_t = 1)]
        num_images: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List prompt variations with quality modifiers
    Variations { prompt: String },
    /// Extract keywords from a prompt
    Keywords { text: String },
    /// List available model presets
    Models,
    /// Print output file paths for images generated from a prompt
    Paths {
        prompt: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Create the output directory if missing
        #[arg(long)]
        create: bool,
    },
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Enhance { prompt, style } => {
            println!("{}", enhance(&prompt, &style));
        }
        Command::Negative { category } => {
            println!("{}", negative_prompt(&category));
        }
        Command::Prepare {
            prompt,
            negative,
            style,
            category,
            no_enhance,
            preprocess,
            model,
            num_images,
            seed,
        } => {
            let (model_key, preset) = config.preset(model.as_deref())?;
            info!("Using model {} ({})", model_key, preset.repo_id);

            let enhancer = PromptEnhancer::new().with_preprocessing(preprocess);
            let prepared = enhancer.prepare(PromptRequest {
                prompt,
                negative_prompt: negative,
                style: Style::from_name(&style),
                use_enhancement: !no_enhance,
                negative_category: NegativeCategory::from_name(&category),
            });

            let request = GenerationRequest::build(preset, &prepared, num_images, seed)?;
            println!("{}", request.to_json()?);
        }
        Command::Variations { prompt } => {
            for variation in prompt_variations(&prompt, None) {
                println!("{}", variation);
            }
        }
        Command::Keywords { text } => {
            println!("{}", extract_keywords(&text).join(", "));
        }
        Command::Models => {
            for (key, preset) in &config.models {
                let marker = if *key == config.default_model { "*" } else { " " };
                println!(
                    "{} {:<24} {:<36} steps={:<3} guidance={:<4} {}x{}",
                    marker,
                    key,
                    preset.repo_id,
                    preset.inference_steps,
                    preset.guidance_scale,
                    preset.width,
                    preset.height
                );
            }
        }
        Command::Paths {
            prompt,
            count,
            create,
        } => {
            if create {
                ensure_output_dir(&config.output.directory)?;
            }
            let now = chrono::Local::now().naive_local();
            for path in image_paths(&config.output, &prompt, count, now) {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
