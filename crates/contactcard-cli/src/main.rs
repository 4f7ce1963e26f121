//! Contact Card CLI
//!
//! Thin wrapper around contactcard-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Print a vCard
//! contactcard vcard --name "Ada Lovelace" --email ada@example.com
//!
//! # Write contact.vcf into a directory
//! contactcard vcard --name "Ada Lovelace" --out ~/Downloads
//!
//! # Print the share link (and the decoded parameters)
//! contactcard link --name "A&B=C" --explain
//!
//! # Show the share QR in the terminal, or write it as SVG
//! contactcard qr --name "Ada Lovelace"
//! contactcard qr --name "Ada Lovelace" --svg ada.svg
//!
//! # Print an image as a data URL
//! contactcard avatar me.png
//!
//! # Print the form as JSON (round-trips through --form)
//! contactcard record --name "Ada Lovelace" > ada.json
//! contactcard vcard --form ada.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use contactcard_core::avatar::load_data_url;
use contactcard_core::{
    CardConfig, ContactForm, Controller, DirectorySink, DownloadSink, Escaping, FieldId, QrImage,
    ShareEndpoint,
};

/// Contact Card - vCards, share links and QR codes
#[derive(Parser)]
#[command(name = "contactcard")]
#[command(version = "0.1.0")]
#[command(about = "Contact Card - vCards, share links and QR codes")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// "New contact" endpoint of the contacts service
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// QR size in pixels
    #[arg(long, global = true)]
    qr_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the vCard, or write contact.vcf
    Vcard {
        #[command(flatten)]
        fields: FieldArgs,

        /// Directory to write contact.vcf into
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Escape reserved characters (backslash, comma, semicolon, newline)
        #[arg(long)]
        escape: bool,
    },

    /// Print the share link
    Link {
        #[command(flatten)]
        fields: FieldArgs,

        /// Also list the decoded query parameters
        #[arg(long)]
        explain: bool,
    },

    /// Show the share link as a QR code
    Qr {
        #[command(flatten)]
        fields: FieldArgs,

        /// Write the QR code as SVG instead of drawing it
        #[arg(long)]
        svg: Option<PathBuf>,
    },

    /// Print a file as a data URL
    Avatar {
        /// Image file
        file: PathBuf,
    },

    /// Print the form as JSON
    Record {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Contact form fields
#[derive(Args)]
struct FieldArgs {
    /// JSON form to start from; flags override its values
    #[arg(long)]
    form: Option<PathBuf>,

    /// Full name
    #[arg(long)]
    name: Option<String>,

    /// Company
    #[arg(long)]
    company: Option<String>,

    /// Job title
    #[arg(long)]
    title: Option<String>,

    /// Email address
    #[arg(long)]
    email: Option<String>,

    /// Phone number
    #[arg(long)]
    phone: Option<String>,

    /// Postal address
    #[arg(long)]
    address: Option<String>,

    /// Birthday
    #[arg(long)]
    birthday: Option<String>,

    /// Website
    #[arg(long)]
    website: Option<String>,

    /// Notes
    #[arg(long)]
    notes: Option<String>,
}

impl FieldArgs {
    fn into_form(self) -> Result<ContactForm> {
        let mut form = match &self.form {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read form {}", path.display()))?;
                ContactForm::from_json(&json)?
            }
            None => ContactForm::new(),
        };

        let values = [
            (FieldId::Name, self.name),
            (FieldId::Company, self.company),
            (FieldId::Title, self.title),
            (FieldId::Email, self.email),
            (FieldId::Phone, self.phone),
            (FieldId::Address, self.address),
            (FieldId::Birthday, self.birthday),
            (FieldId::Website, self.website),
            (FieldId::Notes, self.notes),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
        Ok(form)
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Config file (if any) with command-line overrides applied
fn load_config(cli: &Cli) -> Result<CardConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = CardConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        None => CardConfig::default(),
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = ShareEndpoint::parse(endpoint)?;
    }
    if let Some(size) = cli.qr_size {
        config.qr_size = size;
    }
    config.validate()?;
    tracing::debug!(
        endpoint = %config.endpoint,
        qr_size = config.qr_size,
        escaping = ?config.escaping,
        "Config ready"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = load_config(&cli)?;

    match cli.command {
        Commands::Vcard { fields, out, escape } => {
            if escape {
                config.escaping = Escaping::Rfc6350;
            }
            let form = fields.into_form()?;
            let card = Controller::new(config).vcard(&form);

            match out {
                Some(dir) => {
                    let path = DirectorySink::new(dir).deliver(&card.export())?;
                    tracing::info!("Saved vCard to {}", path.display());
                    println!("Saved: {}", path.display());
                }
                None => println!("{}", card.render()),
            }
        }

        Commands::Link { fields, explain } => {
            let form = fields.into_form()?;
            let link = Controller::new(config).share_link(&form);
            tracing::debug!(length = link.as_str().len(), "Built share link");
            println!("{}", link);

            if explain {
                println!();
                for (key, value) in link.params()? {
                    println!("  {}: {}", key, value);
                }
            }
        }

        Commands::Qr { fields, svg } => {
            let form = fields.into_form()?;
            let size = config.qr_size;
            let link = Controller::new(config).share_link(&form);
            let image = QrImage::render(link.as_str(), size)?;

            match svg {
                Some(path) => {
                    std::fs::write(&path, image.svg())
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(size, "Wrote QR SVG to {}", path.display());
                    println!("Saved: {}", path.display());
                }
                None => {
                    println!("{}", image.to_terminal()?);
                    println!("{}", link);
                }
            }
        }

        Commands::Avatar { file } => {
            let url = load_data_url(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            tracing::debug!(mime = url.mime(), "Encoded {}", file.display());
            println!("{}", url);
        }

        Commands::Record { fields } => {
            let form = fields.into_form()?;
            println!("{}", form.to_json()?);
        }
    }

    Ok(())
}
