use crate::Config;
use crate::io::Adapter;
use crate::io::Format;
use crate::io::ReadOptions;
use crate::io::WriteOptions;
use crate::lookup::Assembler;
use crate::lookup::Run;
use crate::lookup::nspl;
use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(author, version, about = "Postcode sector lookup table", long_about = None)]
pub struct Cli {
    /// Bucket or directory holding raw/ and clean/ (overrides ONS_BUCKET)
    #[arg(long, global = true)]
    bucket: Option<String>,
    /// AWS credentials profile (overrides AWS_PROFILE)
    #[arg(long, global = true)]
    profile: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Assemble the sector lookup table (default)")]
    Build {
        /// Destination, defaulting to clean/lookup.csv under the bucket
        #[arg(long)]
        output: Option<String>,
        /// Read at most this many postcodes
        #[arg(long)]
        limit: Option<usize>,
    },
    #[command(about = "Copy the published NSPL lookup to a destination")]
    Nspl {
        #[arg(required = true)]
        destination: String,
        /// Overrides NSPL_ROOT
        #[arg(long)]
        root: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        let config = Config::from_env()
            .with_bucket(cli.bucket)
            .with_profile(cli.profile);
        match cli.command.unwrap_or(Command::Build {
            output: None,
            limit: None,
        }) {
            Command::Build { output, limit } => {
                let table = Assembler::standard(config).run(&Run { limit, output })?;
                log::info!("lookup holds {} sectors", table.rows());
            }
            Command::Nspl {
                destination,
                root,
                limit,
            } => {
                let config = config.with_nspl_root(root);
                let adapter = Adapter::from(&config);
                let table = nspl(&adapter, &config, &ReadOptions::default().limit(limit))?;
                adapter.write(
                    &table,
                    &destination,
                    Format::infer(&destination),
                    &WriteOptions::default(),
                )?;
            }
        }
        Ok(())
    }
}
