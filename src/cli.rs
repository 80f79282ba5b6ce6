use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tocsplit")]
#[command(about = "Split a compiled book PDF into per-chapter PDFs")]
#[command(version)]
pub struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract one PDF per chapter into an output directory
    Extract {
        /// Compiled source PDF
        #[arg(long)]
        document: PathBuf,

        /// Chapter table: JSON array of {title, startPage} or a LaTeX .toc file
        #[arg(long)]
        chapters: PathBuf,

        /// Output directory
        #[arg(long)]
        out: PathBuf,

        /// Drop a chapter's last page when it has no extractable text
        #[arg(long)]
        trim_blank: bool,

        /// Only write the chapter with this 0-based index
        #[arg(long)]
        chapter: Option<usize>,
    },

    /// Print chapter page ranges and output names without writing files
    Plan {
        /// Compiled source PDF
        #[arg(long)]
        document: PathBuf,

        /// Chapter table: JSON array of {title, startPage} or a LaTeX .toc file
        #[arg(long)]
        chapters: PathBuf,
    },

    /// Copy chapter PDFs to a destination directory (best effort)
    Upload {
        /// Directory containing the extracted chapter PDFs
        #[arg(long)]
        from: PathBuf,

        /// Destination directory (e.g. a mounted remote path)
        #[arg(long)]
        to: PathBuf,
    },
}
