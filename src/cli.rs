//! コマンドライン定義
//!
//! `youtubei {audio|search|suggestions} [-n <number>] <value>`

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_AUDIO_MIME;
use crate::innertube;

/// Command-line parameters.
#[derive(Debug, Parser)]
#[command(name = "youtubei")]
#[command(version, about = "Query YouTube Music through the InnerTube API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Resolve audio stream URLs for a video ID.
    Audio {
        /// Limit the number of items in the results.
        #[arg(short = 'n', value_name = "NUMBER")]
        size: Option<usize>,
        /// MIME type prefix of the formats to keep.
        #[arg(short, long, default_value = DEFAULT_AUDIO_MIME)]
        mime: String,
        /// Video ID (use `--` before IDs starting with '-').
        value: String,
    },

    /// Search for tracks.
    Search {
        /// Limit the number of items in the results.
        #[arg(short = 'n', value_name = "NUMBER")]
        size: Option<usize>,
        /// Search query.
        value: String,
    },

    /// Fetch search suggestions for a partial query.
    Suggestions {
        /// Limit the number of items in the results.
        #[arg(short = 'n', value_name = "NUMBER")]
        size: Option<usize>,
        /// Partial query.
        value: String,
    },
}

/// サブコマンドを実行し、結果をJSON文字列で返す
///
/// 1回の実行につき1リクエストのみのため、トランスポートは呼び出しごとに作られる。
pub async fn run(command: Commands) -> anyhow::Result<String> {
    let output = match command {
        Commands::Audio { size, mime, value } => {
            let urls = innertube::audio_with_mime(&value, size, &mime, None).await?;
            serde_json::to_string(&urls)?
        }
        Commands::Search { size, value } => {
            let tracks = innertube::search(&value, size, None).await?;
            serde_json::to_string(&tracks)?
        }
        Commands::Suggestions { size, value } => {
            let queries = innertube::suggestions(&value, size, None).await?;
            serde_json::to_string(&queries)?
        }
    };
    Ok(output)
}
