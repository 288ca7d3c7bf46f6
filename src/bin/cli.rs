// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Command-line client for the Brasileirão API.
//!
//! ```bash
//! # Champion of a season
//! cargo run --bin brasileirao-cli -- --ano 2023
//!
//! # Results of one round
//! cargo run --bin brasileirao-cli -- --ano 2023 --rodada 37
//! ```

use anyhow::{Context, Result};
use brasileirao_api::client::{render_champion, render_round, ApiClient};
use clap::Parser;
use std::process::ExitCode;
use url::Url;

/// Consulta o campeão ou os jogos de uma rodada do Brasileirão.
///
/// Se a rodada não for informada, mostra o campeão do ano.
#[derive(Parser)]
#[command(name = "brasileirao-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ano do campeonato (ex: 2023)
    #[arg(long)]
    ano: String,

    /// Número da rodada (ex: 37)
    #[arg(long)]
    rodada: Option<String>,

    /// Endereço da API
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let base_url = Url::parse(&cli.base_url)
        .with_context(|| format!("invalid --base-url {}", cli.base_url))?;
    let client = ApiClient::new(base_url);

    match cli.rodada {
        None => match client.get_champion(&cli.ano).await {
            Ok(champion) => println!("{}", render_champion(&cli.ano, &champion)),
            // A missing champion is an answer, not a failure
            Err(e) => println!("{}", e),
        },
        Some(rodada) => match client.get_matches(&cli.ano, &rodada).await {
            Ok(round) => println!("{}", render_round(&cli.ano, &round)),
            Err(e) => {
                println!("Erro: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
