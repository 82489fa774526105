//! Trades command implementation

use crate::{
    cli::types::{RoundSet, Season},
    trades::{Asset, TradeQuery, TradeRow},
    Result,
};

use super::common::CommandContext;

/// Parameters for the trades command
#[derive(Debug, Clone)]
pub struct TradesParams {
    pub username: String,
    pub season: Option<Season>,
    pub rounds: Option<RoundSet>,
    pub as_json: bool,
}

/// Handle the trades command
pub async fn handle_trades(ctx: &CommandContext, params: TradesParams) -> Result<()> {
    let query = TradeQuery {
        season: params.season,
        rounds: params.rounds.unwrap_or_default(),
    };

    let rows = ctx.aggregator.get_trades(&params.username, &query).await?;

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No trades found for {}", params.username.trim());
    } else {
        print!("{}", format_table(&rows));
    }

    Ok(())
}

fn join_assets(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return "-".to_string();
    }
    assets
        .iter()
        .map(Asset::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text table with aligned columns.
pub fn format_table(rows: &[TradeRow]) -> String {
    let headers = ["DATE", "LEAGUE", "WITH", "LOST", "GAINED"];
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.date_label(),
                row.league_name.clone(),
                row.counterparties.join(", "),
                join_assets(&row.lost),
                join_assets(&row.gained),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |values: [&str; 5]| -> String {
        let padded: Vec<String> = values
            .iter()
            .zip(widths)
            .map(|(v, w)| format!("{:<width$}", v, width = w))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = render(headers);
    for line in &cells {
        out.push_str(&render([
            &line[0], &line[1], &line[2], &line[3], &line[4],
        ]));
    }
    out
}
