use std::path::PathBuf;

use crowncast_deck::MatchupTable;
use serde::Serialize;

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MatchupArg {
    /// Player archetype name
    #[arg(long)]
    player: String,
    /// Opponent archetype name
    #[arg(long)]
    opponent: String,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct MatchupReport {
    player: String,
    opponent: String,
    /// Expected win rate of the player archetype; 0.5 when the pair is
    /// not in the table.
    win_rate: f32,
}

pub(crate) fn run(arg: &MatchupArg) -> anyhow::Result<()> {
    let table = MatchupTable::builtin();
    let report = MatchupReport {
        player: arg.player.clone(),
        opponent: arg.opponent.clone(),
        win_rate: table.win_rate(&arg.player, &arg.opponent),
    };
    Output::from_output_path(arg.output.clone()).save_json(&report)
}
