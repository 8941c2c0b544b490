use std::path::PathBuf;

use crowncast_analysis::{
    config::{FactorConfig, SegmentConfig},
    factors::derive_retention_factors,
    segmenter::segment_sessions,
};
use crowncast_model::{
    BattleRecord, CardDatabase, PlayerMeta, PlayerProfile, RetentionPrediction, SessionMetrics,
};
use crowncast_predictor::{
    config::{ChurnWeights, OutcomeConfig},
    outcome::predict_optimal_outcome,
    profile::build_player_profile,
};
use log::info;
use serde::Serialize;

use crate::util::{Output, read_json_file};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Battle history JSON file (array of battle records, timestamp ascending)
    #[arg(long)]
    battles: PathBuf,
    /// Player metadata JSON file
    #[arg(long)]
    meta: PathBuf,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Full pipeline result for one player.
#[derive(Debug, Serialize)]
struct AnalysisReport {
    profile: PlayerProfile,
    sessions: Vec<SessionMetrics>,
    prediction: RetentionPrediction,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let battles: Vec<BattleRecord> = read_json_file("battle history", &arg.battles)?;
    let meta: PlayerMeta = read_json_file("player metadata", &arg.meta)?;
    info!(
        "loaded {} battles for player {}",
        battles.len(),
        meta.player_tag
    );

    let sessions = segment_sessions(&battles, &SegmentConfig::default())?;
    let factors = derive_retention_factors(&battles, &sessions, &FactorConfig::default());
    info!(
        "segmented {} sessions, engagement {:.2}",
        sessions.len(),
        factors.engagement_score
    );

    let cards = CardDatabase::builtin();
    let profile = build_player_profile(
        &meta,
        &battles,
        &sessions,
        factors,
        &cards,
        &ChurnWeights::default(),
    );
    let prediction = predict_optimal_outcome(&profile, &OutcomeConfig::default());
    info!(
        "churn risk {:.1}, recommended outcome {}",
        profile.churn_risk, prediction.optimal_outcome
    );

    let report = AnalysisReport {
        profile,
        sessions,
        prediction,
    };
    Output::from_output_path(arg.output.clone()).save_json(&report)
}
