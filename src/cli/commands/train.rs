//! Train command - train a TD(0) learner against a random opponent, then
//! evaluate it frozen against the first-empty heuristic

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::output::{print_kv, print_section},
    pipeline::{
        LogObserver, MetricsObserver, ProgressObserver, TrainingConfig, TrainingPipeline,
        TrainingResult,
    },
    players::{FirstEmptyPlayer, RandomPlayer},
    ports::Player,
    td_learning::{LearnerConfig, LearningPlayer, LearningRateSchedule},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(
    name = "td-tictactoe",
    version,
    about = "Train a TD(0) tic-tac-toe learner by self-play"
)]
pub struct TrainArgs {
    /// Number of training games against the random opponent
    #[arg(long, short = 'g', default_value_t = TrainingConfig::DEFAULT_GAMES)]
    pub games: usize,

    /// Number of evaluation games against the first-empty opponent (defaults to --games)
    #[arg(long, short = 'e')]
    pub eval_games: Option<usize>,

    /// Initial learning rate α (0.0-1.0)
    #[arg(long, short = 'a', default_value_t = LearningRateSchedule::DEFAULT_ALPHA)]
    pub alpha: f64,

    /// Exploration probability ε (0.0-1.0)
    #[arg(long, default_value_t = LearnerConfig::DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Multiply α by this factor every --decay-every games (constant α when omitted)
    #[arg(long)]
    pub decay_factor: Option<f64>,

    /// Games between learning-rate decays
    #[arg(long, default_value_t = LearningRateSchedule::DEFAULT_DECAY_PERIOD)]
    pub decay_every: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Log every move and game
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl TrainArgs {
    fn schedule(&self) -> LearningRateSchedule {
        match self.decay_factor {
            Some(factor) => LearningRateSchedule::step_decay(self.alpha, factor, self.decay_every),
            None => LearningRateSchedule::constant(self.alpha),
        }
    }

    fn learner_config(&self) -> LearnerConfig {
        let config = LearnerConfig::default().with_epsilon(self.epsilon);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn training_config(&self) -> TrainingConfig {
        let config = TrainingConfig::default()
            .with_games(self.games)
            .with_schedule(self.schedule());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn evaluation_config(&self) -> TrainingConfig {
        let config = TrainingConfig::default()
            .with_games(self.eval_games.unwrap_or(self.games))
            .with_schedule(self.schedule())
            .frozen();
        match self.seed {
            Some(seed) => config.with_seed(seed.wrapping_add(2)),
            None => config,
        }
    }
}

#[derive(Debug, Serialize)]
struct PhaseSummary {
    opponent: String,
    config: TrainingConfig,
    result: TrainingResult,
    learning_curve: Vec<f64>,
    average_turns: f64,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    learner: LearnerConfig,
    training: PhaseSummary,
    evaluation: PhaseSummary,
}

pub(crate) fn sanitize_summary_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    // Treat trailing separators or missing filename as a directory target.
    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("training_summary.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}

fn run_phase(
    title: &str,
    config: TrainingConfig,
    learner: &mut LearningPlayer,
    opponent: &mut dyn Player,
    progress: bool,
) -> Result<PhaseSummary> {
    print_section(title);

    let mut metrics = MetricsObserver::default();
    let result = {
        let mut pipeline = TrainingPipeline::new(config.clone())
            .with_observer(Box::new(LogObserver::default()))
            .with_observer(Box::new(&mut metrics));
        if progress {
            pipeline = pipeline.with_observer(Box::new(ProgressObserver::new()));
        }
        pipeline.run(learner, opponent)?
    };

    print_kv("Opponent", opponent.name());
    print_kv("Games", &result.total_games.to_string());
    print_kv(
        "Wins / Draws / Losses",
        &format!("{} / {} / {}", result.wins, result.draws, result.losses),
    );
    print_kv("Average outcome", &format!("{:.4}", result.average_score));
    print_kv("States valued", &result.table_size.to_string());

    Ok(PhaseSummary {
        opponent: opponent.name().to_string(),
        config,
        result,
        learning_curve: metrics.learning_curve().to_vec(),
        average_turns: metrics.average_turns(),
    })
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let learner_config = args.learner_config();
    let mut learner =
        LearningPlayer::from_config(&learner_config).context("invalid learner configuration")?;

    let mut random = RandomPlayer::new(Mark::Opponent);
    let training = run_phase(
        "Training vs random opponent",
        args.training_config(),
        &mut learner,
        &mut random,
        !args.no_progress,
    )?;

    let mut heuristic = FirstEmptyPlayer::new();
    let evaluation = run_phase(
        "Evaluation vs first-empty opponent (frozen)",
        args.evaluation_config(),
        &mut learner,
        &mut heuristic,
        !args.no_progress,
    )?;

    if let Some(raw) = &args.summary {
        let path = sanitize_summary_path(raw);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let summary = RunSummary {
            learner: learner_config,
            training,
            evaluation,
        };
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &summary)?;
        log::info!("wrote summary to {}", path.display());
    }

    Ok(())
}
