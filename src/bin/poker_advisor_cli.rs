use anyhow::{anyhow, Context, Result};
use clap::Parser;

use poker_advisor::api::{analyze, AmountInput, AnalysisRequest, AnalysisResponse};
use poker_advisor::infra::SimulationConfig;

/// Советник по покерной раздаче: эквити + рекомендуемое действие.
///
/// Пример:
///   poker_advisor_cli --hole Ah Kh --board Qh Jh 2c --pot 100 --to-call 40 --stack 900
#[derive(Debug, Parser)]
#[command(name = "poker_advisor_cli", version)]
struct Args {
    /// Две карманные карты (Ah, Td, 10♥, ...).
    #[arg(long, num_args = 2, required = true)]
    hole: Vec<String>,

    /// Карты борда (0–5).
    #[arg(long, num_args = 0..=5)]
    board: Vec<String>,

    /// Размер банка.
    #[arg(long, default_value = "0")]
    pot: String,

    /// Сколько нужно доставить (0, если ставки нет).
    #[arg(long = "to-call", default_value = "0")]
    to_call: String,

    /// Наш стек.
    #[arg(long, default_value = "0")]
    stack: String,

    /// JSON-конфиг симуляции.
    #[arg(long)]
    config: Option<String>,

    /// Количество розыгрышей (перекрывает конфиг).
    #[arg(long)]
    samples: Option<u32>,

    /// Количество шардов (перекрывает конфиг).
    #[arg(long)]
    shards: Option<usize>,

    /// Seed для воспроизводимого результата.
    #[arg(long)]
    seed: Option<u64>,

    /// Вывести ответ в JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path).map_err(|e| anyhow!(e))?,
        None => SimulationConfig::default(),
    };
    if let Some(samples) = args.samples {
        config.samples = samples;
    }
    if let Some(shards) = args.shards {
        config.shards = shards;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate().map_err(|e| anyhow!(e))?;

    let request = AnalysisRequest {
        hole_cards: args.hole.clone(),
        board_cards: args.board.clone(),
        pot_size: Some(AmountInput::Text(args.pot.clone())),
        amount_to_call: Some(AmountInput::Text(args.to_call.clone())),
        stack_size: Some(AmountInput::Text(args.stack.clone())),
    };

    log::info!(
        "[CLI] анализ: hole={:?} board={:?} samples={} shards={}",
        request.hole_cards,
        request.board_cards,
        config.samples,
        config.shards
    );

    let response = analyze(&request, &config).map_err(|e| anyhow!(e.message()))?;

    if args.json {
        let out = serde_json::to_string_pretty(&response).context("serialize response")?;
        println!("{out}");
    } else {
        print_report(&response);
    }

    Ok(())
}

fn print_report(response: &AnalysisResponse) {
    println!("================ ANALYSIS =================");
    println!("Win probability:  {:.1}%", response.win_probability);
    if let Some(best) = &response.best_hand {
        println!("Best hand:        {}", best.label);
    }
    println!("Suggestion:       {}", response.recommendation.action);
    if let (Some(min), Some(max)) = (
        response.recommendation.amount_min,
        response.recommendation.amount_max,
    ) {
        println!("Suggested amount: {min} - {max}");
    }
    println!("===========================================");
}
