use anyhow::Result;
use clap::Parser as _;

mod cli;
mod context;
mod format;

#[tokio::main]
async fn main() -> Result<()> {
    let params = cli::Command::parse();

    if let Some(level) = cli::verbosity2level(params.verbosity) {
        env_logger::builder()
            .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
            .filter_level(level.to_level_filter())
            .init();
    } else {
        env_logger::Builder::from_env("INVESTFOLIO_LOG")
            .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Millis))
            .init();
    }

    let ctx = context::Context::open(&params)?;

    match params.subcmd {
        cli::SubCommand::Portfolio(sub) => cli::portfolio::run(&ctx, sub).await,
        cli::SubCommand::Holding(sub) => cli::holding::run(&ctx, sub).await,
        cli::SubCommand::Summary(sub) => cli::views::summary(&ctx, sub),
        cli::SubCommand::Allocation(sub) => cli::views::allocation(&ctx, sub),
        cli::SubCommand::Overview => cli::views::overview(&ctx),
    }
}
