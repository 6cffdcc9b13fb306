use anyhow::Context;
use clap::Parser;
use match_feed::utils::{logger, validation::Validate};
use match_feed::{
    CliConfig, FileTarget, Locale, MatchFeedWidget, ProxyClient, RequestConfig, WidgetState,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting match-feed");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.request_config().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(2);
        }
    };

    if cli.dry_run {
        print_summary(&config, &cli);
        return Ok(());
    }

    let source = ProxyClient::new(config.clone()).context("failed to build http client")?;
    let probe = source.crest_probe();
    let target = FileTarget::new(&cli.output, config.locale);
    let mut widget = MatchFeedWidget::new(source, target, config);
    if cli.check_crests {
        widget = widget.with_crest_probe(probe);
    }

    // First cycle runs straight away; later ones only on user request.
    let mut state = widget.fetch_data().await;
    while let WidgetState::ErrorShown(kind) = state {
        eprintln!("{}", kind.message(widget.config().locale));
        if cli.no_prompt || !ask_retry(widget.config().locale).await? {
            break;
        }
        state = widget.retry().await;
    }

    println!("{}", widget.target().path().display());
    match state {
        WidgetState::Rendered { matches } => {
            tracing::info!("Rendered {} matches", matches);
            Ok(())
        }
        WidgetState::Empty => Ok(()),
        _ => std::process::exit(1),
    }
}

async fn ask_retry(locale: Locale) -> anyhow::Result<bool> {
    eprint!("{}", locale.retry_prompt());
    let mut line = String::new();
    let read = BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok(false);
    }
    let answer = line.trim().to_lowercase();
    Ok(matches!(answer.as_str(), "s" | "sim" | "y" | "yes"))
}

fn print_summary(config: &RequestConfig, cli: &CliConfig) {
    println!("Request URL:  {}", config.request_url());
    println!("Origin:       {}", config.origin);
    println!("Timeout:      {} ms", config.timeout_ms);
    println!("Crests:       {}", config.crest_url(0).replace("/0.png", "/{id}.png"));
    println!("Placeholder:  {}", config.placeholder_crest_url);
    println!("Locale:       {:?}", config.locale);
    println!("Output:       {}", cli.output);
    println!("Check crests: {}", cli.check_crests);
}
