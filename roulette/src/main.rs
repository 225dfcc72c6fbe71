//! Restaurant roulette entry point: loads settings, wires the adapters, and
//! runs the terminal front end against the orchestrator.

use std::env;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roulette::domain::ports::{
    FixtureAddressSource, FixtureRecommendationSource, LinkOpener, LocationProvider,
};
use roulette::domain::{AppState, Coordinates, Filters, Orchestrator, RoulettePorts};
use roulette::inbound::terminal::run_terminal;
use roulette::outbound::gemini::{
    ContentGenerator, GeminiAddressSource, GeminiClient, GeminiRecommendationSource,
};
use roulette::outbound::location::{
    DEFAULT_STATIC_LOCATION, IpLocationProvider, StaticLocationProvider,
};
use roulette::outbound::system_browser::SystemLinkOpener;
use roulette::{ConfigError, RouletteSettings};

const INTENT_BUFFER: usize = 16;

/// Application bootstrap.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = RouletteSettings::load_from_iter(env::args_os())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    settings.validate().wrap_err("invalid settings")?;
    info!(offline = settings.offline, "starting restaurant roulette");

    let ports = build_ports(&settings)?;
    let language = settings.language()?;
    let state = if settings.ask_permission {
        AppState::awaiting_permission(language, Filters::default())
    } else {
        AppState::new(language, Filters::default())
    };

    let orchestrator = Orchestrator::new(state, ports);
    let views = orchestrator.subscribe();
    let (intents_tx, intents_rx) = mpsc::channel(INTENT_BUFFER);
    let app = tokio::spawn(orchestrator.run(intents_rx));

    run_terminal(tokio::io::stdin(), tokio::io::stdout(), intents_tx, views)
        .await
        .wrap_err("terminal I/O failed")?;

    let state = app.await.wrap_err("orchestrator task failed")?;
    let last_pick = state
        .recent_places()
        .iter()
        .next()
        .map(|place| place.name.as_str());
    info!(
        recent = state.recent_places().len(),
        last_pick, "session finished"
    );
    Ok(())
}

fn build_ports(settings: &RouletteSettings) -> Result<RoulettePorts> {
    let links: Arc<dyn LinkOpener> = Arc::new(SystemLinkOpener);
    let fixed_location = settings.static_location()?;

    if settings.offline {
        let position = match fixed_location {
            Some(position) => position,
            None => Coordinates::new(DEFAULT_STATIC_LOCATION.0, DEFAULT_STATIC_LOCATION.1)?,
        };
        info!(%position, "offline mode: using canned sources");
        return Ok(RoulettePorts::new(
            Arc::new(StaticLocationProvider::new(position)),
            Arc::new(FixtureRecommendationSource),
            Arc::new(FixtureAddressSource),
            links,
        ));
    }

    let api_key = settings.api_key().ok_or(ConfigError::MissingApiKey)?;
    let client = GeminiClient::new(
        &settings.endpoint()?,
        settings.model(),
        api_key,
        settings.model_timeout(),
    )
    .wrap_err("failed to build Gemini client")?;
    info!(model = client.model(), "Gemini client ready");
    let generator: Arc<dyn ContentGenerator> = Arc::new(client);
    let location: Arc<dyn LocationProvider> = match fixed_location {
        Some(position) => Arc::new(StaticLocationProvider::new(position)),
        None => Arc::new(
            IpLocationProvider::new(settings.location_endpoint()?)
                .wrap_err("failed to build location client")?,
        ),
    };

    Ok(RoulettePorts::new(
        location,
        Arc::new(GeminiRecommendationSource::new(Arc::clone(&generator))),
        Arc::new(GeminiAddressSource::new(generator)),
        links,
    ))
}
