use anyhow::{Context, Result};
use dashboard_locale::config::Config;
use dashboard_locale::i18n::LanguageStrings;
use dashboard_locale::{
    FileStore, LocaleHandle, LocaleProvider, MemoryDocument, PreferenceStore, TranslationTable,
    UnavailableStore,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dashboard_locale=info".parse()?),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let store: Arc<dyn PreferenceStore> = if config.persist_preferences {
        info!("Using preferences file {}", config.preferences_path.display());
        Arc::new(FileStore::new(&config.preferences_path))
    } else {
        info!("Preference persistence disabled, language resets every session");
        Arc::new(UnavailableStore::new("disabled by LOCALE_PERSIST"))
    };
    let document = Arc::new(MemoryDocument::new());
    let provider = LocaleProvider::new(TranslationTable::builtin(), store, document.clone());
    let handle = provider.handle();

    // Step 1: server-side render, before any client runtime exists
    println!("{}", document.root_tag());
    render(&handle)?;

    // Step 2: client runtime boots in the background; hydrate once it signals
    let (client_ready, ready) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::task::yield_now().await;
        info!("Client runtime ready");
        let _ = client_ready.send(());
    });
    provider
        .hydrate_when(async {
            let _ = ready.await;
        })
        .await;
    println!("{}", document.root_tag());
    render(&handle)?;

    // Step 3: optional explicit choice from the command line
    if let Some(code) = std::env::args().nth(1) {
        match handle.locale()?.set_language_code(&code) {
            Ok(()) => {
                println!("{}", document.root_tag());
                render(&handle)?;
            }
            Err(e) => warn!("Ignoring language argument: {}", e),
        }
    }

    let metrics = handle.locale()?.metrics()?;
    info!("Locale metrics: {}", serde_json::to_string(&metrics)?);
    Ok(())
}

/// Print the navigation and greeting the way a consumer component reads them.
fn render(handle: &LocaleHandle) -> Result<()> {
    let locale = handle.locale()?;
    let snapshot = locale.snapshot()?;
    let t = snapshot.translations;

    println!(
        "[{} | {} | {:?}]",
        snapshot.language, snapshot.direction, snapshot.phase
    );
    println!(
        "  {} · {} · {} · {} · {} · {} · {}",
        t.nav_dashboard,
        t.nav_bills,
        t.nav_wallet,
        t.nav_donation,
        t.nav_insurance,
        t.nav_referral,
        t.nav_food
    );
    println!("  {}", LanguageStrings::format(t.greeting, &[("name", "Rina")]));

    let switcher: Vec<String> = locale
        .languages()?
        .iter()
        .map(|lang| format!("{} ({})", lang.native_name(), lang.code()))
        .collect();
    println!("  {}: {}", t.language_label, switcher.join(", "));
    Ok(())
}
