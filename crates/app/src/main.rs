use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuizLoopService;
use storage::{FsDataSource, HttpDataSource, QuizDataSource};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

/// Command-line arguments for tune-quiz
#[derive(Parser, Debug)]
#[command(name = "tune-quiz")]
#[command(about = "Mood quiz that recommends a track for your answers")]
#[command(version)]
struct Args {
    /// Directory containing questions.json and music.json
    #[arg(long, default_value = "data", env = "TUNE_QUIZ_DATA_DIR")]
    data_dir: PathBuf,

    /// Base URL to fetch the datasets from; takes precedence over --data-dir
    #[arg(long, env = "TUNE_QUIZ_DATA_URL")]
    data_url: Option<String>,

    /// Fixed RNG seed for tie-breaks and track picks
    #[arg(long, env = "TUNE_QUIZ_SEED")]
    seed: Option<u64>,

    /// Window title
    #[arg(long, default_value = "Tune Quiz")]
    title: String,
}

impl Args {
    fn data_source(&self) -> Result<Arc<dyn QuizDataSource>> {
        if let Some(url) = &self.data_url {
            return Ok(Arc::new(HttpDataSource::new(url.clone())));
        }

        let dir = if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            std::env::current_dir()
                .context("failed to resolve the working directory")?
                .join(&self.data_dir)
        };
        Ok(Arc::new(FsDataSource::new(dir)))
    }
}

struct DesktopApp {
    title: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tune_quiz=info,ui=info,services=info,storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let source = args.data_source()?;
    info!(source = %source.describe(), seed = ?args.seed, "starting tune-quiz");

    let quiz_loop = Arc::new(QuizLoopService::new(source).with_seed(args.seed));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        quiz_loop,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title.as_str())
            .with_always_on_top(false),
    );

    // Data is fetched inside the window so load failures can offer a retry.
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_local_data_dir() {
        let args = Args::try_parse_from(["tune-quiz"]).unwrap();
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert!(args.data_url.is_none());
        assert_eq!(args.title, "Tune Quiz");

        let source = args.data_source().unwrap();
        assert!(source.describe().ends_with("data"));
    }

    #[test]
    fn data_url_takes_precedence() {
        let args = Args::try_parse_from([
            "tune-quiz",
            "--data-dir",
            "/srv/quiz",
            "--data-url",
            "http://localhost:8000/data",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));

        let source = args.data_source().unwrap();
        assert_eq!(source.describe(), "http://localhost:8000/data");
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["tune-quiz", "--seed", "abc"]).is_err());
    }
}
