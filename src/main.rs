use clap::Parser;
use color_eyre::Result;
use sysdash::app::{self, App};
use sysdash::config::Config;
use sysdash::event::EventHandler;
use sysdash::logging;
use sysdash::system::collector::Collector;

#[derive(Parser)]
#[command(
    name = "sysdash",
    version,
    about = "Live system and process dashboard for the terminal"
)]
struct Cli {
    /// Number of process rows to display
    #[arg(value_name = "ROWS")]
    rows: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = Config::from_rows(cli.rows);
    logging::init_from_env()?;

    let mut terminal = ratatui::try_init()?;
    tracing::info!(rows = config.visible_rows, "terminal acquired");

    let result = run(&mut terminal, config).await;

    ratatui::restore();
    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: Config) -> Result<()> {
    let mut app = App::new(Collector::new(), &config);
    let mut events = EventHandler::new();

    app::run(&mut app, &mut events, config.tick_interval, |app| {
        terminal.draw(|frame| {
            app.check_surface(frame.area().width);
            app.draw(frame);
        })?;
        Ok(())
    })
    .await
}
