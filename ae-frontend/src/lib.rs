use action::Action;
use error::AppError;
use event::EventReader;
use model::Model;
use settings::Settings;
use terminal::TerminalWrapper;

mod action;
pub mod error;
mod event;
mod file;
mod layout;
mod model;
pub mod settings;
mod terminal;
mod update;
mod view;

pub async fn run(settings: Settings) -> Result<(), AppError> {
    let content = file::load(&settings.path)?;
    let mut model = Model::new(settings.path, content);

    let mut terminal = TerminalWrapper::start()?;
    let mut events = EventReader::new();

    let result = run_loop(&mut terminal, &mut events, &mut model).await;
    if let Err(error) = &result {
        tracing::error!("editor loop failed: {:?}", error);
    }

    let shutdown = terminal.shutdown();
    result.and(shutdown)
}

async fn run_loop(
    terminal: &mut TerminalWrapper,
    events: &mut EventReader,
    model: &mut Model,
) -> Result<(), AppError> {
    loop {
        view::render_model(terminal, model)?;

        let messages = match events.next().await? {
            Some(it) => it,
            None => {
                tracing::info!("event stream closed");
                return Ok(());
            }
        };

        for action in update::update_model(model, messages) {
            match action {
                Action::ModeChanged => events.resolver.mode = model.mode.clone(),
                Action::Quit => return Ok(()),
                Action::Redraw => terminal.clear()?,
                Action::Save => update::save::buffer(model),
            }
        }
    }
}
