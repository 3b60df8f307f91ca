//! Terminal view for the storylist core.
//!
//! # Responsibility
//! - Render the core view model after every event.
//! - Parse typed commands into view intents and forward them to the session.
//!
//! # Invariants
//! - The view holds no list or search state of its own.
//! - A missing or broken database never stops the view; it runs without
//!   durable storage instead.

mod command;
mod render;

use command::{parse_command, Command, HELP};
use log::warn;
use render::render_view;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use storylist_core::db::open_db;
use storylist_core::{
    init_logging_from_config, CatalogSession, CoreConfig, KeyValueStore, SqliteKeyValueStore,
    UnavailableKeyValueStore,
};

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("storylist: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("storylist: logging disabled: {err}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = match open_db(&config.db_path) {
        Ok(conn) => match SqliteKeyValueStore::try_new(&conn) {
            Ok(store) => run(
                CatalogSession::start(store, &config.session),
                stdin.lock(),
                stdout.lock(),
            ),
            Err(err) => {
                warn!("event=cli_start module=cli status=degraded reason=store_init error={err}");
                run_without_storage(&config, stdin.lock(), stdout.lock())
            }
        },
        Err(err) => {
            warn!("event=cli_start module=cli status=degraded reason=db_open error={err}");
            run_without_storage(&config, stdin.lock(), stdout.lock())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storylist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_without_storage(
    config: &CoreConfig,
    input: impl BufRead,
    output: impl Write,
) -> io::Result<()> {
    run(
        CatalogSession::start(UnavailableKeyValueStore, &config.session),
        input,
        output,
    )
}

/// Drives one session until `quit` or end of input.
fn run<S: KeyValueStore>(
    mut session: CatalogSession<S>,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    write!(output, "{}", render_view(&session.render()))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Ok(Command::Intent(intent)) => {
                session.dispatch(intent);
                write!(output, "{}", render_view(&session.render()))?;
            }
            Ok(Command::Show) => write!(output, "{}", render_view(&session.render()))?,
            Ok(Command::Json) => {
                let json = serde_json::to_string_pretty(&session.render())
                    .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
                writeln!(output, "{json}")?;
            }
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Quit) => return Ok(()),
            Err(err) => writeln!(output, "{err}")?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use storylist_core::{CatalogSession, KeyValueStore, MemoryKeyValueStore, SessionSettings};

    fn drive(store: &MemoryKeyValueStore, script: &str) -> String {
        let session = CatalogSession::start(store, &SessionSettings::default());
        let mut output = Vec::new();
        run(session, script.as_bytes(), &mut output).expect("scripted run");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn scripted_session_adds_and_persists_search() {
        let store = MemoryKeyValueStore::new();
        let output = drive(&store, "search vue\ndraft Vue\nadd\nquit\n");

        assert!(output.contains("Search: [vue]"));
        assert!(output.contains("New: [Vue] (Add enabled)"));
        assert!(output.contains("New: [] (Add disabled)"));
        assert_eq!(store.get("search").expect("get").as_deref(), Some("vue"));

        let restarted = drive(&store, "json\n");
        assert!(restarted.contains("\"searchTerm\": \"vue\""));
    }

    #[test]
    fn invalid_commands_do_not_end_the_session() {
        let store = MemoryKeyValueStore::new();
        let output = drive(&store, "bogus\ntoggle x\nsearch \n");

        assert!(output.contains("unknown command `bogus`"));
        assert!(output.contains("invalid record id `x`"));
        assert!(output.contains("Redux"));
    }
}
