use std::{
    io::BufRead as _,
    sync::mpsc::{self, RecvTimeoutError},
    time::Duration,
};

use anyhow::Context as _;
use clap::Parser as _;
use tracing_subscriber::EnvFilter;
use videoswitch::{
    Clock as _, Command, Config, Kiosk, MediaPlayer, MonotonicClock, Playlist, ProcessRegenerator,
    RawOptions, Regenerator, TimelinePlayer, parse_command, probe_playlist,
};

/// Event loop period, roughly one display frame.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    let opts = RawOptions::parse();
    init_tracing();

    let config = Config::from_options(&opts);
    tracing::debug!(?config, "configuration");
    let playlist = Playlist::load(&config.playlist_path);
    let player = TimelinePlayer::new(probe_playlist(&playlist));
    let regenerator = ProcessRegenerator::from_config(&config);
    let mut kiosk = Kiosk::new(&config, &playlist, player, regenerator);

    let lines = spawn_stdin_reader()?;
    let clock = MonotonicClock::start();
    tracing::info!(
        videos = playlist.len(),
        width = config.width,
        height = config.height,
        "kiosk ready; type 'buttons' for videos, 'quit' to exit"
    );

    loop {
        match lines.recv_timeout(FRAME) {
            Ok(line) => match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(Command::Status)) => println!("{}", kiosk.status(clock.now_ms())),
                Ok(Some(Command::Buttons)) => print_buttons(&kiosk),
                Ok(Some(Command::Kiosk(event))) => kiosk.post(event),
                Err(e) => eprintln!("{e}"),
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                tracing::info!("input closed");
                break;
            }
        }
        kiosk.pump(clock.now_ms());
    }

    if kiosk.generator().is_running() {
        tracing::info!("stopping the running word cloud generator");
    }
    Ok(())
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("videoswitch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Forward stdin lines over a channel; the channel closes at end of input.
fn spawn_stdin_reader() -> anyhow::Result<mpsc::Receiver<String>> {
    let (tx, rx) = mpsc::channel();
    std::thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        })
        .context("spawn stdin reader thread")?;
    Ok(rx)
}

fn print_buttons<P: MediaPlayer, R: Regenerator>(kiosk: &Kiosk<P, R>) {
    if kiosk.panel().buttons.is_empty() {
        println!("(no videos)");
    }
    for (i, label) in kiosk.panel().buttons.iter().enumerate() {
        println!("{i}: {label}");
    }
}
