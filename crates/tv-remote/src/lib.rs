pub mod command;
pub mod error;
pub mod model;
pub mod undo_manager;

use std::io::Write;

use anyhow::Context;

pub use command::{handle, CommandHandle, PowerOff, PowerOn, SetChannel, TvCommand};
pub use error::CommandError;
pub use model::Tv;
pub use undo_manager::UndoManager;

/// Fixed demo: switch to channels 1, 2, 3, undo twice, redo twice,
/// writing the channel after every step.
pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let mut tv = Tv::new();
    let mut undo_manager = UndoManager::new();

    for channel in 1..=3 {
        undo_manager
            .execute_cmd(&mut tv, handle(SetChannel::new(channel)))
            .with_context(|| format!("switching to channel {}", channel))?;
        writeln!(out, "switched to channel: {}", tv.channel())?;
    }

    for _ in 0..2 {
        writeln!(out, "undoing...")?;
        undo_manager.undo(&mut tv).context("undo")?;
        writeln!(out, "current channel: {}", tv.channel())?;
    }

    for _ in 0..2 {
        writeln!(out, "redoing...")?;
        undo_manager.redo(&mut tv).context("redo")?;
        writeln!(out, "current channel: {}", tv.channel())?;
    }

    Ok(())
}
